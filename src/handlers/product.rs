// src/handlers/product.rs
use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::dtos::product::{PageParams, ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::page::{Page, PageRequest};
use crate::state::AppState;

// GET /api/products?page=&size= - List products, one page at a time
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductResponse>>, AppError> {
    let page = state
        .products
        .get_all_products_paged(PageRequest::new(params.page, params.size))
        .await?;

    Ok(Json(page.map(ProductResponse::from)))
}

// GET /api/products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.get_product_by_id(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

// POST /api/products - Create new product
#[instrument(skip(state, auth, payload), fields(user = %auth.username))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state.products.add_product(payload).await?;
    info!(id = product.id, roles = ?auth.roles, "Product created");

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT /api/products/:id - Update product
#[instrument(skip(state, auth, payload), fields(user = %auth.username))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.update_product(id, payload).await?;
    info!(id, roles = ?auth.roles, "Product updated");

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /api/products/:id - Delete product
#[instrument(skip(state, auth), fields(user = %auth.username))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<StatusCode, AppError> {
    if !state.products.delete_product(id).await? {
        return Err(AppError::not_found(format!("Product not found with id: {id}")));
    }

    info!(id, roles = ?auth.roles, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
