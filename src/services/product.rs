//! Product lifecycle operations.
//!
//! Reads and updates escalate a missing record into [`ProductError::NotFound`];
//! deletion of a missing record is a plain `Ok(false)`.

use tracing::{debug, instrument};

use crate::database::DbPool;
use crate::dtos::product::ProductRequest;
use crate::models::page::{Page, PageRequest};
use crate::models::product::Product;
use crate::repository::product as repo;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found with id: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct ProductService {
    db_pool: DbPool,
}

impl ProductService {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<Product>, ProductError> {
        let mut conn = self.db_pool.acquire().await?;
        Ok(repo::find_all_paged(&mut *conn, &request).await?)
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        let mut conn = self.db_pool.acquire().await?;
        Ok(repo::find_all(&mut *conn).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Result<Product, ProductError> {
        let mut conn = self.db_pool.acquire().await?;
        repo::find_by_id(&mut *conn, id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add_product(&self, request: ProductRequest) -> Result<Product, ProductError> {
        let mut tx = self.db_pool.begin().await?;
        let product = repo::insert(&mut *tx, &request).await?;
        tx.commit().await?;

        debug!(id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> Result<Product, ProductError> {
        let mut tx = self.db_pool.begin().await?;

        let mut existing = repo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        existing.name = request.name;
        existing.description = request.description;
        existing.price = request.price;

        let updated = repo::save(&mut *tx, &existing).await?;
        tx.commit().await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<bool, ProductError> {
        let mut tx = self.db_pool.begin().await?;

        if !repo::exists_by_id(&mut *tx, id).await? {
            return Ok(false);
        }

        repo::delete_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Row count for the diagnostics console.
    pub async fn count_products(&self) -> Result<i64, ProductError> {
        let mut conn = self.db_pool.acquire().await?;
        Ok(repo::count(&mut *conn).await?)
    }
}
