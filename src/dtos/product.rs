// src/dtos/product.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// `price` may be a JSON number or string; either way the digits are read
/// verbatim, so `1200.00` keeps its scale.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}
