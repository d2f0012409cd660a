use rust_decimal::Decimal;
use tracing::info;

use crate::dtos::product::ProductRequest;
use crate::services::product::{ProductError, ProductService};

fn sample_products() -> [ProductRequest; 3] {
    [
        ProductRequest {
            name: "Laptop Pro".to_string(),
            description: "Powerful laptop for professionals".to_string(),
            price: Decimal::new(120000, 2),
        },
        ProductRequest {
            name: "Wireless Mouse".to_string(),
            description: "Ergonomic wireless mouse".to_string(),
            price: Decimal::new(2599, 2),
        },
        ProductRequest {
            name: "Mechanical Keyboard".to_string(),
            description: "RGB mechanical gaming keyboard".to_string(),
            price: Decimal::new(8995, 2),
        },
    ]
}

/// Populate the catalog with sample products when it is empty.
///
/// Returns how many products were inserted (0 when data already existed).
pub async fn load_initial_products(service: &ProductService) -> Result<usize, ProductError> {
    if !service.get_all_products().await?.is_empty() {
        info!("Products already exist, skipping initial data load.");
        return Ok(0);
    }

    info!("Loading initial product data...");

    let samples = sample_products();
    let inserted = samples.len();
    for product in samples {
        service.add_product(product).await?;
    }

    info!("Initial product data loaded.");
    Ok(inserted)
}
