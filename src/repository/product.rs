use sqlx::SqliteConnection;

use crate::dtos::product::ProductRequest;
use crate::models::page::{Page, PageRequest};
use crate::models::product::Product;

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT id, name, description, price FROM products ORDER BY id")
        .fetch_all(conn)
        .await
}

pub async fn find_all_paged(
    conn: &mut SqliteConnection,
    request: &PageRequest,
) -> Result<Page<Product>, sqlx::Error> {
    let total = count(&mut *conn).await?;

    let content = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price
         FROM products ORDER BY id
         LIMIT ? OFFSET ?",
    )
    .bind(request.limit())
    .bind(request.offset())
    .fetch_all(&mut *conn)
    .await?;

    Ok(Page::new(content, request, total))
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Save a new product; the store assigns its id.
pub async fn insert(
    conn: &mut SqliteConnection,
    request: &ProductRequest,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price)
         VALUES (?, ?, ?)
         RETURNING id, name, description, price",
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.price.to_string())
    .fetch_one(conn)
    .await
}

/// Save an existing product. Fails with `RowNotFound` if the id is gone.
pub async fn save(conn: &mut SqliteConnection, product: &Product) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = ?, description = ?, price = ?
         WHERE id = ?
         RETURNING id, name, description, price",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.to_string())
    .bind(product.id)
    .fetch_one(conn)
    .await
}

pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn exists_by_id(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)")
        .bind(id)
        .fetch_one(conn)
        .await?;
    Ok(found != 0)
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(conn)
        .await
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::database::test_pool;

    fn request(name: &str, price: Decimal) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let saved = insert(&mut *conn, &request("Monitor", Decimal::new(39999, 2)))
            .await
            .unwrap();
        let found = find_by_id(&mut *conn, saved.id).await.unwrap();

        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn price_keeps_its_scale() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let saved = insert(&mut *conn, &request("Laptop", Decimal::new(120000, 2)))
            .await
            .unwrap();

        assert_eq!(saved.price.to_string(), "1200.00");
    }

    #[tokio::test]
    async fn exists_and_delete() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let saved = insert(&mut *conn, &request("Cable", Decimal::new(5, 0)))
            .await
            .unwrap();
        assert!(exists_by_id(&mut *conn, saved.id).await.unwrap());

        delete_by_id(&mut *conn, saved.id).await.unwrap();
        assert!(!exists_by_id(&mut *conn, saved.id).await.unwrap());
        assert_eq!(find_by_id(&mut *conn, saved.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn paged_results_are_ordered_by_id() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        for name in ["a", "b", "c", "d", "e"] {
            insert(&mut *conn, &request(name, Decimal::ONE)).await.unwrap();
        }

        let page = find_all_paged(&mut *conn, &PageRequest::new(Some(1), Some(2)))
            .await
            .unwrap();

        let names: Vec<_> = page.content.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "d"]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn save_on_missing_row_is_row_not_found() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let ghost = Product {
            id: 42,
            name: "ghost".into(),
            description: "gone".into(),
            price: Decimal::ZERO,
        };

        let err = save(&mut *conn, &ghost).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::RowNotFound));
    }
}
