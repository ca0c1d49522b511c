//! PostgreSQL Product Repository Implementation
//!
//! Implements the ProductRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::{Page, Product, ProductData, ProductId};
use crate::shared::errors::RepositoryError;

/// Database row representation for products table
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::restore(
            ProductId::new(row.id),
            ProductData {
                name: row.name,
                price: row.price,
            },
        )
    }
}

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Create a new PostgresProductRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, data: &ProductData) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price
            "#,
        )
        .bind(&data.name)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product::from(row))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.count())
        .bind(page.start())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                price = $3
            WHERE id = $1
            "#,
        )
        .bind(product.id().value())
        .bind(product.name())
        .bind(product.price())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
