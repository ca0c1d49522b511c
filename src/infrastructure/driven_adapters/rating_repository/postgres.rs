//! PostgreSQL Rating Repository Implementation
//!
//! Implements the RatingRepository trait using SQLx for PostgreSQL.
//! The rating text lives in the `info` column.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::RatingRepository;
use crate::domain::models::{Page, ProductId, Rating, RatingData, RatingId};
use crate::shared::errors::RepositoryError;

/// Database row representation for ratings table
#[derive(Debug, sqlx::FromRow)]
struct RatingRow {
    rating_id: i32,
    product_id: i32,
    rating: i32,
    info: Option<String>,
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Rating::restore(
            RatingId::new(row.rating_id),
            RatingData {
                product_id: ProductId::new(row.product_id),
                rating: row.rating,
                text: row.info,
            },
        )
    }
}

/// PostgreSQL implementation of RatingRepository
pub struct PostgresRatingRepository {
    pool: PgPool,
}

impl PostgresRatingRepository {
    /// Create a new PostgresRatingRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn create(&self, data: &RatingData) -> Result<Rating, RepositoryError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            INSERT INTO ratings (product_id, rating, info)
            VALUES ($1, $2, $3)
            RETURNING rating_id, product_id, rating, info
            "#,
        )
        .bind(data.product_id.value())
        .bind(data.rating)
        .bind(data.text.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(Rating::from(row))
    }

    async fn find_by_id(&self, id: RatingId) -> Result<Option<Rating>, RepositoryError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT rating_id, product_id, rating, info
            FROM ratings
            WHERE rating_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Rating::from))
    }

    async fn find_page_for_product(
        &self,
        product_id: ProductId,
        page: Page,
    ) -> Result<Vec<Rating>, RepositoryError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT rating_id, product_id, rating, info
            FROM ratings
            WHERE product_id = $1
            ORDER BY rating_id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(product_id.value())
        .bind(page.count())
        .bind(page.start())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn update(&self, rating: &Rating) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE ratings
            SET product_id = $2,
                rating = $3,
                info = $4
            WHERE rating_id = $1
            "#,
        )
        .bind(rating.id().value())
        .bind(rating.product_id().value())
        .bind(rating.rating())
        .bind(rating.text())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: RatingId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM ratings
            WHERE rating_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
