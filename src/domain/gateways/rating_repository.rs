//! Rating Repository Gateway
//!
//! Abstract trait defining the contract for rating persistence operations.

use async_trait::async_trait;

use crate::domain::models::{Page, ProductId, Rating, RatingData, RatingId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Rating persistence operations
///
/// `create` and `update` fail with `RepositoryError::ForeignKeyViolation`
/// when the referenced product does not exist.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert a new rating, returning it with the store-assigned id
    async fn create(&self, data: &RatingData) -> Result<Rating, RepositoryError>;

    /// Find a rating by its ID
    async fn find_by_id(&self, id: RatingId) -> Result<Option<Rating>, RepositoryError>;

    /// Find one page of ratings for a product, ordered by id.
    /// An unknown product yields an empty page.
    async fn find_page_for_product(
        &self,
        product_id: ProductId,
        page: Page,
    ) -> Result<Vec<Rating>, RepositoryError>;

    /// Overwrite product reference, rating and text. Returns whether a row matched.
    async fn update(&self, rating: &Rating) -> Result<bool, RepositoryError>;

    /// Delete a rating. Returns whether a row matched.
    async fn delete(&self, id: RatingId) -> Result<bool, RepositoryError>;
}
