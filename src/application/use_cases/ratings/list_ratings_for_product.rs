//! List Ratings For Product Use Case
//!
//! Retrieves one page of the ratings that reference a product. The product
//! itself is not looked up: an unknown product simply has no ratings.

use std::sync::Arc;

use crate::domain::gateways::RatingRepository;
use crate::domain::models::{Page, ProductId, Rating};
use crate::shared::errors::UseCaseError;

/// Use case for listing the ratings of a product
pub struct ListRatingsForProductUseCase {
    rating_repository: Arc<dyn RatingRepository>,
}

impl ListRatingsForProductUseCase {
    /// Create a new ListRatingsForProductUseCase
    #[must_use]
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, product_id: ProductId, page: Page) -> Result<Vec<Rating>, UseCaseError> {
        tracing::debug!(
            product_id = %product_id,
            start = page.start(),
            count = page.count(),
            "Listing ratings for product"
        );

        let ratings = self
            .rating_repository
            .find_page_for_product(product_id, page)
            .await?;

        tracing::debug!(found = ratings.len(), "Found ratings");
        Ok(ratings)
    }
}
