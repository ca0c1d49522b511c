//! Create Rating Use Case
//!
//! Persists a new rating for an existing product.

use std::sync::Arc;

use super::classify;
use crate::domain::gateways::RatingRepository;
use crate::domain::models::{Rating, RatingData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new rating
pub struct CreateRatingUseCase {
    rating_repository: Arc<dyn RatingRepository>,
}

impl CreateRatingUseCase {
    /// Create a new CreateRatingUseCase
    #[must_use]
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UnknownProduct` if `product_id` references no product.
    /// Returns `UseCaseError::Repository` if there's any other database error.
    pub async fn execute(&self, data: RatingData) -> Result<Rating, UseCaseError> {
        tracing::info!(product_id = %data.product_id, rating = data.rating, "Creating new rating");

        let created = self
            .rating_repository
            .create(&data)
            .await
            .map_err(|e| classify(e, data.product_id))?;

        tracing::info!(rating_id = %created.id(), "Rating created successfully");
        Ok(created)
    }
}
