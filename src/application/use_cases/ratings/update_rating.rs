//! Update Rating Use Case
//!
//! Overwrites product reference, score and text of a rating.

use std::sync::Arc;

use super::classify;
use crate::domain::gateways::RatingRepository;
use crate::domain::models::{Rating, RatingData, RatingId};
use crate::shared::errors::UseCaseError;

/// Use case for a full update of a rating
pub struct UpdateRatingUseCase {
    rating_repository: Arc<dyn RatingRepository>,
}

impl UpdateRatingUseCase {
    /// Create a new UpdateRatingUseCase
    #[must_use]
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }

    /// Execute the use case.
    ///
    /// An id that matches no row is not an error; the rating is returned
    /// as requested.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UnknownProduct` if the new `product_id` references no product.
    /// Returns `UseCaseError::Repository` if there's any other database error.
    pub async fn execute(&self, id: RatingId, data: RatingData) -> Result<Rating, UseCaseError> {
        tracing::info!(rating_id = %id, "Updating rating");

        let product_id = data.product_id;
        let rating = Rating::restore(id, data);
        let matched = self
            .rating_repository
            .update(&rating)
            .await
            .map_err(|e| classify(e, product_id))?;

        if matched {
            tracing::info!(rating_id = %id, "Rating updated successfully");
        } else {
            tracing::warn!(rating_id = %id, "Rating update matched no rows");
        }

        Ok(rating)
    }
}
