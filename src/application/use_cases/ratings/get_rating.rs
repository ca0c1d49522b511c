//! Get Rating Use Case
//!
//! Retrieves a single rating by its ID.

use std::sync::Arc;

use crate::domain::gateways::RatingRepository;
use crate::domain::models::{Rating, RatingId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a rating by ID
pub struct GetRatingUseCase {
    rating_repository: Arc<dyn RatingRepository>,
}

impl GetRatingUseCase {
    /// Create a new GetRatingUseCase
    #[must_use]
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rating doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: RatingId) -> Result<Rating, UseCaseError> {
        tracing::debug!(rating_id = %id, "Getting rating by ID");

        self.rating_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(rating_id = %id, "Rating not found");
            UseCaseError::NotFound {
                resource: "Rating",
                id: id.to_string(),
            }
        })
    }
}
