//! Delete Rating Use Case

use std::sync::Arc;

use crate::domain::gateways::RatingRepository;
use crate::domain::models::RatingId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a rating
pub struct DeleteRatingUseCase {
    rating_repository: Arc<dyn RatingRepository>,
}

impl DeleteRatingUseCase {
    /// Create a new DeleteRatingUseCase
    #[must_use]
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }

    /// Execute the use case. Deleting a missing rating succeeds.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: RatingId) -> Result<(), UseCaseError> {
        tracing::info!(rating_id = %id, "Deleting rating");

        if self.rating_repository.delete(id).await? {
            tracing::info!(rating_id = %id, "Rating deleted successfully");
        } else {
            tracing::warn!(rating_id = %id, "Rating delete matched no rows");
        }

        Ok(())
    }
}
