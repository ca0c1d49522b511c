//! Rating Use Cases
//!
//! Business logic for managing product ratings.

mod create_rating;
mod delete_rating;
mod get_rating;
mod list_ratings_for_product;
mod update_rating;

pub use create_rating::CreateRatingUseCase;
pub use delete_rating::DeleteRatingUseCase;
pub use get_rating::GetRatingUseCase;
pub use list_ratings_for_product::ListRatingsForProductUseCase;
pub use update_rating::UpdateRatingUseCase;

use crate::domain::models::ProductId;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Map a broken product reference to `UnknownProduct`, pass everything else through
fn classify(err: RepositoryError, product_id: ProductId) -> UseCaseError {
    match err {
        RepositoryError::ForeignKeyViolation(constraint) => {
            tracing::warn!(product_id = %product_id, constraint = %constraint, "Rating references unknown product");
            UseCaseError::UnknownProduct(product_id)
        }
        other => UseCaseError::Repository(other),
    }
}
