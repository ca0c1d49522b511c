//! Delete Product Use Case

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::ProductId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a product
pub struct DeleteProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl DeleteProductUseCase {
    /// Create a new DeleteProductUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case. Deleting a missing product succeeds.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including a product still referenced by ratings.
    pub async fn execute(&self, id: ProductId) -> Result<(), UseCaseError> {
        tracing::info!(product_id = %id, "Deleting product");

        let deleted = self.product_repository.delete(id).await?;

        if deleted {
            tracing::info!(product_id = %id, "Product deleted successfully");
        } else {
            tracing::warn!(product_id = %id, "Product delete matched no rows");
        }

        Ok(())
    }
}
