//! Get Product Use Case
//!
//! Retrieves a single product by its ID.

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::{Product, ProductId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a product by ID
pub struct GetProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl GetProductUseCase {
    /// Create a new GetProductUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the product doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: ProductId) -> Result<Product, UseCaseError> {
        tracing::debug!(product_id = %id, "Getting product by ID");

        let product = self.product_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(product_id = %id, "Product not found");
            UseCaseError::NotFound {
                resource: "Product",
                id: id.to_string(),
            }
        })?;

        Ok(product)
    }
}
