//! Create Product Use Case
//!
//! Persists a new product and returns it with its assigned id.

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::{Product, ProductData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new product
pub struct CreateProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    /// Create a new CreateProductUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: ProductData) -> Result<Product, UseCaseError> {
        tracing::info!(name = %data.name, price = %data.price, "Creating new product");

        let created = self.product_repository.create(&data).await?;

        tracing::info!(product_id = %created.id(), "Product created successfully");
        Ok(created)
    }
}
