//! List Products Use Case
//!
//! Retrieves one page of products.

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::{Page, Product};
use crate::shared::errors::UseCaseError;

/// Use case for listing products
pub struct ListProductsUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    /// Create a new ListProductsUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case. An empty table yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, page: Page) -> Result<Vec<Product>, UseCaseError> {
        tracing::debug!(start = page.start(), count = page.count(), "Listing products");

        let products = self.product_repository.find_page(page).await?;

        tracing::debug!(found = products.len(), "Found products");
        Ok(products)
    }
}
