//! Product Repository Gateway
//!
//! Abstract trait defining the contract for product persistence operations.

use async_trait::async_trait;

use crate::domain::models::{Page, Product, ProductData, ProductId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Product persistence operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, returning it with the store-assigned id
    async fn create(&self, data: &ProductData) -> Result<Product, RepositoryError>;

    /// Find a product by its ID
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Find one page of products, ordered by id
    async fn find_page(&self, page: Page) -> Result<Vec<Product>, RepositoryError>;

    /// Overwrite name and price. Returns whether a row matched.
    async fn update(&self, product: &Product) -> Result<bool, RepositoryError>;

    /// Delete a product. Returns whether a row matched.
    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError>;
}
