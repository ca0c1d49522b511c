//! Update Product Use Case
//!
//! Overwrites name and price of a product.

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::{Product, ProductData, ProductId};
use crate::shared::errors::UseCaseError;

/// Use case for a full update of a product
pub struct UpdateProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    /// Create a new UpdateProductUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case.
    ///
    /// An id that matches no row is not an error; the product is returned
    /// as requested.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: ProductId, data: ProductData) -> Result<Product, UseCaseError> {
        tracing::info!(product_id = %id, "Updating product");

        let product = Product::restore(id, data);
        let matched = self.product_repository.update(&product).await?;

        if matched {
            tracing::info!(product_id = %id, "Product updated successfully");
        } else {
            tracing::warn!(product_id = %id, "Product update matched no rows");
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::mocks::InMemoryRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_update_only_targeted_product() {
        let repo = Arc::new(InMemoryRepository::new().with_products(2));

        let use_case = UpdateProductUseCase::new(repo.clone());
        let updated = use_case
            .execute(
                ProductId::new(1),
                ProductData::new("renamed".to_string(), dec!(11.22)),
            )
            .await
            .unwrap();
        assert_eq!(updated.id(), ProductId::new(1));

        let first = repo.find_by_id(ProductId::new(1)).await.unwrap().unwrap();
        let second = repo.find_by_id(ProductId::new(2)).await.unwrap().unwrap();
        assert_eq!(first.name(), "renamed");
        assert_eq!(first.price(), dec!(11.22));
        assert_eq!(second.name(), "Product 1");
    }

    #[tokio::test]
    async fn should_accept_update_of_missing_product() {
        let repo = Arc::new(InMemoryRepository::new());

        let use_case = UpdateProductUseCase::new(repo.clone());
        let result = use_case
            .execute(ProductId::new(99), ProductData::new("ghost".to_string(), dec!(1)))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.product_count(), 0);
    }
}
