//! Product DTOs
//!
//! Data transfer objects for product API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::{Product, ProductData};
use crate::shared::errors::ApiError;

/// Request body for creating or fully updating a product.
///
/// Any `id` in the body is ignored; the store assigns ids and updates take
/// the id from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Bounded by what a `NUMERIC(10,2)` column accepts
    #[validate(range(min = 0.0, max = 99999999.99, message = "price must be between 0 and 99999999.99"))]
    pub price: f64,
}

impl TryFrom<ProductDto> for ProductData {
    type Error = ApiError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        let price = Decimal::try_from(dto.price)
            .map_err(|_| ApiError::BadRequest("price cannot be represented as a decimal".to_string()))?;

        Ok(ProductData::new(dto.name, price))
    }
}

/// Product response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponseDto {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().value(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}
