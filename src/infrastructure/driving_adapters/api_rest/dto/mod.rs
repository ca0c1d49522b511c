//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod page;
pub mod product;
pub mod rating;

use serde::Serialize;

pub use page::PageQueryDto;
pub use product::{ProductDto, ProductResponseDto};
pub use rating::{RatingDto, RatingResponseDto};

/// Body returned by delete endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponseDto {
    pub result: &'static str,
}

impl ResultResponseDto {
    #[must_use]
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
