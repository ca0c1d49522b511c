//! Rating DTOs
//!
//! Data transfer objects for rating API endpoints. The rating text travels
//! as `rating_text` on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::models::{ProductId, Rating, RatingData};

/// Request body for creating or fully updating a rating
#[derive(Debug, Clone, Deserialize)]
pub struct RatingDto {
    pub product_id: i32,
    pub rating: i32,
    #[serde(default)]
    pub rating_text: Option<String>,
}

impl From<RatingDto> for RatingData {
    fn from(dto: RatingDto) -> Self {
        Self {
            product_id: ProductId::new(dto.product_id),
            rating: dto.rating,
            text: dto.rating_text,
        }
    }
}

/// Rating response DTO
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponseDto {
    pub rating_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub rating_text: Option<String>,
}

impl From<Rating> for RatingResponseDto {
    fn from(rating: Rating) -> Self {
        Self {
            rating_id: rating.id().value(),
            product_id: rating.product_id().value(),
            rating: rating.rating(),
            rating_text: rating.text().map(str::to_string),
        }
    }
}
