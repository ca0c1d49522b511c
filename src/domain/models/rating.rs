//! Rating Domain Model
//!
//! A rating given to a product. The product is referenced by id only.

use super::product::ProductId;

/// Newtype wrapper for the store-assigned rating id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RatingId(i32);

impl RatingId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for RatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RatingId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Writable fields of a rating, used for both create and full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingData {
    pub product_id: ProductId,
    pub rating: i32,
    pub text: Option<String>,
}

/// Rating domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    id: RatingId,
    product_id: ProductId,
    rating: i32,
    text: Option<String>,
}

impl Rating {
    /// Restore a Rating from persisted data, or bind data to a known id
    #[must_use]
    pub fn restore(id: RatingId, data: RatingData) -> Self {
        Self {
            id,
            product_id: data.product_id,
            rating: data.rating,
            text: data.text,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> RatingId {
        self.id
    }

    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_restore() {
        let rating = Rating::restore(
            RatingId::new(3),
            RatingData {
                product_id: ProductId::new(1),
                rating: 7,
                text: Some("ok".to_string()),
            },
        );

        assert_eq!(rating.id(), RatingId::new(3));
        assert_eq!(rating.product_id(), ProductId::new(1));
        assert_eq!(rating.rating(), 7);
        assert_eq!(rating.text(), Some("ok"));
    }

    #[test]
    fn test_rating_without_text() {
        let rating = Rating::restore(
            RatingId::new(1),
            RatingData {
                product_id: ProductId::new(1),
                rating: -2,
                text: None,
            },
        );

        assert_eq!(rating.text(), None);
        assert_eq!(rating.rating(), -2);
    }
}
