//! Product Domain Model
//!
//! A product that can be rated. Products never hold their ratings; ratings
//! point back at a product through its id.

use rust_decimal::Decimal;

/// Number of fractional digits a product price is stored with
pub const PRICE_SCALE: u32 = 2;

/// Newtype wrapper for the store-assigned product id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Writable fields of a product, used for both create and full update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub price: Decimal,
}

impl ProductData {
    /// Create product data, normalizing the price to two fractional digits
    #[must_use]
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            name,
            price: price.round_dp(PRICE_SCALE),
        }
    }
}

/// Product domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
}

impl Product {
    /// Restore a Product from persisted data, or bind data to a known id
    #[must_use]
    pub fn restore(id: ProductId, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
