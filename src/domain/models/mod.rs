//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod page;
pub mod product;
pub mod rating;

pub use page::Page;
pub use product::{Product, ProductData, ProductId};
pub use rating::{Rating, RatingData, RatingId};
