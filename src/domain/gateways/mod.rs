//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod product_repository;
pub mod rating_repository;

pub use product_repository::ProductRepository;
pub use rating_repository::RatingRepository;
