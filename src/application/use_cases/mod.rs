//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod products;
pub mod ratings;

#[cfg(test)]
pub(crate) mod mocks;

pub use products::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};
pub use ratings::{
    CreateRatingUseCase, DeleteRatingUseCase, GetRatingUseCase, ListRatingsForProductUseCase,
    UpdateRatingUseCase,
};
