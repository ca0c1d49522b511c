//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Connection pool and migrations

pub mod config;
pub mod database;
pub mod product_repository;
pub mod rating_repository;

pub use config::AppConfig;
pub use product_repository::PostgresProductRepository;
pub use rating_repository::PostgresRatingRepository;
