//! Product Ratings API
//!
//! A Rust-based microservice exposing CRUD over products and their ratings,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
