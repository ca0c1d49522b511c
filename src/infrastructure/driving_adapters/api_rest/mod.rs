//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateProductUseCase, CreateRatingUseCase, DeleteProductUseCase, DeleteRatingUseCase,
    GetProductUseCase, GetRatingUseCase, ListProductsUseCase, ListRatingsForProductUseCase,
    UpdateProductUseCase, UpdateRatingUseCase,
};
use crate::domain::gateways::{ProductRepository, RatingRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_product_use_case: Arc<CreateProductUseCase>,
    pub get_product_use_case: Arc<GetProductUseCase>,
    pub list_products_use_case: Arc<ListProductsUseCase>,
    pub update_product_use_case: Arc<UpdateProductUseCase>,
    pub delete_product_use_case: Arc<DeleteProductUseCase>,
    pub create_rating_use_case: Arc<CreateRatingUseCase>,
    pub get_rating_use_case: Arc<GetRatingUseCase>,
    pub list_ratings_for_product_use_case: Arc<ListRatingsForProductUseCase>,
    pub update_rating_use_case: Arc<UpdateRatingUseCase>,
    pub delete_rating_use_case: Arc<DeleteRatingUseCase>,
}

impl AppState {
    /// Wire every use case to the given repositories
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        rating_repository: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            create_product_use_case: Arc::new(CreateProductUseCase::new(product_repository.clone())),
            get_product_use_case: Arc::new(GetProductUseCase::new(product_repository.clone())),
            list_products_use_case: Arc::new(ListProductsUseCase::new(product_repository.clone())),
            update_product_use_case: Arc::new(UpdateProductUseCase::new(product_repository.clone())),
            delete_product_use_case: Arc::new(DeleteProductUseCase::new(product_repository)),
            create_rating_use_case: Arc::new(CreateRatingUseCase::new(rating_repository.clone())),
            get_rating_use_case: Arc::new(GetRatingUseCase::new(rating_repository.clone())),
            list_ratings_for_product_use_case: Arc::new(ListRatingsForProductUseCase::new(
                rating_repository.clone(),
            )),
            update_rating_use_case: Arc::new(UpdateRatingUseCase::new(rating_repository.clone())),
            delete_rating_use_case: Arc::new(DeleteRatingUseCase::new(rating_repository)),
        }
    }
}

/// Build the full API router: product and rating routes with request-id
/// tagging and HTTP tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::products::router())
        .merge(handlers::ratings::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
