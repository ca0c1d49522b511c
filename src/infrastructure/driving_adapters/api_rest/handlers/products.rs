//! Product Handlers
//!
//! HTTP handlers for product CRUD operations.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::{decode_payload, page_from_query, path_id, QueryPairs};
use crate::domain::models::{ProductData, ProductId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    ProductDto, ProductResponseDto, ResultResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

const INVALID_PRODUCT_ID: &str = "Invalid product ID";

/// Create the router for product endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products", get(list_products))
}

/// POST /product - Create a new product
///
/// # Responses
///
/// * 201 Created - Product created, body carries the assigned id
/// * 400 Bad Request - Malformed or invalid payload
#[axum::debug_handler]
async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponseDto>), ApiError> {
    let data = ProductData::try_from(decode_payload(payload)?)?;

    let product = state.create_product_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(ProductResponseDto::from(product))))
}

/// GET /product/{id} - Get a product by ID
///
/// # Responses
///
/// * 200 OK - Product found
/// * 400 Bad Request - Non-numeric id
/// * 404 Not Found - Product does not exist
#[axum::debug_handler]
async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProductResponseDto>, ApiError> {
    let id = ProductId::new(path_id(id, INVALID_PRODUCT_ID)?);

    let product = state.get_product_use_case.execute(id).await?;

    Ok(Json(ProductResponseDto::from(product)))
}

/// GET /products?start=&count= - List one page of products
///
/// # Responses
///
/// * 200 OK - Possibly empty list
#[axum::debug_handler]
async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<ProductResponseDto>>, ApiError> {
    let products = state.list_products_use_case.execute(page_from_query(query)).await?;

    let response: Vec<ProductResponseDto> = products.into_iter().map(ProductResponseDto::from).collect();
    Ok(Json(response))
}

/// PUT /product/{id} - Full update of a product
///
/// The path id always wins over an id in the body.
///
/// # Responses
///
/// * 200 OK - Product as written
/// * 400 Bad Request - Non-numeric id or invalid payload
#[axum::debug_handler]
async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<Json<ProductResponseDto>, ApiError> {
    let id = ProductId::new(path_id(id, INVALID_PRODUCT_ID)?);
    let data = ProductData::try_from(decode_payload(payload)?)?;

    let product = state.update_product_use_case.execute(id, data).await?;

    Ok(Json(ProductResponseDto::from(product)))
}

/// DELETE /product/{id} - Delete a product
///
/// # Responses
///
/// * 200 OK - `{"result": "success"}`, whether or not the product existed
/// * 400 Bad Request - Non-numeric id
#[axum::debug_handler]
async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponseDto>, ApiError> {
    let id = ProductId::new(path_id(id, INVALID_PRODUCT_ID)?);

    state.delete_product_use_case.execute(id).await?;

    Ok(Json(ResultResponseDto::success()))
}
