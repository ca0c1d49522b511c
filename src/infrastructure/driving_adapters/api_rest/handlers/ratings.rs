//! Rating Handlers
//!
//! HTTP handlers for rating CRUD operations and the per-product listing.

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
use crate::domain::models::{ProductId, RatingData, RatingId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    RatingDto, RatingResponseDto, ResultResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

const INVALID_RATING_ID: &str = "Invalid rating ID";
const INVALID_PRODUCT_ID: &str = "Invalid product ID";

/// Create the router for rating endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rating", post(create_rating))
        .route(
            "/rating/{rating_id}",
            get(get_rating).put(update_rating).delete(delete_rating),
        )
        .route("/ratings/{product_id}", get(list_ratings_for_product))
}

/// POST /rating - Create a new rating
///
/// # Responses
///
/// * 201 Created - Rating created, body carries the assigned rating_id
/// * 400 Bad Request - Malformed payload, or no product with the given id
#[axum::debug_handler]
async fn create_rating(
    State(state): State<AppState>,
    payload: Result<Json<RatingDto>, JsonRejection>,
) -> Result<(StatusCode, Json<RatingResponseDto>), ApiError> {
    let data = RatingData::from(decode_payload(payload)?);

    let rating = state.create_rating_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(RatingResponseDto::from(rating))))
}

/// GET /rating/{rating_id} - Get a rating by ID
///
/// # Responses
///
/// * 200 OK - Rating found
/// * 400 Bad Request - Non-numeric id
/// * 404 Not Found - Rating does not exist
#[axum::debug_handler]
async fn get_rating(
    State(state): State<AppState>,
    rating_id: Result<Path<String>, PathRejection>,
) -> Result<Json<RatingResponseDto>, ApiError> {
    let id = RatingId::new(path_id(rating_id, INVALID_RATING_ID)?);

    let rating = state.get_rating_use_case.execute(id).await?;

    Ok(Json(RatingResponseDto::from(rating)))
}

/// GET /ratings/{product_id}?start=&count= - List ratings of a product
///
/// # Responses
///
/// * 200 OK - Possibly empty list, also for unknown products
/// * 400 Bad Request - Non-numeric product id
#[axum::debug_handler]
async fn list_ratings_for_product(
    State(state): State<AppState>,
    product_id: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<RatingResponseDto>>, ApiError> {
    let product_id = ProductId::new(path_id(product_id, INVALID_PRODUCT_ID)?);

    let ratings = state
        .list_ratings_for_product_use_case
        .execute(product_id, page_from_query(query))
        .await?;

    Ok(Json(ratings.into_iter().map(RatingResponseDto::from).collect()))
}

/// PUT /rating/{rating_id} - Full update of a rating
///
/// # Responses
///
/// * 200 OK - Rating as written
/// * 400 Bad Request - Non-numeric id, malformed payload, or unknown product
#[axum::debug_handler]
async fn update_rating(
    State(state): State<AppState>,
    rating_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<RatingDto>, JsonRejection>,
) -> Result<Json<RatingResponseDto>, ApiError> {
    let id = RatingId::new(path_id(rating_id, INVALID_RATING_ID)?);
    let data = RatingData::from(decode_payload(payload)?);

    let rating = state.update_rating_use_case.execute(id, data).await?;

    Ok(Json(RatingResponseDto::from(rating)))
}

/// DELETE /rating/{rating_id} - Delete a rating
///
/// # Responses
///
/// * 200 OK - `{"result": "success"}`, whether or not the rating existed
/// * 400 Bad Request - Non-numeric id
#[axum::debug_handler]
async fn delete_rating(
    State(state): State<AppState>,
    rating_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponseDto>, ApiError> {
    let id = RatingId::new(path_id(rating_id, INVALID_RATING_ID)?);

    state.delete_rating_use_case.execute(id).await?;

    Ok(Json(ResultResponseDto::success()))
}
