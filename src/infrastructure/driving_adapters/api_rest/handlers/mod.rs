//! HTTP Handlers
//!
//! Route handlers grouped by resource, plus the input helpers they share.

pub mod products;
pub mod ratings;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;

use crate::domain::models::Page;
use crate::infrastructure::driving_adapters::api_rest::dto::PageQueryDto;
use crate::shared::errors::{ApiError, INVALID_PAYLOAD_MESSAGE};

/// Raw `key=value` pairs of a query string, in order of appearance
type QueryPairs = Vec<(String, String)>;

/// Parse a numeric path id, rejecting anything else with `message`
fn parse_id(raw: &str, message: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        tracing::debug!(raw_id = %raw, "Rejected non-numeric id");
        ApiError::BadRequest(message.to_string())
    })
}

/// Extract a numeric path id. A segment axum cannot decode is rejected
/// with `message` just like a non-numeric one.
fn path_id(path: Result<Path<String>, PathRejection>, message: &str) -> Result<i32, ApiError> {
    match path {
        Ok(Path(raw)) => parse_id(&raw, message),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Rejected path id");
            Err(ApiError::BadRequest(message.to_string()))
        }
    }
}

/// Resolve the pagination window from the query string.
///
/// Never fails: the first occurrence of a repeated key wins and an
/// undecodable query string falls back to the default page.
fn page_from_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Page {
    match query {
        Ok(Query(pairs)) => Page::from(pairs.into_iter().collect::<PageQueryDto>()),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Ignoring undecodable query string");
            Page::default()
        }
    }
}

/// Unwrap a decoded JSON body, turning any decode failure into a bad request
fn decode_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Rejected request payload");
            Err(ApiError::BadRequest(INVALID_PAYLOAD_MESSAGE.to_string()))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id("42", "Invalid product ID").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("abc", "Invalid rating ID").unwrap_err();
        assert_eq!(err.to_string(), "Invalid rating ID");
    }

    #[test]
    fn test_page_from_query_takes_first_repeated_value() {
        let pairs = vec![
            ("count".to_string(), "2".to_string()),
            ("count".to_string(), "3".to_string()),
            ("start".to_string(), "4".to_string()),
        ];

        let page = page_from_query(Ok(Query(pairs)));

        assert_eq!(page.count(), 2);
        assert_eq!(page.start(), 4);
    }
}
