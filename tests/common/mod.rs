//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use product_ratings_api::infrastructure::driven_adapters::database::run_migrations;
use product_ratings_api::infrastructure::driven_adapters::{
    PostgresProductRepository, PostgresRatingRepository,
};
use product_ratings_api::infrastructure::driving_adapters::api_rest::{router, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let product_repository = Arc::new(PostgresProductRepository::new(pool.clone()));
        let rating_repository = Arc::new(PostgresRatingRepository::new(pool.clone()));

        let router = router(AppState::new(product_repository, rating_repository));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Insert `count` products directly, named "Product {i}" priced (i+1)*10
    pub async fn add_products(&self, count: i32) {
        for i in 0..count.max(1) {
            sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2)")
                .bind(format!("Product {}", i))
                .bind(rust_decimal::Decimal::from((i + 1) * 10))
                .execute(&self.pool)
                .await
                .expect("Failed to insert product");
        }
    }

    /// Insert `count` ratings for product 1, with scores 0..count
    pub async fn add_ratings(&self, count: i32) {
        for i in 0..count.max(1) {
            sqlx::query("INSERT INTO ratings (product_id, rating, info) VALUES ($1, $2, $3)")
                .bind(1_i32)
                .bind(i)
                .bind("Static rating text...")
                .execute(&self.pool)
                .await
                .expect("Failed to insert rating");
        }
    }

    /// Send a request and return the status with the raw body
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Send a request and decode the JSON response body
    pub async fn send_json(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, text) = self.send(method, uri, body).await;
        (status, serde_json::from_str(&text).unwrap())
    }
}
