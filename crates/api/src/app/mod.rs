//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: validation and outcome rules for each product operation
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use stockroom_infra::ProductRepository;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Each call gets its own service over `repo`, so tests can run isolated
/// apps side by side.
pub fn build_app(repo: ProductRepository) -> Router {
    let services = Arc::new(services::ProductService::new(repo));

    Router::new()
        .route("/", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
