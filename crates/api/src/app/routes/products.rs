use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{any, get},
    Json, Router,
};

use stockroom_core::ProductId;

use crate::app::dto::{CreateProductRequest, UpdateProductRequest};
use crate::app::errors;
use crate::app::services::ProductService;

/// `/products/balance` is a static segment, so it is matched before
/// `/products/:id`.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", any(redirect_to_collection))
        .route("/products/balance", get(total_balance))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// `307` keeps the method and body, so a `POST /products/` still creates.
pub async fn redirect_to_collection() -> Redirect {
    Redirect::temporary("/products")
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

pub async fn list_products(
    Extension(services): Extension<Arc<ProductService>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list())).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<ProductService>>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.create(body.into()) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.get(id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.update(id, body.into()) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn total_balance(
    Extension(services): Extension<Arc<ProductService>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.balance())).into_response()
}
