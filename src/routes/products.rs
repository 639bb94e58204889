use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::products::{ProductFormError, parse_product_id};
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::{ServiceError, products};

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const PRODUCT_NOT_FOUND: &str = "PRODUCT_NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Largest upsert body read into memory.
pub const MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

// Segments match empty values so a missing id is reported as invalid input
// instead of falling through to the router's 404.
#[get("/products/{product_id:[^/]*}")]
pub async fn show_product(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match products::get_product(repo.get_ref(), &product_id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::InvalidInput(message)) => {
            error_response(StatusCode::BAD_REQUEST, INVALID_INPUT, message)
        }
        Err(ServiceError::NotFound) => error_response(
            StatusCode::NOT_FOUND,
            PRODUCT_NOT_FOUND,
            "The requested product does not exist",
        ),
        Err(err) => {
            log::error!("Failed to retrieve product {product_id}: {err}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                "Failed to retrieve product",
            )
        }
    }
}

#[post("/products/{product_id:[^/]*}/details")]
pub async fn upsert_product_details(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    payload: web::Payload,
) -> impl Responder {
    let body = match payload.to_bytes_limited(MAX_PAYLOAD_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(err)) => {
            log::debug!("Failed to read product payload: {err}");
            return unreadable_body_response(&product_id);
        }
        Err(_) => {
            log::debug!("Product payload exceeded {MAX_PAYLOAD_BYTES} bytes");
            return unreadable_body_response(&product_id);
        }
    };

    match products::upsert_product(repo.get_ref(), &product_id, &body) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::InvalidInput(message)) => {
            error_response(StatusCode::BAD_REQUEST, INVALID_INPUT, message)
        }
        Err(err) => {
            log::error!("Failed to store product {product_id}: {err}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                "Failed to store product",
            )
        }
    }
}

/// Rejection for a body that could not be read; a bad identifier still wins.
fn unreadable_body_response(raw_id: &str) -> HttpResponse {
    let message = match parse_product_id(raw_id) {
        Err(err) => err.to_string(),
        Ok(_) => ProductFormError::InvalidPayload.to_string(),
    };
    error_response(StatusCode::BAD_REQUEST, INVALID_INPUT, message)
}
