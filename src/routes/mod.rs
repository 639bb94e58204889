use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

pub mod health;
pub mod products;

/// Error body returned by every JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable description.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Build a JSON error response with the given status and code.
pub fn error_response(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: code,
        message: message.into(),
        details: None,
    })
}

/// Register every endpoint served by the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::healthz)
        .service(products::show_product)
        .service(products::upsert_product_details);
}
