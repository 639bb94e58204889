use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Liveness probe used by container health checks.
#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
