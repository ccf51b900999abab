//! Echo API: a descriptor, a health check and a JSON echo.
//!
//! Every handler is stateless; nothing is shared between requests.

use actix_web::{HttpResponse, web};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiDescriptor {
    pub message: &'static str,
    pub health: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct EchoResponse {
    pub received: serde_json::Value,
}

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiDescriptor {
        message: "Pitch Deck API",
        health: "/health",
    })
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// POST /form - echo whatever JSON was posted. Malformed bodies are rejected
/// by the JSON extractor before this runs.
pub async fn form(body: web::Json<serde_json::Value>) -> HttpResponse {
    let received = body.into_inner();
    log::debug!("Form payload received: {received}");
    HttpResponse::Ok().json(EchoResponse { received })
}

/// Mount the API routes. Hosts that do their own listening mount this too.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/form", web::post().to(form));
}
