use actix_web::{get, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::Session};

/// Liveness probe: constant body, no dependencies touched.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// Echoes the caller's verified session claims. Session diagnostics only.
#[get("/private-data")]
#[instrument(skip(session))]
pub async fn private_data(session: Session) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "This is private",
        "user": session.0,
    })))
}
