use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_experiences(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let experiences = state.experiences.list_experiences().await?;

    Ok(HttpResponse::Ok().json(experiences))
}
