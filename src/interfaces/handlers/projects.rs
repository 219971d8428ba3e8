use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, ProjectFilter, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::Session,
    AppState,
};

#[instrument(skip(state, filter))]
pub async fn list_projects(
    state: web::Data<AppState>,
    filter: web::Query<ProjectFilter>,
) -> Result<impl Responder, AppError> {
    let projects = state.projects.list_projects(filter.into_inner()).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(slug, state))]
pub async fn get_project(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    // A missing slug serializes as `null` with 200; 404 is reserved for
    // id-keyed writes.
    let project = state.projects.get_project(&slug).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_session, state, data))]
pub async fn create_project(
    _session: Session,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let created = state.projects.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(_session, project_id, state, data))]
pub async fn update_project(
    _session: Session,
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let patch = data.into_inner();
    let updated = state
        .projects
        .update_project(project_id.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(_session, project_id, state))]
pub async fn delete_project(
    _session: Session,
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.projects.delete_project(project_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
