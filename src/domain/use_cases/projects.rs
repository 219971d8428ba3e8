use chrono::Utc;
use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectFilter, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects, narrowed to featured ones when the filter asks for it.
    pub async fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>, AppError> {
        self.project_repo
            .list_projects(filter.featured.unwrap_or(false))
            .await
    }

    /// Point lookup by slug. Absence is a value, not an error.
    pub async fn get_project(&self, slug: &str) -> Result<Option<Project>, AppError> {
        self.project_repo.get_project_by_slug(slug).await
    }

    /// Validates the request, stamps creation timestamps, and inserts.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;
        self.project_repo.create_project(&insert).await
    }

    /// Applies a patch: only supplied fields are overwritten, and
    /// `updated_at` is refreshed even when nothing else changed.
    pub async fn update_project(&self, id: i32, patch: &UpdateProjectRequest) -> Result<Project, AppError> {
        patch.validate()?;
        self.project_repo.update_project(id, patch, Utc::now()).await
    }

    /// Hard delete by id.
    pub async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }
}
