use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};

use crate::{
    entities::project::{Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Default name Postgres gives the UNIQUE constraint on projects.slug.
const SLUG_UNIQUE_CONSTRAINT: &str = "projects_slug_key";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError>;
    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProjectRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: i32) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(SLUG_UNIQUE_CONSTRAINT) {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                slug, title, description, content, technologies,
                github_url, live_url, image_url, featured, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.content)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM projects");

        if featured_only {
            builder.push(" WHERE featured = TRUE");
        }

        builder.push(" ORDER BY created_at ASC");

        let query = builder.build_query_as::<Project>();
        let projects: Vec<Project> = query.fetch_all(&self.pool).await?;

        Ok(projects)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProjectRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, AppError> {
        // COALESCE keeps columns whose patch field was omitted; updated_at is
        // always overwritten with the caller-supplied stamp.
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                slug = COALESCE($1, slug),
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                content = COALESCE($4, content),
                technologies = COALESCE($5, technologies),
                github_url = COALESCE($6, github_url),
                live_url = COALESCE($7, live_url),
                image_url = COALESCE($8, image_url),
                featured = COALESCE($9, featured),
                updated_at = $10
            WHERE id = $11
            RETURNING *
            "#,
        )
        .bind(&patch.slug)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.content)
        .bind(&patch.technologies)
        .bind(&patch.github_url)
        .bind(&patch.live_url)
        .bind(&patch.image_url)
        .bind(patch.featured)
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        updated.ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
