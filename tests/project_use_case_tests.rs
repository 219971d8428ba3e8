use chrono::{DateTime, Utc};
use mockall::mock;
use mockall::predicate::*;

use portfolio_api::entities::project::{
    NewProjectRequest, Project, ProjectFilter, ProjectInsert, UpdateProjectRequest,
};
use portfolio_api::errors::AppError;
use portfolio_api::repositories::project::ProjectRepository;
use portfolio_api::use_cases::projects::ProjectHandler;

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
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
}

fn new_request(slug: &str) -> NewProjectRequest {
    NewProjectRequest {
        slug: slug.to_string(),
        title: "Ray tracer".to_string(),
        description: "A toy path tracer".to_string(),
        content: None,
        technologies: Some(vec!["rust".to_string(), "wgpu".to_string()]),
        github_url: Some("https://github.com/dev/ray-tracer".to_string()),
        live_url: None,
        image_url: None,
        featured: false,
    }
}

fn stored_project(id: i32, insert: &ProjectInsert) -> Project {
    Project {
        id,
        slug: insert.slug.clone(),
        title: insert.title.clone(),
        description: insert.description.clone(),
        content: insert.content.clone(),
        technologies: insert.technologies.clone(),
        github_url: insert.github_url.clone(),
        live_url: insert.live_url.clone(),
        image_url: insert.image_url.clone(),
        featured: insert.featured,
        created_at: insert.created_at,
        updated_at: insert.updated_at,
    }
}

// === Create ===

#[tokio::test]
async fn create_returns_input_slug_with_equal_timestamps() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|insert| insert.created_at == insert.updated_at)
        .returning(|insert| Ok(stored_project(1, insert)));

    let handler = ProjectHandler::new(repo);
    let created = handler.create_project(new_request("ray-tracer")).await.unwrap();

    assert_eq!(created.slug, "ray-tracer");
    assert_eq!(created.created_at, created.updated_at);
    assert!(!created.featured);
}

#[tokio::test]
async fn create_rejects_empty_title_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let mut request = new_request("ray-tracer");
    request.title = String::new();

    let result = handler.create_project(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_rejects_malformed_url_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let mut request = new_request("ray-tracer");
    request.live_url = Some("ftp://files.example".to_string());

    let result = handler.create_project(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_rejects_non_url_safe_slug_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let result = handler.create_project(new_request("Ray Tracer")).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_surfaces_slug_conflict() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .returning(|_| Err(AppError::Conflict("Slug already exists".into())));

    let handler = ProjectHandler::new(repo);
    let result = handler.create_project(new_request("ray-tracer")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

// === Update ===

#[tokio::test]
async fn update_passes_only_supplied_fields() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .withf(|id, patch, _updated_at| {
            *id == 7
                && patch.title.as_deref() == Some("Renamed")
                && patch.slug.is_none()
                && patch.description.is_none()
                && patch.technologies.is_none()
                && patch.featured.is_none()
        })
        .returning(|id, patch, updated_at| {
            let insert = ProjectInsert::try_from(new_request("ray-tracer")).unwrap();
            let mut project = stored_project(id, &insert);
            project.title = patch.title.clone().unwrap();
            project.created_at = updated_at - chrono::Duration::days(1);
            project.updated_at = updated_at;
            Ok(project)
        });

    let handler = ProjectHandler::new(repo);
    let patch = UpdateProjectRequest {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };

    let updated = handler.update_project(7, &patch).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "ray-tracer");
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn update_rejects_empty_supplied_title_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project().never();

    let handler = ProjectHandler::new(repo);
    let patch = UpdateProjectRequest {
        title: Some(String::new()),
        ..Default::default()
    };

    let result = handler.update_project(7, &patch).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn update_surfaces_missing_id_as_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .returning(|_, _, _| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);
    let patch = UpdateProjectRequest {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };

    let result = handler.update_project(9999, &patch).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// === Delete ===

#[tokio::test]
async fn delete_surfaces_missing_id_as_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .with(eq(9999))
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);
    let result = handler.delete_project(9999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// === Reads ===

#[tokio::test]
async fn list_narrows_to_featured_only_when_filter_is_true() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .with(eq(true))
        .returning(|_| Ok(vec![]));

    let handler = ProjectHandler::new(repo);
    handler
        .list_projects(ProjectFilter { featured: Some(true) })
        .await
        .unwrap();
}

#[tokio::test]
async fn list_treats_false_filter_like_no_filter() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .with(eq(false))
        .times(2)
        .returning(|_| Ok(vec![]));

    let handler = ProjectHandler::new(repo);
    handler
        .list_projects(ProjectFilter { featured: Some(false) })
        .await
        .unwrap();
    handler
        .list_projects(ProjectFilter { featured: None })
        .await
        .unwrap();
}

#[tokio::test]
async fn get_by_slug_returns_absence_as_a_value() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_slug()
        .withf(|slug| slug == "missing")
        .returning(|_| Ok(None));

    let handler = ProjectHandler::new(repo);
    let result = handler.get_project("missing").await.unwrap();
    assert!(result.is_none());
}
