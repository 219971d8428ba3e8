use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 160;
const MAX_SLUG_LENGTH: u64 = 80;
const MAX_TECHNOLOGIES: usize = 24;
const MAX_TECHNOLOGY_LENGTH: usize = 40;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row ready for insertion: request fields plus application-stamped
/// timestamps. At creation time `created_at == updated_at`.
#[derive(Debug, Validate)]
pub struct ProjectInsert {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub content: Option<String>,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Option<Vec<String>>,

    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub content: Option<String>,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Option<Vec<String>>,

    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

/// Patch request: omitted fields keep their stored value.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub content: Option<String>,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Option<Vec<String>>,

    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    pub featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only lowercase letters, digits, or hyphens"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(new_validation_error("slug_double_hyphen", "Slug must not contain consecutive hyphens"));
    }
    Ok(())
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES {
        return Err(new_validation_error("too_many_technologies", "Too many technologies provided"));
    }
    for technology in technologies {
        if technology.trim().is_empty() || technology.len() > MAX_TECHNOLOGY_LENGTH {
            return Err(new_validation_error("invalid_technology_length", "Technology entries must be non-empty and short"));
        }
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let now = Utc::now();
        let insert = ProjectInsert {
            slug: value.slug,
            title: value.title,
            description: value.description,
            content: value.content,
            technologies: value.technologies,
            github_url: value.github_url,
            live_url: value.live_url,
            image_url: value.image_url,
            featured: value.featured,
            created_at: now,
            updated_at: now,
        };

        insert.validate()?;
        Ok(insert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slug: &str) -> NewProjectRequest {
        NewProjectRequest {
            slug: slug.to_string(),
            title: "Ray tracer".to_string(),
            description: "A toy path tracer".to_string(),
            content: None,
            technologies: Some(vec!["rust".to_string()]),
            github_url: None,
            live_url: None,
            image_url: None,
            featured: false,
        }
    }

    #[test]
    fn slug_accepts_lowercase_digits_and_hyphens() {
        assert!(validate_slug("ray-tracer-2024").is_ok());
    }

    #[test]
    fn slug_rejects_uppercase_edge_and_double_hyphens() {
        assert!(validate_slug("Ray-Tracer").is_err());
        assert!(validate_slug("-ray").is_err());
        assert!(validate_slug("ray-").is_err());
        assert!(validate_slug("ray--tracer").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn url_requires_http_or_https_scheme() {
        assert!(validate_url("https://github.com/user/repo").is_ok());
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("ftp://files.example").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn insert_stamps_equal_creation_timestamps() {
        let insert = ProjectInsert::try_from(request("ray-tracer")).unwrap();
        assert_eq!(insert.created_at, insert.updated_at);
        assert_eq!(insert.slug, "ray-tracer");
        assert!(!insert.featured);
    }

    #[test]
    fn insert_rejects_empty_title() {
        let mut value = request("ray-tracer");
        value.title = String::new();
        assert!(ProjectInsert::try_from(value).is_err());
    }

    #[test]
    fn insert_rejects_malformed_url() {
        let mut value = request("ray-tracer");
        value.github_url = Some("github.com/user/repo".to_string());
        assert!(ProjectInsert::try_from(value).is_err());
    }

    #[test]
    fn patch_rejects_empty_supplied_fields_but_allows_omitted_ones() {
        let empty_title = UpdateProjectRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(empty_title.validate().is_err());

        let only_featured = UpdateProjectRequest {
            featured: Some(true),
            ..Default::default()
        };
        assert!(only_featured.validate().is_ok());
    }
}
