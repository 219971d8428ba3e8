use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `category` (frontend/backend/tools/languages) and `proficiency`
/// (beginner through expert) stay free-form strings so new values need no
/// migration.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub proficiency: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
