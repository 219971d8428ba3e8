use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role held at a company. Rows are seeded out-of-band; the API only
/// reads them. `current` marks an open-ended role and is not reconciled
/// against `end_date`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: bool,
    pub technologies: Option<Vec<String>>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
