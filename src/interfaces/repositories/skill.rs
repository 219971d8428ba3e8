use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::skill::Skill,
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT * FROM skills
            ORDER BY category ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }
}
