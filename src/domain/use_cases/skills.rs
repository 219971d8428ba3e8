use crate::{
    entities::skill::Skill,
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// All skills grouped by category, then name.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }
}
