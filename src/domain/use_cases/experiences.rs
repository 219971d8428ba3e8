use crate::{
    entities::experience::Experience,
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    /// All experiences, oldest role first.
    pub async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.experience_repo.list_experiences().await
    }
}
