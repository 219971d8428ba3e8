mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, web};

use repositories::sqlx_repo::{SqlxExperienceRepo, SqlxProjectRepo, SqlxSkillRepo};
use use_cases::{experiences::ExperienceHandler, projects::ProjectHandler, skills::SkillHandler};

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppExperienceHandler = ExperienceHandler<SqlxExperienceRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;

pub struct AppState {
    pub projects: AppProjectHandler,
    pub experiences: AppExperienceHandler,
    pub skills: AppSkillHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState {
            projects: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            experiences: ExperienceHandler::new(SqlxExperienceRepo::new(pool.clone())),
            skills: SkillHandler::new(SqlxSkillRepo::new(pool)),
        }
    }
}
