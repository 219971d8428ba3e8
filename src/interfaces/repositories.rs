pub mod experience;
pub mod project;
pub mod skill;
pub mod sqlx_repo;
