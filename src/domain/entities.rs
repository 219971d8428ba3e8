pub mod experience;
pub mod project;
pub mod session;
pub mod skill;
