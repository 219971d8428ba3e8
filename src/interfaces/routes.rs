use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod json_error;
mod portfolio;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(portfolio::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
