use actix_web::web;

use crate::handlers::system::private_data;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(private_data);
}
