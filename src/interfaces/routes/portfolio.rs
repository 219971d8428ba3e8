use actix_web::web;

use crate::handlers::{experiences, projects, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portfolio")
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::create_project))
            )
            // GET resolves the path segment as a slug; PATCH and DELETE as a
            // numeric id.
            .service(
                web::resource("/projects/{key}")
                    .route(web::get().to(projects::get_project))
                    .route(web::patch().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
            .service(
                web::resource("/experiences")
                    .route(web::get().to(experiences::list_experiences))
            )
            .service(
                web::resource("/skills")
                    .route(web::get().to(skills::list_skills))
            )
    );
}
