use actix_cors::Cors;
use actix_web::http::header;

use crate::settings::AppConfig;

/// Builds the CORS layer from configured origins. A wildcard origin means
/// permissive mode; production configs reject the wildcard at load time.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    if origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
