use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    auth::session::SessionService,
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    middlewares::session::SessionGate,
    routes::configure_routes,
    settings::AppConfig,
    web::build_cors,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to apply database migrations");

    let app_state = web::Data::new(AppState::new(pool.clone()));
    let sessions = web::Data::new(SessionService::new(&config));

    let server_addr = format!("{}:{}", config.host, config.port);
    let worker_count = config.worker_count;

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(sessions.clone())
            .wrap(SessionGate)
            .wrap(TracingLogger::default())
            .wrap(build_cors(&config))
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
