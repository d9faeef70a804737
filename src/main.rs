use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use teamsync::auth::session_middleware;
use teamsync::config::AppConfig;
use teamsync::cors::cors_gate;
use teamsync::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    log::info!(
        "Server listening on {} ({:?})",
        config.server_url(),
        config.environment
    );

    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        // Registered innermost-first: the CORS gate executes ahead of the
        // session layer, answering preflights and rejecting bad origins
        // before anything downstream sees the request.
        App::new()
            .app_data(config.clone())
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .wrap(session_middleware(&config))
            .wrap(cors_gate(&config))
            .service(routes::root::index)
            .service(routes::api_scope(&config.base_path))
    })
    .bind(bind_addr)?
    .run()
    .await
}
