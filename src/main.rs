// Medialog Server
//
// HTTP entrypoint for the in-memory media collection tracker.

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::info;

use medialog_server::config::ServerConfig;
use medialog_server::logging;
use medialog_server::routes;
use medialog_server::store::MediaStore;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            ServerConfig::default()
        }
    };

    // Initialize logging
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Starting Medialog Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    // The store is owned here and handed to the workers; handlers
    // receive it through web::Data instead of a global.
    let store = if config.seed.enabled {
        info!("Seeding demo user and collection items");
        web::Data::new(MediaStore::with_seed_data())
    } else {
        web::Data::new(MediaStore::new())
    };

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);
    info!("Endpoints: GET /users, POST /users/add, GET /collection/{{userId}}, POST /collection/add, PATCH /collection/update, DELETE /collection/remove, GET /health");

    HttpServer::new(move || {
        // The front-end asset host is served elsewhere, so allow
        // cross-origin browser clients
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(store.clone())
            .app_data(routes::json_config())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
