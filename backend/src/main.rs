mod config;
mod routes;
mod storage;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::AppConfig;
use routes::configure_routes;
use std::env;
use storage::local_service::LocalStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(format!("Configuration error: {}", e)));
        }
    };

    let storage = LocalStorage::from_config(&config);
    if let Err(e) = storage.ensure_upload_dir().await {
        log::error!(
            "Failed to create upload directory {}: {}",
            storage.upload_dir().display(),
            e
        );
        return Err(std::io::Error::other(format!("Upload directory error: {}", e)));
    }

    log::info!("Storing uploaded logos in {}", storage.upload_dir().display());
    log::info!("Serving frontend from {}", config.frontend_dir.display());

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let frontend_dir = config.frontend_dir.clone();
    let storage = web::Data::new(storage);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(storage.clone())
            .app_data(config.clone())
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
