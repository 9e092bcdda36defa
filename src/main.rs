// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpServer};
use config::Config;
use db::Storage;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    let config_error = config.validate().err();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Some(notice) = &config.storage_type_notice {
        log::warn!("{}", notice);
    }

    if let Some(e) = config_error {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting hbnb-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Open the configured storage backend
    let storage = match Storage::from_config(&config).await {
        Ok(storage) => {
            log::info!("Opened {} storage", storage.storage_type());
            web::Data::new(storage)
        }
        Err(e) => {
            log::error!("Failed to open {} storage: {}", config.storage_type, e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(storage.clone())
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .configure(handlers::api_config)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}
