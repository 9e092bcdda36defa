// src/bin/hbnb_web.rs
// DOCUMENTATION: Static HBNB web front
// PURPOSE: Answer the landing routes while the full front is served elsewhere

use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use std::env;
use std::io;

/// GET /
async fn hello() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("Hello HBNB!")
}

/// GET /hbnb
async fn hbnb() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("HBNB")
}

fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(hello))
        .route("/hbnb", web::get().to(hbnb));
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info,actix_web=info");
    }
    env_logger::init();

    let host = env::var("HBNB_WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("HBNB_WEB_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let server_addr = format!("{}:{}", host, port);

    log::info!("Starting hbnb-web on {}", server_addr);

    HttpServer::new(|| {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
