// src/handlers/index.rs
// DOCUMENTATION: Service status and object counts

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::EntityKind;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Map, Value};

/// GET /status
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}

/// GET /stats
/// Number of stored objects per kind, keyed by table name
pub async fn stats(storage: web::Data<Storage>) -> Result<impl Responder, HbnbError> {
    let mut counts = Map::new();
    for kind in EntityKind::ALL {
        let count = storage.count(kind).await?;
        counts.insert(kind.table().to_string(), Value::from(count));
    }
    Ok(HttpResponse::Ok().json(counts))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status))
        .route("/stats", web::get().to(stats));
}
