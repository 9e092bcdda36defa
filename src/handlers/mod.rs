// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Mount every API route under /api/v1 and share response helpers

pub mod amenities;
pub mod cities;
pub mod index;
pub mod places;
pub mod places_amenities;
pub mod states;
pub mod users;

use crate::errors::HbnbError;
use crate::models::Model;
use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};

/// Every API route, mounted under /api/v1
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .configure(index::config)
            .configure(states::config)
            .configure(cities::config)
            .configure(amenities::config)
            .configure(users::config)
            .configure(places::config)
            .configure(places_amenities::config)
            .default_service(web::to(not_found)),
    );
}

/// Body that is not JSON (or not the expected shape) answers 400 "Not a JSON"
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("Rejected body for {}: {}", req.path(), err);
        HbnbError::NotAJson.into()
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

/// API dictionaries for a list of objects
pub fn to_dicts<M: Model>(objects: &[M]) -> Vec<Map<String, Value>> {
    objects.iter().map(|object| object.to_dict()).collect()
}

/// Unwrap a body extracted as `Option<web::Json<T>>`
/// Lets a path lookup answer 404 before the body is judged.
pub fn require_json<T>(body: Option<web::Json<T>>) -> Result<T, HbnbError> {
    body.map(web::Json::into_inner).ok_or(HbnbError::NotAJson)
}
