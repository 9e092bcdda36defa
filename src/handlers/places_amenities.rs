// src/handlers/places_amenities.rs
// DOCUMENTATION: HTTP handlers for the place <-> amenity link

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::to_dicts;
use crate::models::Model;
use crate::services::PlaceService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /places/{place_id}/amenities
pub async fn list_place_amenities(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let amenities = PlaceService::list_amenities(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&amenities)))
}

/// POST /places/{place_id}/amenities/{amenity_id}
/// 201 for a new link, 200 when the amenity was already linked
pub async fn link_amenity(
    storage: web::Data<Storage>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, HbnbError> {
    let (place_id, amenity_id) = path.into_inner();
    let (amenity, created) = PlaceService::link_amenity(&storage, &place_id, &amenity_id).await?;

    let dict = amenity.to_dict();
    if created {
        Ok(HttpResponse::Created().json(dict))
    } else {
        Ok(HttpResponse::Ok().json(dict))
    }
}

/// DELETE /places/{place_id}/amenities/{amenity_id}
pub async fn unlink_amenity(
    storage: web::Data<Storage>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, HbnbError> {
    let (place_id, amenity_id) = path.into_inner();
    PlaceService::unlink_amenity(&storage, &place_id, &amenity_id).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/places/{place_id}/amenities",
        web::get().to(list_place_amenities),
    )
    .route(
        "/places/{place_id}/amenities/{amenity_id}",
        web::post().to(link_amenity),
    )
    .route(
        "/places/{place_id}/amenities/{amenity_id}",
        web::delete().to(unlink_amenity),
    );
}
