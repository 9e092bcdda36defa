// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::{require_json, to_dicts};
use crate::models::{City, CreatePlaceRequest, Model, Place, PlaceSearchRequest, UpdatePlaceRequest};
use crate::services::{ObjectService, PlaceSearch, PlaceService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /cities/{city_id}/places
pub async fn list_places(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let places = PlaceService::list_for_city(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&places)))
}

/// POST /cities/{city_id}/places
pub async fn create_place(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<CreatePlaceRequest>>,
) -> Result<impl Responder, HbnbError> {
    let city = ObjectService::get::<City>(&storage, &path).await?;
    let req = require_json(req)?;

    let place = PlaceService::create_place(&storage, &city, req).await?;
    Ok(HttpResponse::Created().json(place.to_dict()))
}

/// GET /places/{id}
pub async fn get_place(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let place = ObjectService::get::<Place>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(place.to_dict()))
}

/// DELETE /places/{id}
pub async fn delete_place(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    ObjectService::delete::<Place>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// PUT /places/{id}
pub async fn update_place(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<UpdatePlaceRequest>>,
) -> Result<impl Responder, HbnbError> {
    let place = ObjectService::get::<Place>(&storage, &path).await?;
    let req = require_json(req)?;

    let place = PlaceService::update_place(&storage, place, req).await?;
    Ok(HttpResponse::Ok().json(place.to_dict()))
}

/// POST /places_search
/// Body: `{"states": [...], "cities": [...], "amenities": [...]}`, every key optional
pub async fn places_search(
    storage: web::Data<Storage>,
    req: web::Json<PlaceSearchRequest>,
) -> Result<impl Responder, HbnbError> {
    let places = PlaceSearch::run(&storage, &req).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&places)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/cities/{city_id}/places", web::get().to(list_places))
        .route("/cities/{city_id}/places", web::post().to(create_place))
        .route("/places/{id}", web::get().to(get_place))
        .route("/places/{id}", web::delete().to(delete_place))
        .route("/places/{id}", web::put().to(update_place))
        .route("/places_search", web::post().to(places_search));
}
