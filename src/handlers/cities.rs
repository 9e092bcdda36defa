// src/handlers/cities.rs
// DOCUMENTATION: HTTP handlers for city operations
// PURPOSE: Cities are listed and created under their state

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::{require_json, to_dicts};
use crate::models::{City, CreateCityRequest, Model, State, UpdateCityRequest};
use crate::services::{CityService, ObjectService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /states/{state_id}/cities
pub async fn list_cities(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let cities = CityService::list_for_state(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&cities)))
}

/// POST /states/{state_id}/cities
pub async fn create_city(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<CreateCityRequest>>,
) -> Result<impl Responder, HbnbError> {
    let state = ObjectService::get::<State>(&storage, &path).await?;
    let req = require_json(req)?;

    let city = CityService::create(&storage, &state, req).await?;
    Ok(HttpResponse::Created().json(city.to_dict()))
}

/// GET /cities/{id}
pub async fn get_city(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let city = ObjectService::get::<City>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(city.to_dict()))
}

/// DELETE /cities/{id}
pub async fn delete_city(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    ObjectService::delete::<City>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// PUT /cities/{id}
pub async fn update_city(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<UpdateCityRequest>>,
) -> Result<impl Responder, HbnbError> {
    let city = ObjectService::get::<City>(&storage, &path).await?;
    let req = require_json(req)?;

    let city = CityService::update(&storage, city, req).await?;
    Ok(HttpResponse::Ok().json(city.to_dict()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/states/{state_id}/cities", web::get().to(list_cities))
        .route("/states/{state_id}/cities", web::post().to(create_city))
        .route("/cities/{id}", web::get().to(get_city))
        .route("/cities/{id}", web::delete().to(delete_city))
        .route("/cities/{id}", web::put().to(update_city));
}

#[cfg(test)]
mod tests {
    use crate::db::temp_storage;
    use crate::handlers::api_config;
    use crate::models::State;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_cities_of_state() {
        let storage = temp_storage();
        let state = State::new("Arizona");
        storage.insert(&state).await.unwrap();
        let state_id = state.base.id.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/states/unknown/cities")
            .set_json(json!({ "name": "Tucson" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/states/{}/cities", state_id))
            .set_json(json!({ "name": "Tucson", "state_id": "elsewhere" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let city: Value = test::read_body_json(resp).await;
        assert_eq!(city["state_id"], state_id.as_str());

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/states/{}/cities", state_id))
            .to_request();
        let cities: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cities.as_array().unwrap().len(), 1);
        assert_eq!(cities[0]["name"], "Tucson");
    }
}
