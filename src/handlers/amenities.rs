// src/handlers/amenities.rs
// DOCUMENTATION: HTTP handlers for amenity operations

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::{require_json, to_dicts};
use crate::models::{Amenity, CreateAmenityRequest, Model, UpdateAmenityRequest};
use crate::services::{AmenityService, ObjectService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /amenities
pub async fn list_amenities(storage: web::Data<Storage>) -> Result<impl Responder, HbnbError> {
    let amenities = ObjectService::list::<Amenity>(&storage).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&amenities)))
}

/// GET /amenities/{id}
pub async fn get_amenity(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let amenity = ObjectService::get::<Amenity>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(amenity.to_dict()))
}

/// DELETE /amenities/{id}
pub async fn delete_amenity(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    ObjectService::delete::<Amenity>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// POST /amenities
pub async fn create_amenity(
    storage: web::Data<Storage>,
    req: web::Json<CreateAmenityRequest>,
) -> Result<impl Responder, HbnbError> {
    let amenity = AmenityService::create(&storage, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(amenity.to_dict()))
}

/// PUT /amenities/{id}
pub async fn update_amenity(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<UpdateAmenityRequest>>,
) -> Result<impl Responder, HbnbError> {
    let amenity = ObjectService::get::<Amenity>(&storage, &path).await?;
    let req = require_json(req)?;

    let amenity = AmenityService::update(&storage, amenity, req).await?;
    Ok(HttpResponse::Ok().json(amenity.to_dict()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/amenities", web::get().to(list_amenities))
        .route("/amenities", web::post().to(create_amenity))
        .route("/amenities/{id}", web::get().to(get_amenity))
        .route("/amenities/{id}", web::delete().to(delete_amenity))
        .route("/amenities/{id}", web::put().to(update_amenity));
}

#[cfg(test)]
mod tests {
    use crate::db::temp_storage;
    use crate::handlers::api_config;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_amenity_crud_and_errors() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(temp_storage()))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/amenities")
            .set_json(json!({ "name": "Wifi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["__class__"], "Amenity");
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/v1/amenities")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(test::read_body(resp).await, "Missing name");

        let req = test::TestRequest::post()
            .uri("/api/v1/amenities")
            .insert_header(("content-type", "text/plain"))
            .set_payload("Wifi")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(test::read_body(resp).await, "Not a JSON");

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/amenities/{}", id))
            .set_json(json!({ "id": "other", "name": "Fast wifi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["name"], "Fast wifi");

        let req = test::TestRequest::get().uri("/api/v1/amenities").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/amenities/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({}));

        for req in [
            test::TestRequest::get().uri(&format!("/api/v1/amenities/{}", id)),
            test::TestRequest::delete().uri(&format!("/api/v1/amenities/{}", id)),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), 404);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Not found" }));
        }
    }
}
