// src/handlers/states.rs
// DOCUMENTATION: HTTP handlers for state operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::{require_json, to_dicts};
use crate::models::{CreateStateRequest, Model, State, UpdateStateRequest};
use crate::services::{ObjectService, StateService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /states
pub async fn list_states(storage: web::Data<Storage>) -> Result<impl Responder, HbnbError> {
    let states = ObjectService::list::<State>(&storage).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&states)))
}

/// GET /states/{id}
pub async fn get_state(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let state = ObjectService::get::<State>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(state.to_dict()))
}

/// DELETE /states/{id}
pub async fn delete_state(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    ObjectService::delete::<State>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// POST /states
pub async fn create_state(
    storage: web::Data<Storage>,
    req: web::Json<CreateStateRequest>,
) -> Result<impl Responder, HbnbError> {
    let state = StateService::create(&storage, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(state.to_dict()))
}

/// PUT /states/{id}
pub async fn update_state(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<UpdateStateRequest>>,
) -> Result<impl Responder, HbnbError> {
    let state = ObjectService::get::<State>(&storage, &path).await?;
    let req = require_json(req)?;

    let state = StateService::update(&storage, state, req).await?;
    Ok(HttpResponse::Ok().json(state.to_dict()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/states", web::get().to(list_states))
        .route("/states", web::post().to(create_state))
        .route("/states/{id}", web::get().to(get_state))
        .route("/states/{id}", web::delete().to(delete_state))
        .route("/states/{id}", web::put().to(update_state));
}

#[cfg(test)]
mod tests {
    use crate::db::temp_storage;
    use crate::handlers::api_config;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_state_crud() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(temp_storage()))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/states")
            .set_json(json!({ "name": "California" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["__class__"], "State");
        assert_eq!(created["name"], "California");
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/v1/states").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/states/{}", id))
            .set_json(json!({ "name": "Golden State", "id": "ignored" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["name"], "Golden State");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/states/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({}));

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/states/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_state_bad_bodies() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(temp_storage()))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/states")
            .insert_header(("content-type", "text/plain"))
            .set_payload("name=Texas")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(test::read_body(resp).await, "Not a JSON");

        let req = test::TestRequest::post()
            .uri("/api/v1/states")
            .set_json(json!({ "capital": "Austin" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(test::read_body(resp).await, "Missing name");

        // unknown id wins over a bad body
        let req = test::TestRequest::put()
            .uri("/api/v1/states/missing")
            .insert_header(("content-type", "text/plain"))
            .set_payload("oops")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
