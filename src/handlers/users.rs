// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user operations
// PURPOSE: Users leave the API without their password digest

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::handlers::{require_json, to_dicts};
use crate::models::{CreateUserRequest, Model, UpdateUserRequest, User};
use crate::services::{ObjectService, UserService};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /users
pub async fn list_users(storage: web::Data<Storage>) -> Result<impl Responder, HbnbError> {
    let users = ObjectService::list::<User>(&storage).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&users)))
}

/// GET /users/{id}
pub async fn get_user(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    let user = ObjectService::get::<User>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(user.to_dict()))
}

/// DELETE /users/{id}
pub async fn delete_user(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> Result<impl Responder, HbnbError> {
    ObjectService::delete::<User>(&storage, &path).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// POST /users
pub async fn create_user(
    storage: web::Data<Storage>,
    req: web::Json<CreateUserRequest>,
) -> Result<impl Responder, HbnbError> {
    let user = UserService::create(&storage, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(user.to_dict()))
}

/// PUT /users/{id}
pub async fn update_user(
    storage: web::Data<Storage>,
    path: web::Path<String>,
    req: Option<web::Json<UpdateUserRequest>>,
) -> Result<impl Responder, HbnbError> {
    let user = ObjectService::get::<User>(&storage, &path).await?;
    let req = require_json(req)?;

    let user = UserService::update(&storage, user, req).await?;
    Ok(HttpResponse::Ok().json(user.to_dict()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::delete().to(delete_user))
        .route("/users/{id}", web::put().to(update_user));
}
