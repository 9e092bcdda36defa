// src/models/user.rs
// DOCUMENTATION: Account owning places
// PURPOSE: User model, request DTOs and password digesting

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use sqlx::FromRow;

use super::{serialize_model, BaseModel, EntityKind, Model, PgQuery};

/// A registered user
/// DOCUMENTATION: `password` holds a SHA-256 hex digest and is persisted by
/// both backends, but never leaves the API through `to_dict`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Create a user from a raw password
    pub fn new(email: impl Into<String>, raw_password: &str) -> Self {
        Self {
            base: BaseModel::new(),
            email: email.into(),
            password: hash_password(raw_password),
            first_name: None,
            last_name: None,
        }
    }

    pub fn set_password(&mut self, raw_password: &str) {
        self.password = hash_password(raw_password);
    }
}

/// Hex-encoded SHA-256 of the raw password
pub fn hash_password(raw_password: &str) -> String {
    hex::encode(Sha256::digest(raw_password.as_bytes()))
}

impl Model for User {
    const KIND: EntityKind = EntityKind::User;
    const COLUMNS: &'static [&'static str] = &["email", "password", "first_name", "last_name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.email)
            .bind(&self.password)
            .bind(&self.first_name)
            .bind(&self.last_name)
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = serialize_model(self);
        dict.remove("password");
        dict
    }
}

/// Body of POST /users
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of PUT /users/{id}; `email` is not changeable
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    pub fn apply(self, user: &mut User) {
        if let Some(password) = self.password {
            user.set_password(&password);
        }
        if let Some(first_name) = self.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
    }
}
