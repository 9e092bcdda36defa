// src/models/amenity.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{BaseModel, EntityKind, Model, PgQuery};

/// Something a place offers (Wifi, Pool, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            name: name.into(),
        }
    }
}

impl Model for Amenity {
    const KIND: EntityKind = EntityKind::Amenity;
    const COLUMNS: &'static [&'static str] = &["name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.name)
    }
}

/// Body of POST /amenities
#[derive(Debug, Deserialize)]
pub struct CreateAmenityRequest {
    pub name: Option<String>,
}

/// Body of PUT /amenities/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
}

impl UpdateAmenityRequest {
    pub fn apply(self, amenity: &mut Amenity) {
        if let Some(name) = self.name {
            amenity.name = name;
        }
    }
}
