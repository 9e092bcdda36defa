// src/models/city.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{BaseModel, EntityKind, Model, PgQuery};

/// A city inside a state; owns places through `Place::city_id`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub state_id: String,
    pub name: String,
}

impl City {
    pub fn new(state_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            state_id: state_id.into(),
            name: name.into(),
        }
    }
}

impl Model for City {
    const KIND: EntityKind = EntityKind::City;
    const COLUMNS: &'static [&'static str] = &["state_id", "name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.state_id).bind(&self.name)
    }
}

/// Body of POST /states/{state_id}/cities
#[derive(Debug, Deserialize)]
pub struct CreateCityRequest {
    pub name: Option<String>,
}

/// Body of PUT /cities/{id}; `state_id` is not reassignable
#[derive(Debug, Deserialize)]
pub struct UpdateCityRequest {
    pub name: Option<String>,
}

impl UpdateCityRequest {
    pub fn apply(self, city: &mut City) {
        if let Some(name) = self.name {
            city.name = name;
        }
    }
}
