// src/models/state.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{BaseModel, EntityKind, Model, PgQuery};

/// A state; owns cities through `City::state_id`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct State {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            name: name.into(),
        }
    }
}

impl Model for State {
    const KIND: EntityKind = EntityKind::State;
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

/// Body of POST /states
#[derive(Debug, Deserialize)]
pub struct CreateStateRequest {
    pub name: Option<String>,
}

/// Body of PUT /states/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateStateRequest {
    pub name: Option<String>,
}

impl UpdateStateRequest {
    pub fn apply(self, state: &mut State) {
        if let Some(name) = self.name {
            state.name = name;
        }
    }
}
