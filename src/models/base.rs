// src/models/base.rs
// DOCUMENTATION: Identity and timestamps shared by every stored object
// PURPOSE: Define the Model trait both storage backends are written against

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};
use std::fmt;
use uuid::Uuid;

/// Query type produced by `sqlx::query` against PostgreSQL
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Every kind of object the catalog stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Amenity,
    City,
    Place,
    State,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Amenity,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::State,
        EntityKind::User,
    ];

    /// Class name written to `__class__` and used in file storage keys
    pub fn class_name(&self) -> &'static str {
        match self {
            EntityKind::Amenity => "Amenity",
            EntityKind::City => "City",
            EntityKind::Place => "Place",
            EntityKind::State => "State",
            EntityKind::User => "User",
        }
    }

    /// Table name in the relational backend, also the key reported by /stats
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Amenity => "amenities",
            EntityKind::City => "cities",
            EntityKind::Place => "places",
            EntityKind::State => "states",
            EntityKind::User => "users",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Columns present on every table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BaseModel {
    /// UUID v4 string
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseModel {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at` before persisting a change
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A persisted catalog object
/// DOCUMENTATION: Ties a struct to its kind, its non-base columns (in bind
/// order) and its API dictionary. Both backends only ever see this trait.
pub trait Model:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static
{
    const KIND: EntityKind;

    /// Columns beyond id/created_at/updated_at, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];

    fn base(&self) -> &BaseModel;

    fn base_mut(&mut self) -> &mut BaseModel;

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;

    fn id(&self) -> &str {
        &self.base().id
    }

    /// Key of this object in the file backend: `<Class>.<id>`
    fn storage_key(&self) -> String {
        storage_key(Self::KIND, self.id())
    }

    /// Copy fields that storage owns from the stored version before an update
    fn keep_stored_fields(&mut self, _stored: &Self) {}

    /// Flat mapping returned by the API
    fn to_dict(&self) -> Map<String, Value> {
        serialize_model(self)
    }
}

pub fn storage_key(kind: EntityKind, id: &str) -> String {
    format!("{}.{}", kind.class_name(), id)
}

/// Every serialized attribute plus `__class__`
/// Used by the file backend as-is; `to_dict` may hide attributes from it.
pub fn serialize_model<M: Model>(model: &M) -> Map<String, Value> {
    let mut dict = match serde_json::to_value(model) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    dict.insert(
        "__class__".to_string(),
        Value::String(M::KIND.class_name().to_string()),
    );
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_base_has_uuid_and_equal_timestamps() {
        let base = BaseModel::new();
        assert!(Uuid::parse_str(&base.id).is_ok());
        assert_eq!(base.created_at, base.updated_at);
    }

    #[test]
    fn test_touch_moves_updated_at_forward() {
        let mut base = BaseModel::new();
        let before = base.updated_at;
        base.touch();
        assert!(base.updated_at >= before);
        assert_eq!(base.created_at, before);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EntityKind::City.class_name(), "City");
        assert_eq!(EntityKind::City.table(), "cities");
        assert_eq!(storage_key(EntityKind::Place, "42"), "Place.42");
    }
}
