// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Place model, CRUD request DTOs and the places_search request body

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{BaseModel, EntityKind, Model, PgQuery};

/// A rentable place
/// DOCUMENTATION: Belongs to a city and a user. Amenities are kept two ways:
/// the file backend stores them in `amenity_ids`, the relational backend in
/// the `place_amenity` join table (so the column is skipped for sqlx).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Place {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,

    /// Owning city
    pub city_id: String,

    /// Owning user
    pub user_id: String,

    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub number_rooms: i32,

    #[serde(default)]
    pub number_bathrooms: i32,

    #[serde(default)]
    pub max_guest: i32,

    #[serde(default)]
    pub price_by_night: i32,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    /// Linked amenity ids (file backend only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[sqlx(skip)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub fn new(
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseModel::new(),
            city_id: city_id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenity_ids: Vec::new(),
        }
    }
}

impl Model for Place {
    const KIND: EntityKind = EntityKind::Place;
    const COLUMNS: &'static [&'static str] = &[
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    /// Amenity links are changed only through link/unlink
    fn keep_stored_fields(&mut self, stored: &Self) {
        self.amenity_ids = stored.amenity_ids.clone();
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.city_id)
            .bind(&self.user_id)
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.number_rooms)
            .bind(self.number_bathrooms)
            .bind(self.max_guest)
            .bind(self.price_by_night)
            .bind(self.latitude)
            .bind(self.longitude)
    }
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Body of POST /cities/{city_id}/places. `user_id` and `name`
/// are required; the city comes from the path.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    pub user_id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub number_rooms: Option<i32>,

    #[validate(range(min = 0))]
    pub number_bathrooms: Option<i32>,

    #[validate(range(min = 0))]
    pub max_guest: Option<i32>,

    #[validate(range(min = 0))]
    pub price_by_night: Option<i32>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: Body of PUT /places/{id}. Only provided fields change;
/// `id`, `user_id`, `city_id` and the timestamps are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub number_rooms: Option<i32>,

    #[validate(range(min = 0))]
    pub number_bathrooms: Option<i32>,

    #[validate(range(min = 0))]
    pub max_guest: Option<i32>,

    #[validate(range(min = 0))]
    pub price_by_night: Option<i32>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl UpdatePlaceRequest {
    pub fn apply(self, place: &mut Place) {
        if let Some(name) = self.name {
            place.name = name;
        }
        if let Some(description) = self.description {
            place.description = Some(description);
        }
        if let Some(number_rooms) = self.number_rooms {
            place.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = self.number_bathrooms {
            place.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = self.max_guest {
            place.max_guest = max_guest;
        }
        if let Some(price_by_night) = self.price_by_night {
            place.price_by_night = price_by_night;
        }
        if self.latitude.is_some() {
            place.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            place.longitude = self.longitude;
        }
    }
}

/// Body of POST /places_search
/// DOCUMENTATION: Every key is optional; a missing key or `null` is the
/// same as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceSearchRequest {
    pub states: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

impl PlaceSearchRequest {
    pub fn state_ids(&self) -> &[String] {
        self.states.as_deref().unwrap_or_default()
    }

    pub fn city_ids(&self) -> &[String] {
        self.cities.as_deref().unwrap_or_default()
    }

    pub fn amenity_ids(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or_default()
    }

    /// No location constraint at all: every place is a candidate
    pub fn is_unlocated(&self) -> bool {
        self.state_ids().is_empty() && self.city_ids().is_empty()
    }
}
