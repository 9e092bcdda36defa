// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and storage for places and their amenities

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{Amenity, City, CreatePlaceRequest, Place, UpdatePlaceRequest, User};
use crate::services::ObjectService;
use validator::Validate;

pub struct PlaceService;

impl PlaceService {
    /// Places of a city; unknown city is NotFound
    pub async fn list_for_city(storage: &Storage, city_id: &str) -> Result<Vec<Place>, HbnbError> {
        let city = storage.require::<City>(city_id).await?;
        storage.places_of_city(&city.base.id).await
    }

    /// Create a place in a city
    /// DOCUMENTATION: Checks run in this order: `user_id` present, user
    /// exists, `name` present, numeric ranges.
    pub async fn create_place(
        storage: &Storage,
        city: &City,
        req: CreatePlaceRequest,
    ) -> Result<Place, HbnbError> {
        let user_id = req.user_id.as_deref().ok_or(HbnbError::MissingField("user_id"))?;
        let user = storage.require::<User>(user_id).await?;
        let name = req.name.clone().ok_or(HbnbError::MissingField("name"))?;

        if let Err(e) = req.validate() {
            return Err(HbnbError::ValidationError(e.to_string()));
        }

        let mut place = Place::new(&city.base.id, user.base.id, name);
        place.description = req.description;
        place.number_rooms = req.number_rooms.unwrap_or_default();
        place.number_bathrooms = req.number_bathrooms.unwrap_or_default();
        place.max_guest = req.max_guest.unwrap_or_default();
        place.price_by_night = req.price_by_night.unwrap_or_default();
        place.latitude = req.latitude;
        place.longitude = req.longitude;

        ObjectService::create(storage, place).await
    }

    pub async fn update_place(
        storage: &Storage,
        mut place: Place,
        req: UpdatePlaceRequest,
    ) -> Result<Place, HbnbError> {
        if let Err(e) = req.validate() {
            return Err(HbnbError::ValidationError(e.to_string()));
        }

        req.apply(&mut place);
        ObjectService::update(storage, place).await
    }

    pub async fn list_amenities(storage: &Storage, place_id: &str) -> Result<Vec<Amenity>, HbnbError> {
        let place = storage.require::<Place>(place_id).await?;
        storage.amenities_of(&place).await
    }

    /// Link an amenity to a place
    /// Returns the amenity and whether a new link was created.
    pub async fn link_amenity(
        storage: &Storage,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<(Amenity, bool), HbnbError> {
        let place = storage.require::<Place>(place_id).await?;
        let amenity = storage.require::<Amenity>(amenity_id).await?;

        let created = storage.link_amenity(&place, &amenity).await?;
        if created {
            storage.save().await?;
            log::info!("Linked amenity {} to place {}", amenity_id, place_id);
        }

        Ok((amenity, created))
    }

    /// Unlink an amenity; NotFound when it was not linked
    pub async fn unlink_amenity(
        storage: &Storage,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<(), HbnbError> {
        let place = storage.require::<Place>(place_id).await?;
        let amenity = storage.require::<Amenity>(amenity_id).await?;

        if !storage.unlink_amenity(&place, &amenity).await? {
            log::warn!("Amenity {} is not linked to place {}", amenity_id, place_id);
            return Err(HbnbError::NotFound(format!(
                "link between place {} and amenity {}",
                place_id, amenity_id
            )));
        }

        storage.save().await?;
        log::info!("Unlinked amenity {} from place {}", amenity_id, place_id);
        Ok(())
    }
}
