// src/services/amenity_service.rs
// DOCUMENTATION: Business logic for amenities
// PURPOSE: Creation rules and updates for the amenity catalog

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{Amenity, CreateAmenityRequest, UpdateAmenityRequest};
use crate::services::ObjectService;

pub struct AmenityService;

impl AmenityService {
    pub async fn create(storage: &Storage, req: CreateAmenityRequest) -> Result<Amenity, HbnbError> {
        let name = req.name.ok_or(HbnbError::MissingField("name"))?;
        ObjectService::create(storage, Amenity::new(name)).await
    }

    pub async fn update(
        storage: &Storage,
        mut amenity: Amenity,
        req: UpdateAmenityRequest,
    ) -> Result<Amenity, HbnbError> {
        req.apply(&mut amenity);
        ObjectService::update(storage, amenity).await
    }
}
