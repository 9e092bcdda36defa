// src/services/city_service.rs
// DOCUMENTATION: Business logic for cities
// PURPOSE: Cities are always created under an existing state

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{City, CreateCityRequest, State, UpdateCityRequest};
use crate::services::ObjectService;

pub struct CityService;

impl CityService {
    /// Cities of a state; unknown state is NotFound
    pub async fn list_for_state(storage: &Storage, state_id: &str) -> Result<Vec<City>, HbnbError> {
        let state = storage.require::<State>(state_id).await?;
        storage.cities_of_state(&state.base.id).await
    }

    pub async fn create(
        storage: &Storage,
        state: &State,
        req: CreateCityRequest,
    ) -> Result<City, HbnbError> {
        let name = req.name.ok_or(HbnbError::MissingField("name"))?;
        ObjectService::create(storage, City::new(&state.base.id, name)).await
    }

    pub async fn update(
        storage: &Storage,
        mut city: City,
        req: UpdateCityRequest,
    ) -> Result<City, HbnbError> {
        req.apply(&mut city);
        ObjectService::update(storage, city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_storage;

    #[tokio::test]
    async fn test_create_requires_name() {
        let storage = temp_storage();

        let err = CityService::list_for_state(&storage, "missing").await.unwrap_err();
        assert!(matches!(err, HbnbError::NotFound(_)));

        let state = ObjectService::create(&storage, State::new("Texas")).await.unwrap();
        let err = CityService::create(&storage, &state, CreateCityRequest { name: None })
            .await
            .unwrap_err();
        assert!(matches!(err, HbnbError::MissingField("name")));

        let city = CityService::create(
            &storage,
            &state,
            CreateCityRequest { name: Some("Austin".into()) },
        )
        .await
        .unwrap();
        assert_eq!(city.state_id, state.base.id);

        let cities = CityService::list_for_state(&storage, &state.base.id).await.unwrap();
        assert_eq!(cities.len(), 1);
    }
}
