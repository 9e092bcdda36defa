// src/services/state_service.rs
// DOCUMENTATION: Business logic for states
// PURPOSE: Creation rules and updates for states

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{CreateStateRequest, State, UpdateStateRequest};
use crate::services::ObjectService;

pub struct StateService;

impl StateService {
    pub async fn create(storage: &Storage, req: CreateStateRequest) -> Result<State, HbnbError> {
        let name = req.name.ok_or(HbnbError::MissingField("name"))?;
        ObjectService::create(storage, State::new(name)).await
    }

    pub async fn update(
        storage: &Storage,
        mut state: State,
        req: UpdateStateRequest,
    ) -> Result<State, HbnbError> {
        req.apply(&mut state);
        ObjectService::update(storage, state).await
    }
}
