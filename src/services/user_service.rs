// src/services/user_service.rs
// DOCUMENTATION: Business logic for users
// PURPOSE: Required fields on sign-up and password changes on update

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::ObjectService;

pub struct UserService;

impl UserService {
    /// `email` is checked before `password`
    pub async fn create(storage: &Storage, req: CreateUserRequest) -> Result<User, HbnbError> {
        let email = req.email.ok_or(HbnbError::MissingField("email"))?;
        let password = req.password.ok_or(HbnbError::MissingField("password"))?;

        let mut user = User::new(email, &password);
        user.first_name = req.first_name;
        user.last_name = req.last_name;

        ObjectService::create(storage, user).await
    }

    pub async fn update(
        storage: &Storage,
        mut user: User,
        req: UpdateUserRequest,
    ) -> Result<User, HbnbError> {
        req.apply(&mut user);
        ObjectService::update(storage, user).await
    }
}
