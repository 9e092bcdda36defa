// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod amenity_service;
pub mod city_service;
pub mod object_service;
pub mod place_search;
pub mod place_service;
pub mod state_service;
pub mod user_service;

pub use amenity_service::*;
pub use city_service::*;
pub use object_service::*;
pub use place_search::*;
pub use place_service::*;
pub use state_service::*;
pub use user_service::*;
