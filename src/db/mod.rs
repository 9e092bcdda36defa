// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export storage components

pub mod db_storage;
pub mod file_storage;
pub mod storage;

pub use db_storage::*;
pub use file_storage::*;
pub use storage::*;
