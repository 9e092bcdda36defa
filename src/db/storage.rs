// src/db/storage.rs
// DOCUMENTATION: Storage handle shared by every request
// PURPOSE: Pick the backend once from configuration and expose one API over both

use crate::config::{init_db_pool, Config, StorageType};
use crate::db::{DbStorage, FileStorage};
use crate::errors::HbnbError;
use crate::models::*;
use std::collections::HashSet;

/// The storage collaborator
/// DOCUMENTATION: Built once at startup and handed to handlers as
/// `web::Data<Storage>`. Callers never branch on the backend; the only place
/// the two representations of place amenities differ is `amenity_ids_of`.
pub enum Storage {
    File(FileStorage),
    Db(DbStorage),
}

impl Storage {
    /// Build the backend selected by HBNB_TYPE_STORAGE
    pub async fn from_config(config: &Config) -> Result<Self, HbnbError> {
        match config.storage_type {
            StorageType::Db => {
                let pool = init_db_pool(config).await.map_err(|e| {
                    log::error!("Failed to connect to database: {}", e);
                    HbnbError::DatabaseError(e.to_string())
                })?;
                Ok(Storage::Db(DbStorage::new(pool)))
            }
            StorageType::File => {
                let storage = FileStorage::open(&config.file_path);
                storage.reload().await?;
                Ok(Storage::File(storage))
            }
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Storage::File(_) => StorageType::File,
            Storage::Db(_) => StorageType::Db,
        }
    }

    pub async fn get<M: Model>(&self, id: &str) -> Result<Option<M>, HbnbError> {
        match self {
            Storage::File(fs) => fs.get(id).await,
            Storage::Db(db) => db.get(id).await,
        }
    }

    /// Like `get`, but a missing object is a NotFound error
    pub async fn require<M: Model>(&self, id: &str) -> Result<M, HbnbError> {
        self.get::<M>(id).await?.ok_or_else(|| {
            log::warn!("{} not found: {}", M::KIND, id);
            HbnbError::not_found(M::KIND, id)
        })
    }

    pub async fn all<M: Model>(&self) -> Result<Vec<M>, HbnbError> {
        match self {
            Storage::File(fs) => fs.all().await,
            Storage::Db(db) => db.all().await,
        }
    }

    pub async fn count(&self, kind: EntityKind) -> Result<i64, HbnbError> {
        match self {
            Storage::File(fs) => fs.count(kind).await,
            Storage::Db(db) => db.count(kind).await,
        }
    }

    /// Stage an object (file) or write it immediately (db)
    pub async fn insert<M: Model>(&self, object: &M) -> Result<(), HbnbError> {
        match self {
            Storage::File(fs) => fs.insert(object).await,
            Storage::Db(db) => db.insert(object).await,
        }
    }

    /// Store a changed object; the file backend keeps fields storage owns
    pub async fn update<M: Model>(&self, object: &mut M) -> Result<(), HbnbError> {
        match self {
            Storage::File(fs) => fs.update(object).await,
            Storage::Db(db) => db.insert(object).await,
        }
    }

    pub async fn delete<M: Model>(&self, id: &str) -> Result<bool, HbnbError> {
        match self {
            Storage::File(fs) => fs.delete::<M>(id).await,
            Storage::Db(db) => db.delete::<M>(id).await,
        }
    }

    /// Flush staged changes; the db backend has nothing pending
    pub async fn save(&self) -> Result<(), HbnbError> {
        match self {
            Storage::File(fs) => fs.save().await,
            Storage::Db(_) => Ok(()),
        }
    }

    pub async fn cities_of_state(&self, state_id: &str) -> Result<Vec<City>, HbnbError> {
        match self {
            Storage::File(fs) => fs.cities_of_state(state_id).await,
            Storage::Db(db) => db.cities_of_state(state_id).await,
        }
    }

    pub async fn places_of_city(&self, city_id: &str) -> Result<Vec<Place>, HbnbError> {
        match self {
            Storage::File(fs) => fs.places_of_city(city_id).await,
            Storage::Db(db) => db.places_of_city(city_id).await,
        }
    }

    /// The place's amenity ids, whatever the backend keeps them in
    pub async fn amenity_ids_of(&self, place: &Place) -> Result<HashSet<String>, HbnbError> {
        match self {
            Storage::File(fs) => Ok(fs.amenity_ids_of(place)),
            Storage::Db(db) => db.amenity_ids_of(place).await,
        }
    }

    pub async fn amenities_of(&self, place: &Place) -> Result<Vec<Amenity>, HbnbError> {
        match self {
            Storage::File(fs) => fs.amenities_of(place).await,
            Storage::Db(db) => db.amenities_of(place).await,
        }
    }

    pub async fn link_amenity(&self, place: &Place, amenity: &Amenity) -> Result<bool, HbnbError> {
        match self {
            Storage::File(fs) => fs.link_amenity(place, amenity).await,
            Storage::Db(db) => db.link_amenity(place, amenity).await,
        }
    }

    pub async fn unlink_amenity(
        &self,
        place: &Place,
        amenity: &Amenity,
    ) -> Result<bool, HbnbError> {
        match self {
            Storage::File(fs) => fs.unlink_amenity(place, amenity).await,
            Storage::Db(db) => db.unlink_amenity(place, amenity).await,
        }
    }
}

/// Empty file-backed storage in the system temp directory
#[cfg(test)]
pub fn temp_storage() -> Storage {
    let path = std::env::temp_dir().join(format!("hbnb-test-{}.json", uuid::Uuid::new_v4()));
    Storage::File(FileStorage::open(path))
}
