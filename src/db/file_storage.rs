// src/db/file_storage.rs
// DOCUMENTATION: JSON file storage backend
// PURPOSE: Keep every object in memory and serialize the whole store to one file

use crate::errors::HbnbError;
use crate::models::*;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};

/// File-backed object store
/// DOCUMENTATION: Objects live in a map keyed `<Class>.<id>` holding each
/// object's dictionary (with `__class__`). `insert` and `delete` only touch
/// memory; `save` writes the map to disk and `reload` reads it back.
/// Read-modify-write operations hold the write guard for their whole span.
pub struct FileStorage {
    path: PathBuf,
    objects: RwLock<BTreeMap<String, Value>>,
    /// Serializes snapshot + write so an older snapshot never lands last
    save_lock: Mutex<()>,
}

impl FileStorage {
    /// Create an empty store bound to `path` (nothing is read yet)
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            objects: RwLock::new(BTreeMap::new()),
            save_lock: Mutex::new(()),
        }
    }

    /// Replace the in-memory objects with the file contents
    /// A missing file leaves the store empty.
    pub async fn reload(&self) -> Result<(), HbnbError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No storage file at {}, starting empty", self.path.display());
                return Ok(());
            }
            Err(e) => {
                log::error!("Failed to read {}: {}", self.path.display(), e);
                return Err(HbnbError::StorageError(e.to_string()));
            }
        };

        let loaded: BTreeMap<String, Value> = serde_json::from_str(&raw).map_err(|e| {
            log::error!("Malformed storage file {}: {}", self.path.display(), e);
            HbnbError::StorageError(e.to_string())
        })?;

        log::info!(
            "Loaded {} objects from {}",
            loaded.len(),
            self.path.display()
        );
        *self.objects.write().await = loaded;
        Ok(())
    }

    /// Serialize every object to the storage file
    pub async fn save(&self) -> Result<(), HbnbError> {
        let _saving = self.save_lock.lock().await;
        let raw = {
            let objects = self.objects.read().await;
            serde_json::to_string(&*objects).map_err(|e| HbnbError::StorageError(e.to_string()))?
        };

        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            log::error!("Failed to write {}: {}", self.path.display(), e);
            HbnbError::StorageError(e.to_string())
        })?;

        log::debug!("Saved storage to {}", self.path.display());
        Ok(())
    }

    pub async fn get<M: Model>(&self, id: &str) -> Result<Option<M>, HbnbError> {
        let objects = self.objects.read().await;
        objects
            .get(&storage_key(M::KIND, id))
            .map(|value| Self::decode::<M>(value))
            .transpose()
    }

    /// Every object of one kind, ordered by id
    pub async fn all<M: Model>(&self) -> Result<Vec<M>, HbnbError> {
        let prefix = format!("{}.", M::KIND.class_name());
        let objects = self.objects.read().await;
        objects
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(_, value)| Self::decode::<M>(value))
            .collect()
    }

    pub async fn count(&self, kind: EntityKind) -> Result<i64, HbnbError> {
        let prefix = format!("{}.", kind.class_name());
        let objects = self.objects.read().await;
        let count = objects
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .count();
        Ok(count as i64)
    }

    /// Add or replace an object in memory
    pub async fn insert<M: Model>(&self, object: &M) -> Result<(), HbnbError> {
        let dict = serialize_model(object);
        self.objects
            .write()
            .await
            .insert(object.storage_key(), Value::Object(dict));
        Ok(())
    }

    /// Store a changed object, keeping the fields storage owns from the stored copy
    /// An object deleted since it was loaded stays deleted.
    pub async fn update<M: Model>(&self, object: &mut M) -> Result<(), HbnbError> {
        let key = object.storage_key();
        let mut objects = self.objects.write().await;

        let stored = match objects.get(&key) {
            Some(value) => Self::decode::<M>(value)?,
            None => return Err(HbnbError::not_found(M::KIND, object.id())),
        };
        object.keep_stored_fields(&stored);

        objects.insert(key, Value::Object(serialize_model(object)));
        Ok(())
    }

    /// Apply `change` to a stored object under one write guard
    /// Returns None when no object has that id.
    pub async fn modify<M, R>(
        &self,
        id: &str,
        change: impl FnOnce(&mut M) -> R,
    ) -> Result<Option<R>, HbnbError>
    where
        M: Model,
    {
        let key = storage_key(M::KIND, id);
        let mut objects = self.objects.write().await;

        let mut object = match objects.get(&key) {
            Some(value) => Self::decode::<M>(value)?,
            None => return Ok(None),
        };

        let outcome = change(&mut object);
        objects.insert(key, Value::Object(serialize_model(&object)));
        Ok(Some(outcome))
    }

    /// Remove an object from memory; false when it was not stored
    pub async fn delete<M: Model>(&self, id: &str) -> Result<bool, HbnbError> {
        let removed = self
            .objects
            .write()
            .await
            .remove(&storage_key(M::KIND, id))
            .is_some();
        Ok(removed)
    }

    pub async fn cities_of_state(&self, state_id: &str) -> Result<Vec<City>, HbnbError> {
        let cities = self.all::<City>().await?;
        Ok(cities.into_iter().filter(|c| c.state_id == state_id).collect())
    }

    pub async fn places_of_city(&self, city_id: &str) -> Result<Vec<Place>, HbnbError> {
        let places = self.all::<Place>().await?;
        Ok(places.into_iter().filter(|p| p.city_id == city_id).collect())
    }

    /// The place's own id list; this backend has no join table
    pub fn amenity_ids_of(&self, place: &Place) -> HashSet<String> {
        place.amenity_ids.iter().cloned().collect()
    }

    /// Linked amenities that still exist
    pub async fn amenities_of(&self, place: &Place) -> Result<Vec<Amenity>, HbnbError> {
        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in &place.amenity_ids {
            if let Some(amenity) = self.get::<Amenity>(amenity_id).await? {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }

    /// Returns false when the amenity was already linked
    pub async fn link_amenity(&self, place: &Place, amenity: &Amenity) -> Result<bool, HbnbError> {
        self.modify::<Place, _>(place.id(), |stored| {
            if stored.amenity_ids.iter().any(|id| id == amenity.id()) {
                return false;
            }
            stored.amenity_ids.push(amenity.id().to_string());
            true
        })
        .await?
        .ok_or_else(|| HbnbError::not_found(EntityKind::Place, place.id()))
    }

    /// Returns false when the amenity was not linked
    pub async fn unlink_amenity(&self, place: &Place, amenity: &Amenity) -> Result<bool, HbnbError> {
        self.modify::<Place, _>(place.id(), |stored| {
            let before = stored.amenity_ids.len();
            stored.amenity_ids.retain(|id| id != amenity.id());
            stored.amenity_ids.len() != before
        })
        .await?
        .ok_or_else(|| HbnbError::not_found(EntityKind::Place, place.id()))
    }

    fn decode<M: Model>(value: &Value) -> Result<M, HbnbError> {
        serde_json::from_value(value.clone()).map_err(|e| {
            log::error!("Corrupt {} record in storage: {}", M::KIND, e);
            HbnbError::StorageError(e.to_string())
        })
    }
}
