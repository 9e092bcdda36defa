// src/services/object_service.rs
// DOCUMENTATION: Persistence steps shared by every entity service
// PURPOSE: Lookup, listing, saving and deletion for any Model

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::Model;

pub struct ObjectService;

impl ObjectService {
    pub async fn get<M: Model>(storage: &Storage, id: &str) -> Result<M, HbnbError> {
        storage.require::<M>(id).await
    }

    pub async fn list<M: Model>(storage: &Storage) -> Result<Vec<M>, HbnbError> {
        storage.all::<M>().await
    }

    /// Store a new object and flush storage
    pub async fn create<M: Model>(storage: &Storage, object: M) -> Result<M, HbnbError> {
        storage.insert(&object).await?;
        storage.save().await?;
        log::info!("Created {} with id: {}", M::KIND, object.id());
        Ok(object)
    }

    /// Bump `updated_at`, store the object and flush storage
    pub async fn update<M: Model>(storage: &Storage, mut object: M) -> Result<M, HbnbError> {
        object.base_mut().touch();
        storage.update(&mut object).await?;
        storage.save().await?;
        log::info!("Updated {}: {}", M::KIND, object.id());
        Ok(object)
    }

    pub async fn delete<M: Model>(storage: &Storage, id: &str) -> Result<(), HbnbError> {
        if !storage.delete::<M>(id).await? {
            log::warn!("Delete of unknown {}: {}", M::KIND, id);
            return Err(HbnbError::not_found(M::KIND, id));
        }
        storage.save().await?;
        log::info!("Deleted {}: {}", M::KIND, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_storage;
    use crate::models::Amenity;

    #[tokio::test]
    async fn test_update_touches_timestamp() {
        let storage = temp_storage();
        let amenity = ObjectService::create(&storage, Amenity::new("Wifi")).await.unwrap();
        let created_at = amenity.base.updated_at;

        let updated = ObjectService::update(&storage, amenity).await.unwrap();
        assert!(updated.base.updated_at >= created_at);
        assert_eq!(updated.base.created_at, created_at);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let storage = temp_storage();
        let err = ObjectService::delete::<Amenity>(&storage, "missing").await.unwrap_err();
        assert!(matches!(err, HbnbError::NotFound(_)));
    }
}
