// src/db/db_storage.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: PostgreSQL storage backend built on the Model trait

use crate::errors::HbnbError;
use crate::models::*;
use sqlx::PgPool;
use std::collections::HashSet;

/// Relational object store
/// DOCUMENTATION: One table per EntityKind plus the `place_amenity` join
/// table. Statements run in autocommit mode, so `insert` is durable on return.
pub struct DbStorage {
    pool: PgPool,
}

impl DbStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get<M: Model>(&self, id: &str) -> Result<Option<M>, HbnbError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", M::KIND.table());

        sqlx::query_as::<_, M>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching {} {}: {}", M::KIND, id, e);
                HbnbError::DatabaseError(e.to_string())
            })
    }

    pub async fn all<M: Model>(&self) -> Result<Vec<M>, HbnbError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", M::KIND.table());

        sqlx::query_as::<_, M>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Database error listing {}: {}", M::KIND.table(), e);
                HbnbError::DatabaseError(e.to_string())
            })
    }

    pub async fn count(&self, kind: EntityKind) -> Result<i64, HbnbError> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());

        let count: (i64,) = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Count query error on {}: {}", kind.table(), e);
                HbnbError::DatabaseError(e.to_string())
            })?;

        Ok(count.0)
    }

    /// Insert the object, or overwrite its columns when the id already exists
    pub async fn insert<M: Model>(&self, object: &M) -> Result<(), HbnbError> {
        let sql = upsert_sql(M::KIND.table(), M::COLUMNS);
        let base = object.base();

        let query = sqlx::query(&sql)
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at);

        object.bind_columns(query).execute(&self.pool).await.map_err(|e| {
            log::error!("Failed to store {} {}: {}", M::KIND, base.id, e);
            HbnbError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete<M: Model>(&self, id: &str) -> Result<bool, HbnbError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", M::KIND.table());

        let rows = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for {} {}: {}", M::KIND, id, e);
                HbnbError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        Ok(rows > 0)
    }

    pub async fn cities_of_state(&self, state_id: &str) -> Result<Vec<City>, HbnbError> {
        sqlx::query_as::<_, City>("SELECT * FROM cities WHERE state_id = $1 ORDER BY id")
            .bind(state_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch cities of state {}: {}", state_id, e);
                HbnbError::DatabaseError(e.to_string())
            })
    }

    pub async fn places_of_city(&self, city_id: &str) -> Result<Vec<Place>, HbnbError> {
        sqlx::query_as::<_, Place>("SELECT * FROM places WHERE city_id = $1 ORDER BY id")
            .bind(city_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch places of city {}: {}", city_id, e);
                HbnbError::DatabaseError(e.to_string())
            })
    }

    /// Amenity ids linked through the join table
    pub async fn amenity_ids_of(&self, place: &Place) -> Result<HashSet<String>, HbnbError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT amenity_id FROM place_amenity WHERE place_id = $1")
                .bind(place.id())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    log::error!("Failed to fetch amenity ids of place {}: {}", place.id(), e);
                    HbnbError::DatabaseError(e.to_string())
                })?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn amenities_of(&self, place: &Place) -> Result<Vec<Amenity>, HbnbError> {
        sqlx::query_as::<_, Amenity>(
            r#"
            SELECT a.*
            FROM amenities a
            JOIN place_amenity pa ON pa.amenity_id = a.id
            WHERE pa.place_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(place.id())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch amenities of place {}: {}", place.id(), e);
            HbnbError::DatabaseError(e.to_string())
        })
    }

    /// Returns false when the amenity was already linked
    pub async fn link_amenity(&self, place: &Place, amenity: &Amenity) -> Result<bool, HbnbError> {
        let rows = sqlx::query(
            r#"
            INSERT INTO place_amenity (place_id, amenity_id)
            VALUES ($1, $2)
            ON CONFLICT (place_id, amenity_id) DO NOTHING
            "#,
        )
        .bind(place.id())
        .bind(amenity.id())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to link amenity {} to place {}: {}", amenity.id(), place.id(), e);
            HbnbError::DatabaseError(e.to_string())
        })?
        .rows_affected();

        Ok(rows > 0)
    }

    /// Returns false when the amenity was not linked
    pub async fn unlink_amenity(&self, place: &Place, amenity: &Amenity) -> Result<bool, HbnbError> {
        let rows = sqlx::query("DELETE FROM place_amenity WHERE place_id = $1 AND amenity_id = $2")
            .bind(place.id())
            .bind(amenity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!(
                    "Failed to unlink amenity {} from place {}: {}",
                    amenity.id(),
                    place.id(),
                    e
                );
                HbnbError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        Ok(rows > 0)
    }
}

/// `INSERT ... ON CONFLICT (id) DO UPDATE` over the base columns plus `columns`
/// Placeholders follow bind order: id, created_at, updated_at, then `columns`.
fn upsert_sql(table: &str, columns: &[&str]) -> String {
    let names: Vec<&str> = ["id", "created_at", "updated_at"]
        .iter()
        .chain(columns.iter())
        .copied()
        .collect();

    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("${}", i)).collect();

    let updates: Vec<String> = columns
        .iter()
        .chain(["updated_at"].iter())
        .map(|column| format!("{column} = EXCLUDED.{column}"))
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT (id) DO UPDATE SET {}",
        table,
        names.join(", "),
        placeholders.join(", "),
        updates.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_sql_matches_bind_order() {
        let sql = upsert_sql(City::KIND.table(), City::COLUMNS);
        assert_eq!(
            sql,
            "INSERT INTO cities (id, created_at, updated_at, state_id, name) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET state_id = EXCLUDED.state_id, \
             name = EXCLUDED.name, updated_at = EXCLUDED.updated_at"
        );
    }

    #[test]
    fn test_upsert_sql_place_has_all_columns() {
        let sql = upsert_sql(Place::KIND.table(), Place::COLUMNS);
        assert!(sql.contains("$13"));
        assert!(!sql.contains("$14"));
        assert!(!sql.contains("amenity_ids"));
    }

    /// Migrated pool for the database named by DATABASE_URL, if any
    async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url).await.unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        Some(pool)
    }

    #[tokio::test]
    async fn test_join_table_feeds_place_search() {
        let Some(pool) = test_pool().await else {
            eprintln!("DATABASE_URL not set, skipping relational storage test");
            return;
        };
        let storage = crate::db::Storage::Db(DbStorage::new(pool));

        let s1 = State::new("California");
        let c1 = City::new(s1.id(), "San Francisco");
        let s2 = State::new("Oregon");
        let c2 = City::new(s2.id(), "Portland");
        let user = User::new(format!("{}@hbnb.io", uuid::Uuid::new_v4()), "pwd");
        let a1 = Amenity::new("Wifi");
        let a2 = Amenity::new("Pool");
        let p1 = Place::new(c1.id(), user.id(), "Loft");
        let p2 = Place::new(c1.id(), user.id(), "Studio");
        let p3 = Place::new(c2.id(), user.id(), "Cabin");

        storage.insert(&s1).await.unwrap();
        storage.insert(&s2).await.unwrap();
        storage.insert(&c1).await.unwrap();
        storage.insert(&c2).await.unwrap();
        storage.insert(&user).await.unwrap();
        storage.insert(&a1).await.unwrap();
        storage.insert(&a2).await.unwrap();
        for place in [&p1, &p2, &p3] {
            storage.insert(place).await.unwrap();
        }

        assert!(storage.link_amenity(&p1, &a1).await.unwrap());
        assert!(storage.link_amenity(&p1, &a2).await.unwrap());
        assert!(!storage.link_amenity(&p1, &a2).await.unwrap());
        assert!(storage.link_amenity(&p2, &a1).await.unwrap());

        let ids = storage.amenity_ids_of(&p1).await.unwrap();
        assert_eq!(ids, HashSet::from([a1.base.id.clone(), a2.base.id.clone()]));
        assert!(storage.amenity_ids_of(&p3).await.unwrap().is_empty());

        let request = PlaceSearchRequest {
            states: Some(vec![s1.base.id.clone()]),
            cities: None,
            amenities: Some(vec![a1.base.id.clone(), a2.base.id.clone()]),
        };
        let found = crate::services::PlaceSearch::run(&storage, &request).await.unwrap();
        let found: Vec<&str> = found.iter().map(|p| p.id()).collect();
        assert_eq!(found, vec![p1.id()]);

        assert!(storage.unlink_amenity(&p1, &a2).await.unwrap());
        assert!(!storage.unlink_amenity(&p1, &a2).await.unwrap());

        // cascades remove cities, places and links
        storage.delete::<State>(s1.id()).await.unwrap();
        storage.delete::<State>(s2.id()).await.unwrap();
        assert!(storage.get::<Place>(p1.id()).await.unwrap().is_none());
        storage.delete::<User>(user.id()).await.unwrap();
        storage.delete::<Amenity>(a1.id()).await.unwrap();
        storage.delete::<Amenity>(a2.id()).await.unwrap();
    }
}

