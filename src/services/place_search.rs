// src/services/place_search.rs
// DOCUMENTATION: Multi-criteria place filtering behind POST /places_search
// PURPOSE: Location filter (states, cities) followed by the amenity subset test

use crate::db::Storage;
use crate::errors::HbnbError;
use crate::models::{Amenity, City, Model, Place, PlaceSearchRequest, State};
use std::collections::{BTreeMap, HashSet};

/// Read-only place search
/// DOCUMENTATION: Never writes to storage. Unknown ids are dropped during
/// resolution and contribute neither candidates nor constraints.
pub struct PlaceSearch;

impl PlaceSearch {
    /// Places matching `request`, ordered by id
    pub async fn run(
        storage: &Storage,
        request: &PlaceSearchRequest,
    ) -> Result<Vec<Place>, HbnbError> {
        let candidates = Self::gather_candidates(storage, request).await?;

        if request.amenity_ids().is_empty() {
            return Ok(candidates.into_values().collect());
        }

        let required = Self::resolve_amenity_ids(storage, request.amenity_ids()).await?;
        let mut matches = Vec::with_capacity(candidates.len());

        for place in candidates.into_values() {
            let owned = storage.amenity_ids_of(&place).await?;
            if required.is_subset(&owned) {
                matches.push(place);
            }
        }

        log::debug!(
            "places_search: {} states, {} cities, {} amenities ({} resolved) -> {} places",
            request.state_ids().len(),
            request.city_ids().len(),
            request.amenity_ids().len(),
            required.len(),
            matches.len()
        );

        Ok(matches)
    }

    /// Location filter; keyed by place id so a place reached twice is kept once
    async fn gather_candidates(
        storage: &Storage,
        request: &PlaceSearchRequest,
    ) -> Result<BTreeMap<String, Place>, HbnbError> {
        let mut candidates = BTreeMap::new();

        if request.is_unlocated() {
            for place in storage.all::<Place>().await? {
                candidates.insert(place.id().to_string(), place);
            }
            return Ok(candidates);
        }

        let mut cities: Vec<City> = Vec::new();
        for state in Self::resolve::<State>(storage, request.state_ids()).await? {
            cities.extend(storage.cities_of_state(state.id()).await?);
        }
        cities.extend(Self::resolve::<City>(storage, request.city_ids()).await?);

        let mut visited = HashSet::new();
        for city in cities {
            if !visited.insert(city.id().to_string()) {
                continue;
            }
            for place in storage.places_of_city(city.id()).await? {
                candidates.insert(place.id().to_string(), place);
            }
        }

        Ok(candidates)
    }

    /// Resolve-or-drop: the objects behind `ids` that exist
    async fn resolve<M: Model>(storage: &Storage, ids: &[String]) -> Result<Vec<M>, HbnbError> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            match storage.get::<M>(id).await? {
                Some(object) => resolved.push(object),
                None => log::debug!("places_search: ignoring unknown {} id {}", M::KIND, id),
            }
        }
        Ok(resolved)
    }

    async fn resolve_amenity_ids(
        storage: &Storage,
        ids: &[String],
    ) -> Result<HashSet<String>, HbnbError> {
        let amenities = Self::resolve::<Amenity>(storage, ids).await?;
        Ok(amenities.into_iter().map(|a| a.base.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_storage;
    use crate::models::User;

    /// S1 -> C1 -> {P1 {A1, A2}, P2 {A1}}; S2 -> C2 -> {P3 {}}
    struct Fixture {
        storage: Storage,
        s1: State,
        c1: City,
        c2: City,
        p1: Place,
        p2: Place,
        p3: Place,
        a1: Amenity,
        a2: Amenity,
    }

    async fn fixture() -> Fixture {
        let storage = temp_storage();

        let s1 = State::new("California");
        let s2 = State::new("Oregon");
        let c1 = City::new(s1.id(), "San Francisco");
        let c2 = City::new(s2.id(), "Portland");
        let user = User::new("host@hbnb.io", "pwd");
        let a1 = Amenity::new("Wifi");
        let a2 = Amenity::new("Pool");

        let mut p1 = Place::new(c1.id(), user.id(), "Loft");
        p1.amenity_ids = vec![a1.id().to_string(), a2.id().to_string()];
        let mut p2 = Place::new(c1.id(), user.id(), "Studio");
        p2.amenity_ids = vec![a1.id().to_string()];
        let p3 = Place::new(c2.id(), user.id(), "Cabin");

        for state in [&s1, &s2] {
            storage.insert(state).await.unwrap();
        }
        for city in [&c1, &c2] {
            storage.insert(city).await.unwrap();
        }
        for amenity in [&a1, &a2] {
            storage.insert(amenity).await.unwrap();
        }
        for place in [&p1, &p2, &p3] {
            storage.insert(place).await.unwrap();
        }
        storage.insert(&user).await.unwrap();

        Fixture {
            storage,
            s1,
            c1,
            c2,
            p1,
            p2,
            p3,
            a1,
            a2,
        }
    }

    fn request(states: &[&str], cities: &[&str], amenities: &[&str]) -> PlaceSearchRequest {
        let owned = |ids: &[&str]| Some(ids.iter().map(|id| id.to_string()).collect());
        PlaceSearchRequest {
            states: owned(states),
            cities: owned(cities),
            amenities: owned(amenities),
        }
    }

    async fn search_ids(storage: &Storage, req: &PlaceSearchRequest) -> HashSet<String> {
        PlaceSearch::run(storage, req)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.base.id)
            .collect()
    }

    fn ids(places: &[&Place]) -> HashSet<String> {
        places.iter().map(|p| p.id().to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_request_returns_every_place() {
        let f = fixture().await;
        let found = search_ids(&f.storage, &PlaceSearchRequest::default()).await;
        assert_eq!(found, ids(&[&f.p1, &f.p2, &f.p3]));
    }

    #[tokio::test]
    async fn test_state_filter() {
        let f = fixture().await;
        let found = search_ids(&f.storage, &request(&[f.s1.id()], &[], &[])).await;
        assert_eq!(found, ids(&[&f.p1, &f.p2]));
    }

    #[tokio::test]
    async fn test_state_and_amenities() {
        let f = fixture().await;
        let req = request(&[f.s1.id()], &[], &[f.a1.id(), f.a2.id()]);
        let found = search_ids(&f.storage, &req).await;
        assert_eq!(found, ids(&[&f.p1]));
    }

    #[tokio::test]
    async fn test_city_filter() {
        let f = fixture().await;
        let found = search_ids(&f.storage, &request(&[], &[f.c2.id()], &[])).await;
        assert_eq!(found, ids(&[&f.p3]));
    }

    #[tokio::test]
    async fn test_amenities_without_location_filter_all_places() {
        let f = fixture().await;
        let found = search_ids(&f.storage, &request(&[], &[], &[f.a1.id()])).await;
        assert_eq!(found, ids(&[&f.p1, &f.p2]));
    }

    #[tokio::test]
    async fn test_unknown_state_returns_nothing() {
        let f = fixture().await;
        let found = search_ids(&f.storage, &request(&["UNKNOWN"], &[], &[])).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_state_and_city_union_is_deduplicated() {
        let f = fixture().await;
        let req = request(&[f.s1.id()], &[f.c1.id(), f.c2.id()], &[]);
        let places = PlaceSearch::run(&f.storage, &req).await.unwrap();

        assert_eq!(places.len(), 3);
        let mut sorted: Vec<String> = places.iter().map(|p| p.base.id.clone()).collect();
        sorted.sort();
        let returned: Vec<String> = places.into_iter().map(|p| p.base.id).collect();
        assert_eq!(returned, sorted);
    }

    #[tokio::test]
    async fn test_unknown_amenity_ids_are_dropped() {
        let f = fixture().await;
        let with_unknown = request(&[f.s1.id()], &[], &[f.a2.id(), "NOPE"]);
        let without = request(&[f.s1.id()], &[], &[f.a2.id()]);

        let found = search_ids(&f.storage, &with_unknown).await;
        assert_eq!(found, search_ids(&f.storage, &without).await);
        assert_eq!(found, ids(&[&f.p1]));

        // only unknown ids: no constraint at all
        let found = search_ids(&f.storage, &request(&[f.s1.id()], &[], &["NOPE"])).await;
        assert_eq!(found, ids(&[&f.p1, &f.p2]));
    }

    #[tokio::test]
    async fn test_adding_amenities_never_grows_result() {
        let f = fixture().await;
        let mut previous = search_ids(&f.storage, &request(&[], &[], &[])).await;

        for amenities in [vec![f.a1.id()], vec![f.a1.id(), f.a2.id()]] {
            let next = search_ids(&f.storage, &request(&[], &[], &amenities)).await;
            assert!(next.is_subset(&previous));
            previous = next;
        }
    }

    #[tokio::test]
    async fn test_search_is_idempotent_and_read_only() {
        let f = fixture().await;
        let req = request(&[f.s1.id()], &[], &[f.a1.id()]);

        let first = search_ids(&f.storage, &req).await;
        let second = search_ids(&f.storage, &req).await;
        assert_eq!(first, second);

        let stored = f.storage.get::<Place>(f.p1.id()).await.unwrap().unwrap();
        assert_eq!(stored.amenity_ids, f.p1.amenity_ids);
    }

    #[tokio::test]
    async fn test_location_filter_only_returns_places_in_named_locations() {
        let f = fixture().await;
        let places = PlaceSearch::run(&f.storage, &request(&[], &[f.c1.id()], &[]))
            .await
            .unwrap();
        assert!(!places.is_empty());
        assert!(places.iter().all(|p| p.city_id == f.c1.base.id));
    }
}
