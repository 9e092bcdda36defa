// src/bin/populate.rs
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Demo catalog ---

struct SeedPlace {
    name: &'static str,
    description: &'static str,
    number_rooms: i32,
    number_bathrooms: i32,
    max_guest: i32,
    price_by_night: i32,
    amenities: &'static [&'static str],
}

struct SeedCity {
    name: &'static str,
    places: &'static [SeedPlace],
}

struct SeedState {
    name: &'static str,
    cities: &'static [SeedCity],
}

const AMENITIES: &[&str] = &["Wifi", "Pool", "Kitchen", "Air conditioning", "Parking"];

const CATALOG: &[SeedState] = &[
    SeedState {
        name: "California",
        cities: &[
            SeedCity {
                name: "San Francisco",
                places: &[
                    SeedPlace {
                        name: "Mission loft",
                        description: "Sunny loft close to Dolores Park",
                        number_rooms: 2,
                        number_bathrooms: 1,
                        max_guest: 4,
                        price_by_night: 180,
                        amenities: &["Wifi", "Kitchen"],
                    },
                    SeedPlace {
                        name: "Bay view studio",
                        description: "Small studio with a view on the bridge",
                        number_rooms: 1,
                        number_bathrooms: 1,
                        max_guest: 2,
                        price_by_night: 140,
                        amenities: &["Wifi"],
                    },
                ],
            },
            SeedCity {
                name: "Palm Springs",
                places: &[SeedPlace {
                    name: "Desert villa",
                    description: "Mid-century villa with a pool",
                    number_rooms: 4,
                    number_bathrooms: 3,
                    max_guest: 8,
                    price_by_night: 420,
                    amenities: &["Wifi", "Pool", "Air conditioning", "Parking"],
                }],
            },
        ],
    },
    SeedState {
        name: "Oregon",
        cities: &[SeedCity {
            name: "Portland",
            places: &[SeedPlace {
                name: "Forest cabin",
                description: "Quiet cabin, no network",
                number_rooms: 1,
                number_bathrooms: 1,
                max_guest: 3,
                price_by_night: 95,
                amenities: &["Parking"],
            }],
        }],
    },
];

#[derive(Deserialize, Debug)]
struct Created {
    id: String,
}

#[derive(Debug)]
struct StepResult {
    label: String,
    success: bool,
    count: usize,
    duration_secs: f64,
}

// --- Populator ---

struct Populator {
    base_url: String,
    client: Client,
    results: Vec<StepResult>,
}

impl Populator {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            client,
            results: Vec::new(),
        })
    }

    async fn check_status(&self) -> bool {
        match self.client.get(format!("{}/status", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// POST a JSON body and return the id of the created object
    async fn create(&self, path: &str, body: Value) -> Result<String> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("HTTP {} on {} - {}", status, path, text);
        }

        let created: Created = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response of {}", path))?;
        Ok(created.id)
    }

    async fn link(&self, place_id: &str, amenity_id: &str) -> Result<()> {
        let path = format!("/places/{}/amenities/{}", place_id, amenity_id);
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;

        if !response.status().is_success() {
            bail!("HTTP {} on {}", response.status(), path);
        }
        Ok(())
    }

    async fn search(&self, body: Value) -> Result<Vec<Value>> {
        let response = self
            .client
            .post(format!("{}/places_search", self.base_url))
            .json(&body)
            .send()
            .await
            .context("POST /places_search failed")?;

        if !response.status().is_success() {
            bail!("HTTP {} on /places_search", response.status());
        }
        response.json().await.context("Failed to parse search results")
    }

    fn record(&mut self, label: &str, outcome: Result<usize, &anyhow::Error>, started: Instant) {
        let duration_secs = started.elapsed().as_secs_f64();
        let (success, count) = match outcome {
            Ok(count) => {
                println!("{}✅ {}: {} ({:.2}s){}", GREEN, label, count, duration_secs, RESET);
                (true, count)
            }
            Err(e) => {
                println!("{}❌ {}: {:#}{}", RED, label, e, RESET);
                (false, 0)
            }
        };
        self.results.push(StepResult {
            label: label.to_string(),
            success,
            count,
            duration_secs,
        });
    }

    async fn seed_amenities(&self) -> Result<Vec<(&'static str, String)>> {
        let mut ids = Vec::with_capacity(AMENITIES.len());
        for name in AMENITIES {
            let id = self.create("/amenities", json!({ "name": name })).await?;
            ids.push((*name, id));
        }
        Ok(ids)
    }

    /// States, cities and places; returns (state id, place id + amenity names) pairs
    async fn seed_catalog(
        &self,
        user_id: &str,
    ) -> Result<(Vec<String>, Vec<(String, &'static [&'static str])>)> {
        let mut state_ids = Vec::new();
        let mut places = Vec::new();

        for state in CATALOG {
            let state_id = self.create("/states", json!({ "name": state.name })).await?;

            for city in state.cities {
                let city_id = self
                    .create(
                        &format!("/states/{}/cities", state_id),
                        json!({ "name": city.name }),
                    )
                    .await?;

                for place in city.places {
                    let place_id = self
                        .create(
                            &format!("/cities/{}/places", city_id),
                            json!({
                                "user_id": user_id,
                                "name": place.name,
                                "description": place.description,
                                "number_rooms": place.number_rooms,
                                "number_bathrooms": place.number_bathrooms,
                                "max_guest": place.max_guest,
                                "price_by_night": place.price_by_night,
                            }),
                        )
                        .await?;
                    places.push((place_id, place.amenities));
                }
            }
            state_ids.push(state_id);
        }

        Ok((state_ids, places))
    }

    async fn run(&mut self) -> Result<()> {
        println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_status().await {
            println!("{}❌ Service unavailable at {}.{}", RED, self.base_url, RESET);
            println!("{}Please ensure hbnb-api is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Service available{}\n", GREEN, RESET);
        self.print_header();

        let started = Instant::now();
        let amenities = self.seed_amenities().await;
        self.record("Amenities", amenities.as_ref().map(Vec::len), started);
        let amenities = amenities?;

        let started = Instant::now();
        let user_id = self
            .create(
                "/users",
                json!({
                    "email": "host@hbnb.io",
                    "password": "hbnb",
                    "first_name": "Demo",
                    "last_name": "Host",
                }),
            )
            .await;
        self.record("Users", user_id.as_ref().map(|_| 1), started);
        let user_id = user_id?;

        let started = Instant::now();
        let catalog = self.seed_catalog(&user_id).await;
        self.record(
            "Places",
            catalog.as_ref().map(|(_, places)| places.len()),
            started,
        );
        let (state_ids, places) = catalog?;

        let started = Instant::now();
        let mut links = 0;
        let mut link_error = None;
        for (place_id, names) in &places {
            for name in names.iter() {
                let Some((_, amenity_id)) = amenities.iter().find(|(n, _)| n == name) else {
                    continue;
                };
                match self.link(place_id, amenity_id).await {
                    Ok(()) => links += 1,
                    Err(e) => link_error = Some(e),
                }
            }
        }
        let outcome = match link_error {
            Some(e) => Err(e),
            None => Ok(links),
        };
        self.record("Amenity links", outcome.as_ref().copied(), started);

        // Sample search: places of the first state offering Wifi
        let started = Instant::now();
        let wifi_id = amenities
            .iter()
            .find(|(name, _)| *name == "Wifi")
            .map(|(_, id)| id.clone())
            .unwrap_or_default();
        let first_state: Vec<String> = state_ids.iter().take(1).cloned().collect();
        let found = self
            .search(json!({ "states": first_state, "amenities": [wifi_id] }))
            .await
            .map(|places| places.len());
        self.record("Search (first state + Wifi)", found.as_ref().copied(), started);

        self.print_summary();
        Ok(())
    }

    fn print_header(&self) {
        println!("{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
        println!("{}║   🏠  HBNB Populator - demo catalog                           ║{}", CYAN, RESET);
        println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
        println!("\n{}📊 States to seed: {}{}", BOLD, CATALOG.len(), RESET);
    }

    fn print_summary(&self) {
        println!("\n\n{}📋 Population Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────");
        println!("{:<32} {:<10} {:>8} {:>10}", "Step", "Status", "Count", "Duration");
        println!("──────────────────────────────────────────────────────────────");

        let mut failures = 0;
        for res in &self.results {
            let status_icon = if res.success { "✅" } else { "❌" };
            println!(
                "{:<32} {:<10} {:>8} {:>9.2}s",
                res.label, status_icon, res.count, res.duration_secs
            );
            if !res.success {
                failures += 1;
            }
        }

        println!("──────────────────────────────────────────────────────────────");
        if failures == 0 {
            println!("\n{}✨ Process Completed Successfully{}", GREEN, RESET);
        } else {
            println!("\n{}⚠️  {} step(s) failed{}", YELLOW, failures, RESET);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("HBNB_API_URL").unwrap_or_else(|_| "http://localhost:5000/api/v1".to_string());

    let mut populator = Populator::new(base_url)?;
    populator.run().await
}
