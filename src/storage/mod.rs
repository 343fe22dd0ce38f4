//! Resort records and the storage seam.
//!
//! There is no real persistence: reads come from a fixed in-memory catalog
//! and writes are discarded. `ResortStore` keeps that explicit — a real
//! database implementation slots in behind the same trait.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A tourism resort record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resort {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub water: String,
    pub services: Vec<String>,
    pub season: String,
}

/// Storage interface for resort records.
pub trait ResortStore: Send + Sync {
    /// Returns the full catalog.
    fn all(&self) -> Vec<Resort>;

    /// Accepts a new record. Returns the record as stored.
    fn insert(&self, resort: Resort) -> Resort;
}

/// The only store this service ships: a hardcoded catalog with a no-op
/// write path. Inserted records are never observable by subsequent reads;
/// callers must not assume durability.
pub struct StaticResortStore {
    resorts: Vec<Resort>,
}

impl StaticResortStore {
    pub fn new() -> Self {
        Self {
            resorts: resort_catalog(),
        }
    }
}

impl Default for StaticResortStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResortStore for StaticResortStore {
    fn all(&self) -> Vec<Resort> {
        self.resorts.clone()
    }

    fn insert(&self, resort: Resort) -> Resort {
        // Stand-in for a real persistence call; the record is dropped.
        resort
    }
}

/// Time-derived identifier for new records (epoch milliseconds). Uniqueness
/// under concurrent writes or clock adjustments is not guaranteed.
pub fn generate_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn resort_catalog() -> Vec<Resort> {
    vec![
        Resort {
            id: 1,
            name: "Lake Zaisan Tourist Complex".to_string(),
            kind: "Resort complex".to_string(),
            location: "Lake Zaisan, Abai Region".to_string(),
            lat: 47.48,
            lng: 82.60,
            description: "Tourist complex on the shore of Lake Zaisan".to_string(),
            water: "Lake Zaisan".to_string(),
            services: vec![
                "Hotel".to_string(),
                "Restaurant".to_string(),
                "Water sports".to_string(),
                "Fishing".to_string(),
            ],
            season: "May - September".to_string(),
        },
        Resort {
            id: 2,
            name: "Bukhtarma Holiday Village".to_string(),
            kind: "Holiday village".to_string(),
            location: "Bukhtarma Reservoir, East Kazakhstan Region".to_string(),
            lat: 49.55,
            lng: 83.45,
            description: "Cottages and beach on the Bukhtarma reservoir".to_string(),
            water: "Bukhtarma Reservoir".to_string(),
            services: vec![
                "Cottages".to_string(),
                "Beach".to_string(),
                "Boat rental".to_string(),
            ],
            season: "June - August".to_string(),
        },
        Resort {
            id: 3,
            name: "Sibiny Lakes Camp".to_string(),
            kind: "Campground".to_string(),
            location: "Sibiny Lakes, East Kazakhstan Region".to_string(),
            lat: 49.42,
            lng: 82.35,
            description: "Tent camp among the granite hills of the Sibiny lakes".to_string(),
            water: "Sibiny Lakes".to_string(),
            services: vec![
                "Tent sites".to_string(),
                "Sauna".to_string(),
                "Hiking routes".to_string(),
            ],
            season: "May - September".to_string(),
        },
        Resort {
            id: 4,
            name: "Markakol Nature Lodge".to_string(),
            kind: "Lodge".to_string(),
            location: "Lake Markakol, East Kazakhstan Region".to_string(),
            lat: 48.75,
            lng: 85.75,
            description: "Guesthouse at the Markakol nature reserve".to_string(),
            water: "Lake Markakol".to_string(),
            services: vec![
                "Guesthouse".to_string(),
                "Guided tours".to_string(),
                "Fishing".to_string(),
            ],
            season: "June - September".to_string(),
        },
    ]
}
