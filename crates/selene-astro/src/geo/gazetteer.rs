//! Offline city gazetteer.
//!
//! A small fixed table of major cities. It backs the default resolver wiring
//! and deterministic tests; the embedding app supplies a networked geocoder
//! through the same `LocationResolver` trait.

use crate::ephemeris::types::GeoLocation;
use crate::geo::resolver::{GeocodeError, LocationResolver};
use async_trait::async_trait;

lazy_static::lazy_static! {
    static ref CITIES: Vec<(&'static str, GeoLocation)> = vec![
        ("beijing", GeoLocation { lat: 39.9042, lon: 116.4074 }),
        ("berlin", GeoLocation { lat: 52.5200, lon: 13.4050 }),
        ("cairo", GeoLocation { lat: 30.0444, lon: 31.2357 }),
        ("chicago", GeoLocation { lat: 41.8781, lon: -87.6298 }),
        ("delhi", GeoLocation { lat: 28.6139, lon: 77.2090 }),
        ("greenwich", GeoLocation { lat: 51.48, lon: 0.0 }),
        ("london", GeoLocation { lat: 51.5074, lon: -0.1278 }),
        ("los angeles", GeoLocation { lat: 34.0522, lon: -118.2437 }),
        ("mexico city", GeoLocation { lat: 19.4326, lon: -99.1332 }),
        ("moscow", GeoLocation { lat: 55.7558, lon: 37.6173 }),
        ("mumbai", GeoLocation { lat: 19.0760, lon: 72.8777 }),
        ("new york", GeoLocation { lat: 40.7128, lon: -74.0060 }),
        ("paris", GeoLocation { lat: 48.8566, lon: 2.3522 }),
        ("sao paulo", GeoLocation { lat: -23.5505, lon: -46.6333 }),
        ("sydney", GeoLocation { lat: -33.8688, lon: 151.2093 }),
        ("tokyo", GeoLocation { lat: 35.6762, lon: 139.6503 }),
        ("toronto", GeoLocation { lat: 43.6532, lon: -79.3832 }),
        ("washington", GeoLocation { lat: 38.9072, lon: -77.0369 }),
    ];
}

pub struct Gazetteer;

impl Gazetteer {
    pub fn new() -> Self {
        Self
    }

    fn lookup(&self, query: &str) -> Vec<GeoLocation> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        if let Some((_, loc)) = CITIES.iter().find(|(name, _)| *name == needle) {
            return vec![loc.clone()];
        }
        CITIES
            .iter()
            .filter(|(name, _)| name.starts_with(&needle))
            .map(|(_, loc)| loc.clone())
            .collect()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationResolver for Gazetteer {
    async fn search(&self, query: &str) -> Result<Vec<GeoLocation>, GeocodeError> {
        Ok(self.lookup(query))
    }
}
