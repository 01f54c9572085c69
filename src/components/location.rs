use std::collections::HashMap;

use crate::error::ArcError;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// FORMAT - city : (latitude, longitude)
const REFERENCE_GEOCODES: [(&str, f64, f64); 18] = [
    ("dublin", 53.3498, -6.2603),
    ("rome", 41.890251, 12.492373),
    ("new york", 40.7128, -74.006),
    ("los angeles", 34.0522, -118.2437),
    ("sydney", -33.865143, 151.2099),
    ("christchurch", -43.5321, 172.6362),
    ("xinghua", 32.9105, 119.8525),
    ("rosario", -32.9442, -60.6505),
    ("captown", -33.92584, 18.42322),
    ("mumbai", 19.228825, 72.854118),
    ("volgograd", 48.700001, 44.516666),
    ("tokyo", 35.652832, 139.839478),
    ("riyadh", 24.774265, 46.738586),
    ("vancouver", 49.279793, -123.115669),
    ("panama", 8.983333, -79.51667),
    ("kuala lumpur", 3.152815, 101.703651),
    ("north pole", 90.0, 180.0),
    ("south pole", -90.0, 90.0),
];

/// Named locations, keyed by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    entries: HashMap<String, Location>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed table used by the demo arcs.
    pub fn reference() -> Self {
        let entries = REFERENCE_GEOCODES
            .iter()
            .map(|(name, lat, lon)| (name.to_string(), Location::new(*lat, *lon)))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, name: &str, lat: f64, lon: f64) -> Result<(), ArcError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(ArcError::InvalidCoordinate {
                name: name.to_string(),
                lat,
                lon,
            });
        }
        self.entries.insert(Self::key(name), Location::new(lat, lon));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Location, ArcError> {
        self.entries
            .get(&Self::key(name))
            .copied()
            .ok_or_else(|| ArcError::UnknownLocation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_has_all_seed_cities() {
        let table = LocationTable::reference();
        assert_eq!(table.len(), 18);
        for name in ["dublin", "kuala lumpur", "north pole", "south pole", "captown"] {
            assert!(table.contains(name), "missing {name}");
        }
        assert_eq!(table.get("rome").unwrap(), Location::new(41.890251, 12.492373));
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let table = LocationTable::reference();
        assert_eq!(table.get("  New York ").unwrap(), table.get("new york").unwrap());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let table = LocationTable::reference();
        assert_eq!(
            table.get("atlantis"),
            Err(ArcError::UnknownLocation("atlantis".to_string()))
        );
    }

    #[test]
    fn insert_validates_ranges() {
        let mut table = LocationTable::new();
        assert!(table.is_empty());
        assert!(table.insert("antimeridian", 0.0, 180.0).is_ok());
        assert!(matches!(
            table.insert("too far north", 91.0, 0.0),
            Err(ArcError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            table.insert("nowhere", 0.0, f64::NAN),
            Err(ArcError::InvalidCoordinate { .. })
        ));
        assert_eq!(table.len(), 1);
    }
}
