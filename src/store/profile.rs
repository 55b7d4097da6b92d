//! User profile model and storage-key derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted record of an onboarded user.
///
/// Created once geolocation succeeds. Immutable-by-replacement: a later
/// write for the same key fully overwrites the prior value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub locality: String,
    pub latitude: f64,
    pub longitude: f64,
    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile stamped with the current time.
    pub fn new(name: &str, locality: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            locality: locality.to_string(),
            latitude,
            longitude,
            last_updated: Utc::now(),
        }
    }

    /// The storage key for this profile.
    pub fn key(&self) -> String {
        profile_key(&self.name, &self.locality)
    }
}

/// Derive the storage key for a (name, locality) pair.
///
/// Lowercases both fields and replaces interior whitespace with underscores,
/// joined by a single underscore. Deterministic: the same pair always yields
/// the same key, so re-storage overwrites instead of duplicating.
pub fn profile_key(name: &str, locality: &str) -> String {
    format!("{}_{}", normalize(name), normalize(locality))
}

fn normalize(field: &str) -> String {
    field
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lowercases_and_joins_with_underscores() {
        assert_eq!(profile_key("Alice", "Bhopal, India"), "alice_bhopal,_india");
    }

    #[test]
    fn key_collapses_interior_whitespace() {
        assert_eq!(
            profile_key("Mary  Jane", "  New   Delhi "),
            "mary_jane_new_delhi"
        );
    }

    #[test]
    fn key_is_deterministic() {
        let a = profile_key("Bob", "Indore");
        let b = profile_key("Bob", "Indore");
        assert_eq!(a, b);
    }

    #[test]
    fn profile_key_matches_free_function() {
        let profile = UserProfile::new("Alice", "Bhopal, India", 23.2599, 77.4126);
        assert_eq!(profile.key(), profile_key("Alice", "Bhopal, India"));
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = UserProfile::new("Alice", "Bhopal, India", 23.2599, 77.4126);
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
