//! Geolocation provider — resolves a place name to latitude/longitude.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;

/// Resolved coordinates for a place name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// An external service that resolves place names to coordinates.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn locate(&self, location_name: &str) -> Result<Coordinates, ProviderError>;
}

// ── Open-Meteo geocoding ────────────────────────────────────────────

const OPEN_METEO_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

/// Geocoder backed by the Open-Meteo geocoding API (no API key required).
pub struct OpenMeteoGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: OPEN_METEO_URL.to_string(),
        }
    }

    /// Point the geocoder at a different endpoint (for tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for OpenMeteoGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeolocationProvider for OpenMeteoGeocoder {
    async fn locate(&self, location_name: &str) -> Result<Coordinates, ProviderError> {
        // The API matches on the first comma-separated segment best
        // ("Bhopal, India" → "Bhopal").
        let query = location_name
            .split(',')
            .next()
            .unwrap_or(location_name)
            .trim();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", query), ("count", "1")])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed {
                provider: "open-meteo".to_string(),
                reason: e.to_string(),
            })?;

        let body: GeocodingResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    provider: "open-meteo".to_string(),
                    reason: e.to_string(),
                })?;

        let result = body.results.first().ok_or_else(|| ProviderError::NoResult {
            provider: "open-meteo".to_string(),
            query: location_name.to_string(),
        })?;

        debug!(
            location = location_name,
            latitude = result.latitude,
            longitude = result.longitude,
            "Geocoded locality"
        );
        Ok(Coordinates {
            latitude: result.latitude,
            longitude: result.longitude,
        })
    }
}

// ── Static geocoder ─────────────────────────────────────────────────

/// Geocoder that returns fixed coordinates for every place name.
///
/// Useful for offline demo runs; defaults to Bhopal, India.
pub struct StaticGeocoder {
    coordinates: Coordinates,
}

impl StaticGeocoder {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }

    /// Bhopal, Madhya Pradesh, India.
    pub fn bhopal() -> Self {
        Self::new(23.2599, 77.4126)
    }
}

#[async_trait]
impl GeolocationProvider for StaticGeocoder {
    async fn locate(&self, _location_name: &str) -> Result<Coordinates, ProviderError> {
        Ok(self.coordinates)
    }
}
