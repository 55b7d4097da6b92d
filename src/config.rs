//! Configuration types.

use std::time::Duration;

/// Porter configuration.
#[derive(Debug, Clone)]
pub struct PorterConfig {
    /// Assistant name used in prompts and logging.
    pub name: String,
    /// How long to wait for a geolocation result before reverting the
    /// onboarding step and re-prompting the user.
    pub geolocation_timeout: Duration,
    /// Maximum tokens requested from the text-generation fallback.
    pub fallback_max_tokens: u64,
    /// Locality used in the fallback persona before onboarding resolves one.
    pub default_locality: String,
}

impl Default for PorterConfig {
    fn default() -> Self {
        Self {
            name: "LocalHive".to_string(),
            geolocation_timeout: Duration::from_secs(15),
            fallback_max_tokens: 200,
            default_locality: "Bhopal, Madhya Pradesh, India".to_string(),
        }
    }
}
