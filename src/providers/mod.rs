//! External collaborators: geolocation and text generation.

pub mod geolocation;
pub mod textgen;

pub use geolocation::{Coordinates, GeolocationProvider, OpenMeteoGeocoder, StaticGeocoder};
pub use textgen::{LlmBackend, LlmConfig, TextGenProvider, create_provider};
