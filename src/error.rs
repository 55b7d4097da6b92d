//! Error types for LocalHive.

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Profile-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open database: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Corrupt row for key {key}: {reason}")]
    CorruptRow { key: String, reason: String },
}

/// External-provider errors (geolocation, text generation).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("No result from {provider} for {query:?}")]
    NoResult { provider: String, query: String },

    #[error("Provider {provider} timed out after {seconds}s")]
    Timeout { provider: String, seconds: u64 },
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Failed to send reply on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },
}

/// Result type alias for the assistant.
pub type Result<T> = std::result::Result<T, Error>;
