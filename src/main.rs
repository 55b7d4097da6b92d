use std::sync::Arc;

use futures::StreamExt;
use localhive::channels::{Channel, CliChannel};
use localhive::config::PorterConfig;
use localhive::coordinator::{Porter, ResponderRegistry, StateStore};
use localhive::providers::geolocation::{GeolocationProvider, OpenMeteoGeocoder, StaticGeocoder};
use localhive::providers::{LlmBackend, LlmConfig, create_provider};
use localhive::store::{LibSqlStore, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ── LLM provider ─────────────────────────────────────────────────────
    let backend = match std::env::var("LOCALHIVE_LLM_BACKEND").as_deref() {
        Ok("openai") => LlmBackend::OpenAi,
        _ => LlmBackend::Anthropic,
    };
    let (key_var, default_model) = match backend {
        LlmBackend::Anthropic => ("ANTHROPIC_API_KEY", "claude-sonnet-4-20250514"),
        LlmBackend::OpenAi => ("OPENAI_API_KEY", "gpt-4o"),
    };
    let api_key = std::env::var(key_var).unwrap_or_else(|_| {
        eprintln!("Error: {key_var} not set");
        eprintln!("  export {key_var}=...");
        std::process::exit(1);
    });
    let model =
        std::env::var("LOCALHIVE_MODEL").unwrap_or_else(|_| default_model.to_string());

    let config = PorterConfig::default();
    let llm_config = LlmConfig {
        backend,
        api_key: secrecy::SecretString::from(api_key),
        model: model.clone(),
        max_tokens: config.fallback_max_tokens,
    };
    let textgen = create_provider(&llm_config)?;

    // ── Profile store ────────────────────────────────────────────────────
    let db_path =
        std::env::var("LOCALHIVE_DB_PATH").unwrap_or_else(|_| "./data/localhive.db".to_string());
    let profiles: Arc<dyn ProfileStore> = Arc::new(
        LibSqlStore::new_local(std::path::Path::new(&db_path))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to open database at {db_path}: {e}");
                std::process::exit(1);
            }),
    );

    // ── Geolocation ──────────────────────────────────────────────────────
    let offline_geocoder = std::env::var("LOCALHIVE_OFFLINE_GEOCODER").is_ok();
    let geolocation: Arc<dyn GeolocationProvider> = if offline_geocoder {
        Arc::new(StaticGeocoder::bhopal())
    } else {
        Arc::new(OpenMeteoGeocoder::new())
    };

    eprintln!("🏡 LocalHive v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {model}");
    eprintln!("   Database: {db_path}");
    eprintln!(
        "   Geocoder: {}",
        if offline_geocoder {
            "static (offline)"
        } else {
            "open-meteo"
        }
    );
    eprintln!("   Type a message and press Enter. Ctrl-D to exit.\n");

    // ── Porter ───────────────────────────────────────────────────────────
    let (porter, mut replies) = Porter::new(
        config,
        StateStore::new(),
        profiles,
        geolocation,
        textgen,
        ResponderRegistry::full(),
    );

    let channel = Arc::new(CliChannel::new());

    // Outbound consumer: forward Porter replies to the channel
    let reply_channel = Arc::clone(&channel);
    tokio::spawn(async move {
        while let Some(reply) = replies.recv().await {
            if let Err(e) = reply_channel.respond(&reply).await {
                tracing::error!("Failed to deliver reply: {}", e);
            }
        }
    });

    // Inbound loop
    let mut messages = channel.start().await?;
    while let Some(msg) = messages.next().await {
        porter.handle_message(msg).await;
    }

    Ok(())
}
