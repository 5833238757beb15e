//! Environment-driven configuration for the client.

use std::path::PathBuf;

use qrgen_engine::{EngineConfig, RequestSettings};

/// Environment variable naming the generation service base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Fallback when the environment provides no base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Resolve the engine configuration once at startup. Downloads land in the
/// process working directory.
pub fn engine_config() -> EngineConfig {
    let base_url = resolve_base_url(std::env::var(API_BASE_URL_VAR).ok());
    let download_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    EngineConfig {
        base_url,
        request: RequestSettings::default(),
        download_dir,
    }
}

fn resolve_base_url(value: Option<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}
