//! Startup configuration. The API key is the only knob.

use std::env;

use tracing::warn;

/// Environment variable holding the RapidAPI key.
pub const API_KEY_VAR: &str = "SKYFARE_API_KEY";

pub struct ApiConfig {
    pub api_key: String,
}

impl ApiConfig {
    /// Read the key from the environment. An absent key is a startup failure.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| {
                warn!("Environment variable {API_KEY_VAR} not found");
            })
            .expect("API key misconfigured!");
        Self { api_key }
    }
}
