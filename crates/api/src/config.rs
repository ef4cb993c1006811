//! Server Configuration
//!
//! Layered settings: compiled defaults, then an optional
//! `growth-platform.toml` next to the binary, then `GROWTH__`-prefixed
//! environment variables (`GROWTH__LLM__BASE_URL` and so on). Plain
//! `DATABASE_URL` and `LLM_API_KEY` are honored as fallbacks since that is
//! what most deploy targets inject.

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::rate_limit::RateLimitConfig;
use llm_gateway::GatewayConfig;

/// Top-level settings for the platform binary
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Socket address the server binds, e.g. `0.0.0.0:8080`
    pub bind_addr: String,
    /// SQLite URL; falls back to in-memory storage when unset
    pub database_url: Option<String>,
    pub rate_limits: RateLimits,
    pub llm: LlmSettings,
}

/// Per-route-group rate limit quotas
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimits {
    /// Applied to /api/ai/* where each request spends model tokens
    pub ai: RateLimitConfig,
    /// Applied to lead capture and blueprint routes
    pub general: RateLimitConfig,
}

/// Model gateway settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Fallback chain, tried in order
    pub models: Vec<String>,
    pub max_output_tokens: u32,
    pub timeout_seconds: u64,
    /// Failed attempts append here, one JSON line each
    pub failure_log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_url: None,
            rate_limits: RateLimits::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            ai: RateLimitConfig::strict(),
            general: RateLimitConfig::default(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        let defaults = GatewayConfig::default();
        Self {
            base_url: defaults.base_url,
            api_key: None,
            models: defaults.models,
            max_output_tokens: defaults.max_output_tokens,
            timeout_seconds: defaults.timeout_seconds,
            failure_log: "llm-failures.log".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment layers.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("growth-platform").required(false))
            .add_source(Environment::with_prefix("GROWTH").separator("__"))
            .build()?
            .try_deserialize()?;

        if settings.database_url.is_none() {
            settings.database_url = std::env::var("DATABASE_URL").ok();
        }
        if settings.llm.api_key.is_none() {
            settings.llm.api_key = std::env::var("LLM_API_KEY").ok();
        }
        Ok(settings)
    }

    /// Gateway config derived from the LLM section.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.llm.base_url.clone(),
            api_key: self.llm.api_key.clone(),
            models: self.llm.models.clone(),
            max_output_tokens: self.llm.max_output_tokens,
            timeout_seconds: self.llm.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gateway_defaults() {
        let settings = Settings::default();
        let gateway = GatewayConfig::default();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert!(settings.database_url.is_none());
        assert_eq!(settings.llm.base_url, gateway.base_url);
        assert_eq!(settings.llm.models, gateway.models);
        assert_eq!(settings.llm.failure_log, "llm-failures.log");
    }

    #[test]
    fn test_default_rate_limits_are_tiered() {
        let limits = RateLimits::default();
        // AI routes replenish slower and burst smaller than general routes.
        assert!(limits.ai.per_second > limits.general.per_second);
        assert!(limits.ai.burst_size < limits.general.burst_size);
    }

    #[test]
    fn test_gateway_config_carries_llm_section() {
        let mut settings = Settings::default();
        settings.llm.api_key = Some("sk-test".to_string());
        settings.llm.models = vec!["model-a".to_string()];
        settings.llm.max_output_tokens = 256;

        let gateway = settings.gateway_config();
        assert_eq!(gateway.api_key.as_deref(), Some("sk-test"));
        assert_eq!(gateway.models, vec!["model-a".to_string()]);
        assert_eq!(gateway.max_output_tokens, 256);
    }

    #[test]
    fn test_settings_deserialize_from_partial_toml() {
        let settings: Settings = ::config::Config::builder()
            .add_source(::config::File::from_str(
                "bind_addr = \"127.0.0.1:9999\"\n[llm]\nmax_output_tokens = 128\n",
                ::config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:9999");
        assert_eq!(settings.llm.max_output_tokens, 128);
        // Untouched sections keep their defaults.
        assert_eq!(settings.rate_limits.general.burst_size, 5);
    }
}
