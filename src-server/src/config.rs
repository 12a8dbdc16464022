use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use growthcalc_core::projection::{ProjectionSettings, DEFAULT_MAX_TOTAL_DAYS};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "growthcalc.toml";
pub const ENV_PREFIX: &str = "GROWTHCALC_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub static_dir: String,
    /// Comma-separated origins, or `*` for any
    pub cors_allow_origins: String,
    pub request_timeout_ms: u64,
    pub max_total_days: u32,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            static_dir: "static".to_string(),
            cors_allow_origins: "*".to_string(),
            request_timeout_ms: 30_000,
            max_total_days: DEFAULT_MAX_TOTAL_DAYS,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Defaults, then `growthcalc.toml` if present, then `GROWTHCALC_*` variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads `.env` into the environment first, then extracts from [`Config::figment`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(Self::figment())
    }

    pub fn load(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// `None` allows any origin.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        if self.cors_allow_origins.trim() == "*" {
            return None;
        }
        Some(
            self.cors_allow_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings {
            max_total_days: self.max_total_days,
            ..ProjectionSettings::default()
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.request_timeout_ms == 0 {
        anyhow::bail!("request_timeout_ms must be greater than zero");
    }
    if config.max_total_days == 0 {
        anyhow::bail!("max_total_days must be greater than zero");
    }
    Ok(())
}
