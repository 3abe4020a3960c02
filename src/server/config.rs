use chrono::Duration;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ROUTING_API_URL: &str = "https://dev.virtualearth.net/REST/v1/Routes/Truck";
const DEFAULT_ACTIVE_ASSET_WINDOW_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub routing_api_url: Url,
    pub routing_api_key: Option<String>,

    /// How recently an asset must have reported to count as active.
    pub active_asset_window: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let routing_api_url = lookup("ROUTING_API_URL")
            .unwrap_or_else(|| DEFAULT_ROUTING_API_URL.to_string());
        let routing_api_url =
            Url::parse(&routing_api_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "ROUTING_API_URL".to_string(),
                reason: e.to_string(),
            })?;

        let routing_api_key = lookup("ROUTING_API_KEY").filter(|key| !key.trim().is_empty());

        let active_asset_window = match lookup("ACTIVE_ASSET_WINDOW_HOURS") {
            Some(hours) => {
                let hours = hours
                    .parse::<i64>()
                    .ok()
                    .filter(|h| *h > 0)
                    .ok_or_else(|| ConfigError::InvalidEnvVar {
                        name: "ACTIVE_ASSET_WINDOW_HOURS".to_string(),
                        reason: format!("expected a positive number of hours, got '{}'", hours),
                    })?;
                Duration::hours(hours)
            }
            None => Duration::hours(DEFAULT_ACTIVE_ASSET_WINDOW_HOURS),
        };

        Ok(Self {
            database_url,
            bind_address,
            routing_api_url,
            routing_api_key,
            active_asset_window,
        })
    }
}
