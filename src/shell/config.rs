use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::use_cases::record_visit::strategy::DedupStrategy;
use crate::shared::core::counter::CounterStrategy;
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "WAITLIST_";

/// Runtime settings, read from `WAITLIST_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// PostgreSQL URL. Without it the service runs on in memory stores.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
    #[serde(default)]
    pub counter_strategy: CounterStrategy,
    #[serde(default)]
    pub dedup_strategy: DedupStrategy,
    #[serde(default)]
    pub traffic_order: TrafficOrder,
    #[serde(default = "default_refresh_capacity")]
    pub refresh_capacity: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_store_timeout_ms() -> u64 {
    2_000
}

fn default_refresh_capacity() -> usize {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            store_timeout_ms: default_store_timeout_ms(),
            counter_strategy: CounterStrategy::default(),
            dedup_strategy: DedupStrategy::default(),
            traffic_order: TrafficOrder::default(),
            refresh_capacity: default_refresh_capacity(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<Config>()
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
