use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::util::errors::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Host, host:port or hostname of the game server (no scheme)
    #[serde(default, rename = "address")]
    pub server_addr: String,

    /// Upper bound for the whole health request in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl ProbeConfig {
    pub fn new(server_addr: impl Into<String>) -> Self {
        Self {
            server_addr: server_addr.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Target of the health request. Not validated here: a malformed address
    /// surfaces as a failed probe.
    pub fn url(&self) -> String {
        format!("http://{}", self.server_addr)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "server.timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            server_addr: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
