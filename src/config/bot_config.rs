use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::config::ProbeConfig;
use crate::util::errors::{ConfigError, Result};

pub const TOKEN_VAR: &str = "TOKEN";
pub const SERVER_ADDR_VAR: &str = "SERVERADD";
pub const GUILD_ID_VAR: &str = "GuildID";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub bot: ChatConfig,
    #[serde(default)]
    pub server: ProbeConfig,
    #[serde(default)]
    pub commands: CommandConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub token: String,
    /// Chat the commands are scoped to. `None` registers them globally.
    #[serde(default)]
    pub guild_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            allowed: vec![],
        }
    }
}

fn default_prefix() -> String {
    "/".to_string()
}

impl BotConfig {
    /// Load bot configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: BotConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `.env` if present, then build the config from the optional file
    /// and the process environment.
    pub fn from_env<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::info!("Loaded environment from {}", env_file.display());
        }

        let config = match path {
            Some(path) => {
                tracing::info!("Reading config file {}", path.as_ref().display());
                Self::load(path)?
            }
            None => Self::default(),
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `TOKEN`, `SERVERADD` and `GuildID` on top of the file values
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TOKEN_VAR) {
            self.bot.token = token;
        }

        if let Some(addr) = lookup(SERVER_ADDR_VAR) {
            self.server.server_addr = addr;
        }

        if let Some(raw) = lookup(GUILD_ID_VAR) {
            let raw = raw.trim();
            self.bot.guild_id = if raw.is_empty() {
                None
            } else {
                let id = raw.parse::<i64>().map_err(|e| {
                    ConfigError::InvalidValue(format!("{} is not a chat id: {}", GUILD_ID_VAR, e))
                })?;
                Some(id)
            };
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if self.commands.prefix.is_empty() {
            return Err(ConfigError::InvalidValue(
                "commands.prefix cannot be empty".to_string(),
            ));
        }

        self.server.validate()
    }

    /// Check if a command is allowed
    pub fn is_command_allowed(&self, command: &str) -> bool {
        if self.commands.allowed.is_empty() {
            // If no allowed list, allow all
            return true;
        }
        self.commands.allowed.iter().any(|c| c == command)
    }
}
