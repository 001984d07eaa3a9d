use std::io;
use std::time::Duration;

use thiserror::Error;

/// Reasons a health probe did not produce an HTTP status code.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not create request: invalid address {0:?}")]
    InvalidAddress(String),
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("could not fetch server: {0}")]
    Request(#[source] reqwest::Error),
    #[error("could not fetch server: timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
    #[error("Bot token not provided. Set TOKEN, pass --token=YOUR_BOT_TOKEN, or add [bot].token to the config file")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
