pub mod bot_config;
pub mod config;

pub use bot_config::{BotConfig, ChatConfig, CommandConfig};
pub use config::ProbeConfig;
