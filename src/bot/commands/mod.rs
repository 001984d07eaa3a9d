use actix::Addr;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::BotCommand;

use crate::bot::reply::Reply;
use crate::session::Session;
use crate::status::HealthProbe;

mod bot_status;
mod scale_server;
mod server_status;
mod start_server;
mod stop_server;

pub use bot_status::BotStatusCommand;
pub use scale_server::ScaleServerCommand;
pub use server_status::ServerStatusCommand;
pub use start_server::StartServerCommand;
pub use stop_server::StopServerCommand;

/// Result of command execution
#[derive(Debug, Clone)]
pub enum CommandResult {
    Success(Reply),
    Error(String),
}

/// Trait for command handlers - implement this to add new commands
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Get the command name (without prefix, e.g., "botstatus" not "/botstatus")
    fn name(&self) -> &str;

    /// Short description registered with the chat platform
    fn description(&self) -> &str;

    /// Execute the command with given arguments
    async fn execute(&self, args: Vec<String>) -> CommandResult;

    /// One-line help shown in the command listing, without prefix
    fn help(&self) -> String {
        format!("{} - {}", self.name(), self.description())
    }
}

/// Registry for managing command handlers
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: Arc<HashMap<String, Arc<dyn CommandHandler>>>,
    order: Arc<Vec<String>>,
}

impl CommandRegistry {
    /// Create a new empty command registry
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(HashMap::new()),
            order: Arc::new(Vec::new()),
        }
    }

    /// Create a registry with the five server commands
    pub fn with_defaults(session: Addr<Session>, probe: Arc<dyn HealthProbe>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BotStatusCommand::new(session.clone())));
        registry.register(Arc::new(ServerStatusCommand::new(session.clone(), probe)));
        registry.register(Arc::new(StartServerCommand::new(session.clone())));
        registry.register(Arc::new(StopServerCommand::new(session)));
        registry.register(Arc::new(ScaleServerCommand));
        registry
    }

    /// Register a command handler, replacing any handler with the same name
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        let name = handler.name().to_string();
        let handlers = Arc::make_mut(&mut self.handlers);
        if handlers.insert(name.clone(), handler).is_none() {
            Arc::make_mut(&mut self.order).push(name);
        }
    }

    /// Execute a command by name with arguments
    pub async fn execute(&self, command: &str, args: Vec<String>) -> Option<CommandResult> {
        let handler = self.handlers.get(command)?;
        Some(handler.execute(args).await)
    }

    /// Get help for a specific command
    pub fn get_help(&self, command: &str) -> Option<String> {
        self.handlers.get(command).map(|handler| handler.help())
    }

    /// List all registered commands in registration order
    pub fn list_commands(&self) -> Vec<String> {
        self.order.as_ref().clone()
    }

    /// Check if a command exists
    pub fn has_command(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }

    /// Command list as announced to Telegram
    pub fn bot_commands(&self) -> Vec<BotCommand> {
        self.order
            .iter()
            .filter_map(|name| self.handlers.get(name))
            .map(|handler| BotCommand::new(handler.name(), handler.description()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command string into command name and arguments
/// Example: "/startserver@mc_bot now" -> ("startserver", vec!["now"])
///
/// Commands addressed to another bot (`/name@other_bot`) yield `None`. With
/// no known `bot_username` every mention is accepted.
pub fn parse_command(
    text: &str,
    prefix: &str,
    bot_username: Option<&str>,
) -> Option<(String, Vec<String>)> {
    let text = text.trim();
    let without_prefix = text.strip_prefix(prefix)?;
    let mut parts = without_prefix.split_whitespace();

    // Group chats address commands as /name@botname
    let head = parts.next()?;
    let (name, mention) = match head.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (head, None),
    };
    if let (Some(mention), Some(me)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(me) {
            return None;
        }
    }

    let command = name.to_lowercase();
    if command.is_empty() {
        return None;
    }

    let args = parts.map(|s| s.to_string()).collect();

    Some((command, args))
}
