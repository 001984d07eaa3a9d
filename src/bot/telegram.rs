use std::sync::Arc;
use teloxide::payloads::{
    DeleteMyCommandsSetters, GetMyCommandsSetters, SendMessageSetters, SetMyCommandsSetters,
};
use teloxide::prelude::*;
use teloxide::RequestError;
use teloxide::types::{BotCommandScope, Message as TelegramMessage, ParseMode, Recipient};

use crate::bot::commands::{parse_command, CommandRegistry, CommandResult};
use crate::config::BotConfig;

/// What the bot sends back for an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Html(String),
    Text(String),
}

/// Routes inbound text to the registered commands
#[derive(Clone)]
pub struct Router {
    registry: CommandRegistry,
    config: Arc<BotConfig>,
    bot_username: Option<String>,
}

impl Router {
    pub fn new(registry: CommandRegistry, config: Arc<BotConfig>) -> Self {
        Self {
            registry,
            config,
            bot_username: None,
        }
    }

    /// Only answer `/name@botname` commands that mention this bot
    pub fn with_bot_username(mut self, bot_username: impl Into<String>) -> Self {
        self.bot_username = Some(bot_username.into());
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Scope the command list is registered in: the configured chat, or
    /// every chat when none is set
    pub fn scope(&self) -> BotCommandScope {
        match self.config.bot.guild_id {
            Some(id) => BotCommandScope::Chat {
                chat_id: Recipient::Id(ChatId(id)),
            },
            None => BotCommandScope::Default,
        }
    }

    /// Decide the reply for `text` received in `chat_id`. `None` means stay
    /// silent.
    pub async fn respond(&self, text: &str, chat_id: i64, private: bool) -> Option<Outgoing> {
        if let Some(guild_id) = self.config.bot.guild_id {
            if guild_id != chat_id {
                tracing::debug!("Ignoring message from chat {} outside scope", chat_id);
                return None;
            }
        }

        let prefix = &self.config.commands.prefix;
        if text.trim_start().starts_with(prefix.as_str()) {
            let parsed = parse_command(text, prefix, self.bot_username.as_deref());
            let Some((command, args)) = parsed else {
                tracing::debug!("Ignoring command not addressed to this bot: {}", text);
                return None;
            };
            return Some(self.run(command, args).await);
        }

        if !private {
            return None;
        }

        // Not a command, send help
        let response = format!(
            "Available commands:\n{}",
            self.registry
                .list_commands()
                .iter()
                .filter_map(|c| self.registry.get_help(c))
                .map(|help| format!("{}{}", prefix, help))
                .collect::<Vec<_>>()
                .join("\n")
        );
        Some(Outgoing::Text(response))
    }

    async fn run(&self, command: String, args: Vec<String>) -> Outgoing {
        if !self.registry.has_command(&command) || !self.config.is_command_allowed(&command) {
            return Outgoing::Text(format!("❌ Unknown command: {}", command));
        }

        tracing::info!("🎯 Executing command: {} {:?}", command, args);

        match self.registry.execute(&command, args).await {
            Some(CommandResult::Success(reply)) => Outgoing::Html(reply.to_html()),
            Some(CommandResult::Error(err)) => {
                tracing::error!("Command '{}' failed: {}", command, err);
                Outgoing::Text(format!("❌ Error: {}", err))
            }
            None => Outgoing::Text("❌ Unknown command".to_string()),
        }
    }
}

/// Replace whatever command list is registered in the router's scope with
/// the current one
pub async fn register_commands(bot: &Bot, router: &Router) -> Result<(), RequestError> {
    let scope = router.scope();

    // Clean up ALL old commands before re-registering
    let existing = bot.get_my_commands().scope(scope.clone()).await?;
    if !existing.is_empty() {
        match bot.delete_my_commands().scope(scope.clone()).await {
            Ok(_) => {
                for cmd in &existing {
                    tracing::info!("Deleted old command: {}", cmd.command);
                }
            }
            Err(e) => tracing::warn!("Failed to delete old commands: {}", e),
        }
    }

    tracing::info!("Adding commands...");
    bot.set_my_commands(router.registry.bot_commands())
        .scope(scope)
        .await?;

    Ok(())
}

/// Overwrite the registered list once more on the way out
pub async fn refresh_commands(bot: &Bot, router: &Router) -> Result<(), RequestError> {
    tracing::info!("Refreshing commands...");
    bot.set_my_commands(router.registry.bot_commands())
        .scope(router.scope())
        .await?;
    Ok(())
}

/// Dispatch updates until Ctrl+C
pub async fn run_bot_loop(bot: Bot, router: Router) {
    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_message(bot: Bot, msg: TelegramMessage, router: Router) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    tracing::info!("📨 Received from chat {}: {}", msg.chat.id, text);

    let sent = match router
        .respond(text, msg.chat.id.0, msg.chat.is_private())
        .await
    {
        Some(Outgoing::Html(body)) => {
            bot.send_message(msg.chat.id, body)
                .parse_mode(ParseMode::Html)
                .await
        }
        Some(Outgoing::Text(body)) => bot.send_message(msg.chat.id, body).await,
        None => return Ok(()),
    };

    if let Err(e) = sent {
        tracing::error!("Error handling message: {}", e);
    }

    respond(())
}
