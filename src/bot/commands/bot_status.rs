use actix::Addr;
use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::bot::reply::Reply;
use crate::session::{GetBotUptime, Session};
use crate::status::StatusColor;

/// Botstatus command - reports how long the bot has been up
pub struct BotStatusCommand {
    session: Addr<Session>,
}

impl BotStatusCommand {
    pub fn new(session: Addr<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommandHandler for BotStatusCommand {
    fn name(&self) -> &str {
        "botstatus"
    }

    fn description(&self) -> &str {
        "bot uptime"
    }

    async fn execute(&self, _args: Vec<String>) -> CommandResult {
        match self.session.send(GetBotUptime).await {
            Ok(uptime) => CommandResult::Success(Reply::new(
                "Bot Uptime",
                format!("Bot Uptime: {}", uptime),
                StatusColor::Success,
            )),
            Err(e) => CommandResult::Error(format!("Session unavailable: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix::Actor;

    #[actix_rt::test]
    async fn test_bot_status_reply() {
        let command = BotStatusCommand::new(Session::new().start());

        match command.execute(vec![]).await {
            CommandResult::Success(reply) => {
                assert_eq!(reply.title, "Bot Uptime");
                assert!(reply.description.starts_with("Bot Uptime: 00:00:0"));
                assert_eq!(reply.color, StatusColor::Success);
            }
            CommandResult::Error(e) => panic!("unexpected error: {}", e),
        }
    }
}
