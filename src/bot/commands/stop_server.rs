use actix::Addr;
use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::bot::reply::Reply;
use crate::session::{Session, StopServer};
use crate::status::StatusColor;

const STOP_REPLY: &str = "Stopping server...";

/// Stopserver command - marks the server session as stopped
pub struct StopServerCommand {
    session: Addr<Session>,
}

impl StopServerCommand {
    pub fn new(session: Addr<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommandHandler for StopServerCommand {
    fn name(&self) -> &str {
        "stopserver"
    }

    fn description(&self) -> &str {
        "stops the minecraft server"
    }

    async fn execute(&self, _args: Vec<String>) -> CommandResult {
        match self.session.send(StopServer).await {
            Ok(confirmation) => {
                tracing::info!("Server stop requested: {}", confirmation);
                CommandResult::Success(Reply::new(
                    "Server Stop",
                    STOP_REPLY,
                    StatusColor::Failure,
                ))
            }
            Err(e) => CommandResult::Error(format!("Session unavailable: {}", e)),
        }
    }
}
