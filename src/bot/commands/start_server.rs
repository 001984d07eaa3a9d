use actix::Addr;
use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::bot::reply::Reply;
use crate::session::{Session, StartServer};
use crate::status::StatusColor;

/// Startserver command - marks the server session as running
pub struct StartServerCommand {
    session: Addr<Session>,
}

impl StartServerCommand {
    pub fn new(session: Addr<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommandHandler for StartServerCommand {
    fn name(&self) -> &str {
        "startserver"
    }

    fn description(&self) -> &str {
        "starts the minecraft server"
    }

    async fn execute(&self, _args: Vec<String>) -> CommandResult {
        match self.session.send(StartServer).await {
            Ok(confirmation) => {
                tracing::info!("Server start requested");
                CommandResult::Success(Reply::new(
                    "Server Start",
                    confirmation,
                    StatusColor::Success,
                ))
            }
            Err(e) => CommandResult::Error(format!("Session unavailable: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GetServerUptime;
    use actix::Actor;

    #[actix_rt::test]
    async fn test_start_server_reply() {
        let session = Session::new().start();
        let command = StartServerCommand::new(session.clone());

        match command.execute(vec![]).await {
            CommandResult::Success(reply) => {
                assert_eq!(reply.title, "Server Start");
                assert_eq!(reply.description, "Starting Server...");
                assert_eq!(reply.color, StatusColor::Success);
            }
            CommandResult::Error(e) => panic!("unexpected error: {}", e),
        }

        let uptime = session.send(GetServerUptime).await.unwrap();
        assert!(uptime.starts_with("00:00:0"), "unexpected uptime {}", uptime);
    }
}
