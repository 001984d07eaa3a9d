use actix::Addr;
use async_trait::async_trait;
use std::sync::Arc;

use super::{CommandHandler, CommandResult};
use crate::bot::reply::Reply;
use crate::session::{GetServerUptime, Session};
use crate::status::{HealthProbe, StatusColor};

/// Serverstatus command - session uptime plus a live health probe
pub struct ServerStatusCommand {
    session: Addr<Session>,
    probe: Arc<dyn HealthProbe>,
}

impl ServerStatusCommand {
    pub fn new(session: Addr<Session>, probe: Arc<dyn HealthProbe>) -> Self {
        Self { session, probe }
    }
}

#[async_trait]
impl CommandHandler for ServerStatusCommand {
    fn name(&self) -> &str {
        "serverstatus"
    }

    fn description(&self) -> &str {
        "server uptime"
    }

    async fn execute(&self, _args: Vec<String>) -> CommandResult {
        let uptime = match self.session.send(GetServerUptime).await {
            Ok(uptime) => uptime,
            Err(e) => return CommandResult::Error(format!("Session unavailable: {}", e)),
        };

        // One probe per command; code and color come from the same answer
        let outcome = self.probe.probe().await;
        let color = StatusColor::from_outcome(&outcome);

        CommandResult::Success(Reply::new(
            "Server Uptime",
            format!("Server Uptime: {}\nServer Status Code: {}", uptime, outcome),
            color,
        ))
    }
}
