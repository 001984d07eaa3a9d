use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::bot::reply::Reply;
use crate::status::StatusColor;

/// Scaleserver command - acknowledges only, no scaling happens
pub struct ScaleServerCommand;

#[async_trait]
impl CommandHandler for ScaleServerCommand {
    fn name(&self) -> &str {
        "scaleserver"
    }

    fn description(&self) -> &str {
        "scales the minecraft server | default is auto"
    }

    async fn execute(&self, _args: Vec<String>) -> CommandResult {
        tracing::debug!("Executing scaleserver command");
        CommandResult::Success(Reply::new(
            "Server Scale",
            "Scaling server...",
            StatusColor::Info,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scale_server_is_static() {
        match ScaleServerCommand.execute(vec!["3".to_string()]).await {
            CommandResult::Success(reply) => {
                assert_eq!(reply.title, "Server Scale");
                assert_eq!(reply.description, "Scaling server...");
                assert_eq!(reply.color.value(), 0xADD8E6);
            }
            CommandResult::Error(e) => panic!("unexpected error: {}", e),
        }
    }
}
