use actix::prelude::*;

use crate::session::messages::{GetBotUptime, GetServerUptime, StartServer, StopServer};
use crate::session::state::SessionState;

/// Single owner of the session state. Commands arrive concurrently from the
/// dispatcher and are serialized through this actor's mailbox.
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Session {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("Session actor started");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!(
            "Session actor stopped (server running: {})",
            self.state.is_running()
        );
    }
}

impl Handler<StartServer> for Session {
    type Result = MessageResult<StartServer>;

    fn handle(&mut self, _msg: StartServer, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.start_server().to_string())
    }
}

impl Handler<StopServer> for Session {
    type Result = MessageResult<StopServer>;

    fn handle(&mut self, _msg: StopServer, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.stop_server().to_string())
    }
}

impl Handler<GetServerUptime> for Session {
    type Result = MessageResult<GetServerUptime>;

    fn handle(&mut self, _msg: GetServerUptime, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.server_uptime())
    }
}

impl Handler<GetBotUptime> for Session {
    type Result = MessageResult<GetBotUptime>;

    fn handle(&mut self, _msg: GetBotUptime, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.bot_uptime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::{SERVER_DOWN, SERVER_STARTING, SERVER_STOPPING};

    #[actix_rt::test]
    async fn test_start_stop_through_mailbox() {
        let session = Session::new().start();

        assert_eq!(session.send(GetServerUptime).await.unwrap(), SERVER_DOWN);

        assert_eq!(session.send(StartServer).await.unwrap(), SERVER_STARTING);
        let uptime = session.send(GetServerUptime).await.unwrap();
        assert!(uptime.starts_with("00:00:0"), "unexpected uptime {}", uptime);

        assert_eq!(session.send(StopServer).await.unwrap(), SERVER_STOPPING);
        assert_eq!(session.send(GetServerUptime).await.unwrap(), SERVER_DOWN);
    }

    #[actix_rt::test]
    async fn test_bot_uptime_through_mailbox() {
        let session = Session::new().start();
        let uptime = session.send(GetBotUptime).await.unwrap();
        assert!(uptime.starts_with("00:00:0"), "unexpected uptime {}", uptime);
    }

    #[actix_rt::test]
    async fn test_concurrent_commands_are_serialized() {
        let session = Session::new().start();

        let starts: Vec<_> = (0..16).map(|_| session.send(StartServer)).collect();
        for reply in collect_replies(starts).await {
            assert_eq!(reply, SERVER_STARTING);
        }

        assert_ne!(session.send(GetServerUptime).await.unwrap(), SERVER_DOWN);
    }

    async fn collect_replies<F, T>(requests: Vec<F>) -> Vec<T>
    where
        F: std::future::Future<Output = Result<T, MailboxError>>,
    {
        let mut out = Vec::with_capacity(requests.len());
        for request in requests {
            out.push(request.await.unwrap());
        }
        out
    }
}
