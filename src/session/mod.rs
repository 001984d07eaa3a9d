pub mod actor;
pub mod messages;
pub mod state;

pub use actor::Session;
pub use messages::{GetBotUptime, GetServerUptime, StartServer, StopServer};
pub use state::{format_uptime, ServerSession, SessionState};
