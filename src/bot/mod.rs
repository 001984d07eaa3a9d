pub mod commands;
pub mod reply;
pub mod telegram;

pub use commands::{parse_command, CommandHandler, CommandRegistry, CommandResult};
pub use reply::Reply;
pub use telegram::{refresh_commands, register_commands, run_bot_loop, Outgoing, Router};
