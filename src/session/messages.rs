use actix::prelude::*;

/// Mark the managed server as running; replies with the confirmation text
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "String")]
pub struct StartServer;

/// Mark the managed server as stopped; replies with the confirmation text
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "String")]
pub struct StopServer;

/// Formatted server uptime, or the "down" message when not running
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "String")]
pub struct GetServerUptime;

/// Formatted time since the bot came up
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "String")]
pub struct GetBotUptime;
