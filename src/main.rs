use actix::Actor;
use anyhow::Context as _;
use mc_chatops::{
    bot::{refresh_commands, register_commands, run_bot_loop, CommandRegistry, Router},
    config::BotConfig,
    logging::init_logging,
    session::Session,
    status::HttpProbe,
};
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    tracing::info!("🤖 Starting MC chatops bot...");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config = load_config(&args)?;
    let config = Arc::new(config);

    let probe = HttpProbe::new(&config.server).context("Cannot build health probe")?;
    tracing::info!("Health checks go to {}", probe.url());

    // Session state lives in one actor; handlers only hold its address
    let session = Session::new().start();
    let registry = CommandRegistry::with_defaults(session, Arc::new(probe));

    tracing::info!("Connecting to Telegram bot...");
    let bot = Bot::new(&config.bot.token);

    let me = bot
        .get_me()
        .await
        .context("Invalid bot parameters | Check the .env")?;
    let bot_username = me.username.clone().unwrap_or_else(|| "unknown".to_string());
    tracing::info!("Logged in as: @{}", bot_username);

    let mut router = Router::new(registry, config.clone());
    if let Some(username) = me.username.clone() {
        router = router.with_bot_username(username);
    }

    register_commands(&bot, &router)
        .await
        .context("Cannot register commands")?;

    tracing::info!(
        "💡 Available commands: {}",
        router.registry().list_commands().join(", ")
    );
    tracing::info!("Press Ctrl+C to exit");

    run_bot_loop(bot.clone(), router.clone()).await;

    refresh_commands(&bot, &router)
        .await
        .context("Cannot refresh commands")?;

    tracing::info!("Gracefully shutting down.");
    Ok(())
}

fn load_config(args: &[String]) -> anyhow::Result<BotConfig> {
    let config_path = arg_value(args, "--config=")
        .map(PathBuf::from)
        .or_else(|| std::env::var("CHATOPS_CONFIG").ok().map(PathBuf::from));

    let mut config = BotConfig::from_env(config_path)?;

    if let Some(token) = arg_value(args, "--token=") {
        config.bot.token = token;
    }

    config.validate()?;
    Ok(config)
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(flag))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
