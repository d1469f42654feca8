use serenity::all::{Client, GatewayIntents, GuildId};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Starts the Discord bot in a blocking manner
///
/// Builds the serenity client with the event handler and runs it until the
/// gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and command scope
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state, config.discord_guild_id.map(GuildId::new));

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
