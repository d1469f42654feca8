//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Slash
//! commands are (re)registered here so that definition changes take effect on
//! the next restart.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot stays connected and keeps
/// answering any commands registered previously.
///
/// # Arguments
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
/// - `command_guild` - Guild to register commands to, `None` for global
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match command::register(&ctx, command_guild).await {
        Ok(count) => match command_guild {
            Some(guild_id) => {
                tracing::info!("Registered {} commands in guild {}", count, guild_id)
            }
            None => tracing::info!("Registered {} global commands", count),
        },
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
