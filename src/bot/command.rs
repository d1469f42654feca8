//! Slash command definitions and registration.

use serenity::all::{
    Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId,
};

use crate::{
    error::AppError,
    model::command::{ACTION_OPTION, PING_COMMAND},
};

/// Server command controlling the Minecraft instance.
pub const MINECRAFT_COMMAND: &str = "mc";

/// Builds every slash command the bot answers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(PING_COMMAND).description("Ping pong!"),
        server_command(MINECRAFT_COMMAND, "Minecraft server control"),
    ]
}

/// A command taking a required `action` option with `start`/`stop` choices.
fn server_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name).description(description).add_option(
        CreateCommandOption::new(CommandOptionType::String, ACTION_OPTION, "start or stop")
            .required(true)
            .add_string_choice("start", "start")
            .add_string_choice("stop", "stop"),
    )
}

/// Registers the slash commands, replacing any previously registered set.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `guild` - Register to this guild only; `None` registers globally
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError::DiscordErr)` - Registration rejected by Discord
pub async fn register(ctx: &Context, guild: Option<GuildId>) -> Result<usize, AppError> {
    let commands = match guild {
        Some(guild_id) => guild_id.set_commands(&ctx.http, definitions()).await?,
        None => Command::set_global_commands(&ctx.http, definitions()).await?,
    };

    Ok(commands.len())
}
