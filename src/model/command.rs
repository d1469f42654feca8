use std::str::FromStr;

/// Name of the option carrying the power action on server commands.
pub const ACTION_OPTION: &str = "action";

/// Name of the health-check command.
pub const PING_COMMAND: &str = "ping";

/// Power action requested through a server command's `action` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
}

impl PowerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl FromStr for PowerAction {
    type Err = ();

    /// Parses an action case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            _ => Err(()),
        }
    }
}

/// A slash command invocation reduced to what the dispatcher needs.
///
/// Built from a serenity `CommandInteraction` by the bot layer so that command
/// dispatch can be exercised without a gateway connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Invoked command name.
    pub name: String,
    /// Guild the command was used in, `None` for DMs.
    pub guild_id: Option<u64>,
    /// Raw string value of the `action` option, if provided.
    pub action: Option<String>,
}

impl CommandRequest {
    /// Builds a request from the command's options.
    ///
    /// Options other than `action`, and non-string values, are ignored. When
    /// `action` occurs more than once the last occurrence wins.
    ///
    /// # Arguments
    /// - `name` - Invoked command name
    /// - `guild_id` - Guild the command was used in
    /// - `options` - `(option name, string value)` pairs
    pub fn from_options<'o, I>(name: impl Into<String>, guild_id: Option<u64>, options: I) -> Self
    where
        I: IntoIterator<Item = (&'o str, Option<&'o str>)>,
    {
        let action = options
            .into_iter()
            .filter(|(option_name, _)| *option_name == ACTION_OPTION)
            .filter_map(|(_, value)| value)
            .last()
            .map(str::to_string);

        Self {
            name: name.into(),
            guild_id,
            action,
        }
    }

    /// Parsed power action, `None` when missing or unrecognised.
    pub fn power_action(&self) -> Option<PowerAction> {
        self.action.as_deref().and_then(|a| a.parse().ok())
    }
}
