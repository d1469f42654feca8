use thiserror::Error;

use crate::{
    error::{compute::ComputeError, AppError},
    model::instance::InstanceStatus,
};

/// Outcomes of a slash command that are reported back to the Discord user.
///
/// The `Display` text of each variant is sent to the channel as-is.
#[derive(Error, Debug)]
pub enum ControlError {
    /// The `action` option was missing or not one of `start` / `stop`.
    #[error("Unknown subcommand.")]
    UnknownAction(Option<String>),

    /// The command was invoked outside of a guild, e.g. in a DM.
    #[error("This command can only be used in a server.")]
    NotInGuild,

    /// No instance location is stored for this guild and command.
    #[error("GCE configuration not found: no instance is configured for /{command_name}")]
    LocationNotFound {
        /// Slash command that was looked up
        command_name: String,
    },

    /// The instance location lookup itself failed.
    #[error("GCE configuration not found: {0}")]
    Lookup(#[source] AppError),

    /// The start request was rejected.
    #[error("Failed to launch: {0}")]
    Launch(#[source] ComputeError),

    /// The stop request was rejected.
    #[error("Failed to stop: {0}")]
    Stop(#[source] ComputeError),

    /// Fetching the instance status failed while waiting for a power state.
    #[error("Error while polling instance status: {0}")]
    Poll(#[source] ComputeError),

    /// The instance never reached the target state within the poll policy.
    #[error("Timeout: Instance did not reach status {target} within expected time.")]
    Timeout {
        /// Power state that was waited for
        target: InstanceStatus,
    },
}
