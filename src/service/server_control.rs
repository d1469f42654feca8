//! Slash command dispatch for server power control.
//!
//! Dispatch is split in two so the Discord handler can acknowledge quickly:
//! `ServerControlService::handle` decides the immediate reply and, for start
//! and stop, hands back a `PowerJob` that is run in the background and whose
//! result replaces the acknowledgement.

use crate::{
    data::instance_location::InstanceLocationStore,
    error::control::ControlError,
    model::{
        command::{CommandRequest, PowerAction, PING_COMMAND},
        location::InstanceLocation,
    },
    service::{
        compute::InstanceApi,
        instance::{InstanceController, PollPolicy},
    },
};

pub const PONG_MESSAGE: &str = "Pong!";

/// What to send back for a slash command.
#[derive(Debug)]
pub enum CommandReply {
    /// Final reply, nothing else to do.
    Immediate(String),
    /// Acknowledge now, then run `job` and edit the reply with its result.
    Deferred {
        acknowledgement: String,
        job: PowerJob,
    },
}

pub struct ServerControlService<'a, S: InstanceLocationStore> {
    store: &'a S,
}

impl<'a, S: InstanceLocationStore> ServerControlService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Decides the reply for a command.
    ///
    /// `/ping` and every failure are answered immediately; a valid start or
    /// stop for a configured instance is deferred. Neither path contacts the
    /// Compute Engine API.
    pub async fn handle(&self, request: &CommandRequest) -> CommandReply {
        if request.name == PING_COMMAND {
            return CommandReply::Immediate(PONG_MESSAGE.to_string());
        }

        match self.prepare(request).await {
            Ok(job) => CommandReply::Deferred {
                acknowledgement: job.acknowledgement(),
                job,
            },
            Err(e) => {
                tracing::debug!("Rejected /{}: {:?}", request.name, e);
                CommandReply::Immediate(e.to_string())
            }
        }
    }

    /// Resolves a command into a power job.
    ///
    /// The action is validated before the datastore is queried, so unknown
    /// actions never reach it.
    ///
    /// # Returns
    /// - `Ok(PowerJob)` - Valid action and a location is configured
    /// - `Err(ControlError::UnknownAction)` - Missing or unrecognised `action`
    /// - `Err(ControlError::NotInGuild)` - Used outside of a guild
    /// - `Err(ControlError::LocationNotFound)` - Nothing configured for this guild and command
    /// - `Err(ControlError::Lookup)` - Datastore error
    pub async fn prepare(&self, request: &CommandRequest) -> Result<PowerJob, ControlError> {
        let action = request
            .power_action()
            .ok_or_else(|| ControlError::UnknownAction(request.action.clone()))?;

        let guild_id = request.guild_id.ok_or(ControlError::NotInGuild)?;

        let location = self
            .store
            .find(guild_id, &request.name)
            .await
            .map_err(ControlError::Lookup)?
            .ok_or_else(|| ControlError::LocationNotFound {
                command_name: request.name.clone(),
            })?;

        Ok(PowerJob {
            action,
            command_name: request.name.clone(),
            location,
        })
    }
}

/// A start or stop of one instance, requested by one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerJob {
    pub action: PowerAction,
    pub command_name: String,
    pub location: InstanceLocation,
}

impl PowerJob {
    /// Message shown while the job runs.
    pub fn acknowledgement(&self) -> String {
        match self.action {
            PowerAction::Start => format!("Starting a {} server...", self.command_name),
            PowerAction::Stop => format!("Stopping a {} server...", self.command_name),
        }
    }

    /// Runs the job to completion and returns the message for the user.
    ///
    /// A start reports the outcome followed by the external IP on a second
    /// line; the IP is looked up even when the start failed.
    pub async fn run<A: InstanceApi>(&self, api: &A, policy: PollPolicy) -> String {
        let controller = InstanceController::new(api, &self.location, policy);

        match self.action {
            PowerAction::Start => {
                let result = outcome_message(controller.start().await);
                let ip = match controller.external_ip().await {
                    Ok(ip) => ip.to_string(),
                    Err(e) => format!("Error: {}", e),
                };

                format!("{}\n{}", result, ip)
            }
            PowerAction::Stop => outcome_message(controller.stop().await),
        }
    }
}

fn outcome_message(result: Result<&'static str, ControlError>) -> String {
    match result {
        Ok(message) => message.to_string(),
        Err(e) => {
            tracing::warn!("{}", e);
            e.to_string()
        }
    }
}
