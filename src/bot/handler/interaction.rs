//! Slash command interaction handler.
//!
//! Converts the serenity interaction into a `CommandRequest`, lets
//! `ServerControlService` decide the reply, and for start/stop spawns the
//! power job that later edits the response.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{
    model::command::CommandRequest,
    service::server_control::{CommandReply, ServerControlService},
    state::AppState,
};

/// Handles the interaction_create event.
///
/// Only application commands are handled; components, autocomplete and modals
/// are ignored.
///
/// # Arguments
/// - `state` - Shared state with the location repository and compute client
/// - `ctx` - Discord context for responding
/// - `interaction` - The received interaction
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let request = CommandRequest::from_options(
        command.data.name.clone(),
        command.guild_id.map(|id| id.get()),
        command
            .data
            .options
            .iter()
            .map(|option| (option.name.as_str(), option.value.as_str())),
    );

    tracing::debug!(
        "Command /{} from {} in guild {:?} (action: {:?})",
        request.name,
        command.user.name,
        request.guild_id,
        request.action
    );

    let service = ServerControlService::new(&state.locations);

    match service.handle(&request).await {
        CommandReply::Immediate(content) => {
            respond(&ctx, &command, content).await;
        }
        CommandReply::Deferred {
            acknowledgement,
            job,
        } => {
            // Without an acknowledgement there is no response to edit later.
            if !respond(&ctx, &command, acknowledgement).await {
                return;
            }

            let http = ctx.http.clone();
            let compute = state.compute.clone();
            let policy = state.poll_policy;

            tokio::spawn(async move {
                let content = job.run(&compute, policy).await;

                tracing::info!(
                    "/{} {} on {} finished: {}",
                    job.command_name,
                    job.action.as_str(),
                    job.location,
                    content.replace('\n', " | ")
                );

                if let Err(e) = command
                    .edit_response(&http, EditInteractionResponse::new().content(content))
                    .await
                {
                    tracing::error!(
                        "Failed to edit response for /{}: {:?}",
                        job.command_name,
                        e
                    );
                }
            });
        }
    }
}

/// Sends the initial response to a command.
///
/// # Returns
/// - `true` if Discord accepted the response
async fn respond(ctx: &Context, command: &CommandInteraction, content: String) -> bool {
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));

    match command.create_response(&ctx.http, response).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
            false
        }
    }
}
