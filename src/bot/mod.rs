//! Discord bot integration for server power control.
//!
//! The bot registers the slash commands when it becomes ready and answers
//! interactions. Start and stop requests are acknowledged straight away; the
//! power job then runs in its own tokio task and edits the original response
//! with the outcome once the instance reaches its target state.
//!
//! # Gateway Intents
//!
//! Slash command interactions are delivered regardless of intents, so the bot
//! only requests `GUILDS`. No privileged intents are needed.

pub mod command;
pub mod handler;
pub mod start;
