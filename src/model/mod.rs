//! Domain models shared between the bot, service, and data layers.
//!
//! Stored documents live in the `entity` crate; the types here are what the
//! rest of the application works with after conversion at the repository
//! boundary.

pub mod command;
pub mod instance;
pub mod location;
