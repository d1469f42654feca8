//! Error types for the server manager.
//!
//! `AppError` is the top-level error returned from start-up and from the data
//! layer. Failures a Discord user can observe are modelled separately by
//! `ControlError`, whose `Display` output is the exact text sent back to the
//! channel.

pub mod compute;
pub mod config;
pub mod control;
pub mod internal;

use thiserror::Error;

use crate::error::{compute::ComputeError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so start-up and
/// repository code can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from the MongoDB driver.
    #[error(transparent)]
    DbErr(#[from] mongodb::error::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Compute Engine client construction or request error.
    #[error(transparent)]
    ComputeErr(#[from] ComputeError),

    /// Unexpected data that indicates a bug or a malformed stored document.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
