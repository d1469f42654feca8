//! Compute Engine API access.
//!
//! `InstanceApi` is the seam the instance controller is written against;
//! `ComputeClient` implements it over the v1 REST API using reqwest.

pub mod client;
pub mod token;

use async_trait::async_trait;

use crate::{
    error::compute::ComputeError,
    model::{instance::Instance, location::InstanceLocation},
};

pub use client::ComputeClient;

/// Instance operations used by the bot.
#[async_trait]
pub trait InstanceApi: Send + Sync {
    /// Fetches the instance resource.
    async fn get(&self, location: &InstanceLocation) -> Result<Instance, ComputeError>;

    /// Requests the instance to start. Returns once the request is accepted,
    /// not when the instance is running.
    async fn start(&self, location: &InstanceLocation) -> Result<(), ComputeError>;

    /// Requests the instance to stop. Returns once the request is accepted.
    async fn stop(&self, location: &InstanceLocation) -> Result<(), ComputeError>;
}

#[cfg(test)]
mod test;
