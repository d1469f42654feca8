//! Shared state handed to the Discord event handler.
//!
//! Every field is cheap to clone: the repository wraps a MongoDB collection
//! handle and the compute client shares its reqwest client and token cache,
//! so each background power job gets its own copy.

use mongodb::Database;

use crate::{
    config::Config,
    data::instance_location::InstanceLocationRepository,
    service::{compute::ComputeClient, instance::PollPolicy},
};

#[derive(Clone)]
pub struct AppState {
    /// Instance location lookups.
    pub locations: InstanceLocationRepository,

    /// Compute Engine client used by power jobs.
    pub compute: ComputeClient,

    /// Polling policy applied after start and stop requests.
    pub poll_policy: PollPolicy,
}

impl AppState {
    /// Creates the state once all clients have been constructed.
    ///
    /// # Arguments
    /// - `db` - Connected MongoDB database
    /// - `config` - Application configuration, for the collection name and poll policy
    /// - `compute` - Compute Engine client
    pub fn new(db: &Database, config: &Config, compute: ComputeClient) -> Self {
        Self {
            locations: InstanceLocationRepository::new(db, &config.mongodb_collection),
            compute,
            poll_policy: config.poll_policy,
        }
    }
}
