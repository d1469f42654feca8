use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};

use crate::{error::AppError, model::location::InstanceLocation};

/// Point lookup of the instance a guild's command controls.
///
/// Implemented by `InstanceLocationRepository` against MongoDB; command
/// dispatch depends only on this trait.
#[async_trait]
pub trait InstanceLocationStore: Send + Sync {
    /// Finds the location registered for a guild and command.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `command_name` - Slash command name without the leading `/`
    ///
    /// # Returns
    /// - `Ok(Some(InstanceLocation))` - Location found
    /// - `Ok(None)` - Nothing registered for this guild and command
    /// - `Err(AppError)` - Datastore error or malformed stored document
    async fn find(
        &self,
        guild_id: u64,
        command_name: &str,
    ) -> Result<Option<InstanceLocation>, AppError>;
}

#[derive(Clone)]
pub struct InstanceLocationRepository {
    collection: Collection<entity::instance_location::Model>,
}

impl InstanceLocationRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl InstanceLocationStore for InstanceLocationRepository {
    async fn find(
        &self,
        guild_id: u64,
        command_name: &str,
    ) -> Result<Option<InstanceLocation>, AppError> {
        let document = self
            .collection
            .find_one(location_filter(guild_id, command_name), None)
            .await?;

        Ok(document.map(InstanceLocation::from_entity).transpose()?)
    }
}

/// Equality filter on the `(guild_id, command_name)` key.
///
/// Guild IDs are stored as decimal strings.
pub fn location_filter(guild_id: u64, command_name: &str) -> Document {
    doc! {
        "guild_id": guild_id.to_string(),
        "command_name": command_name,
    }
}
