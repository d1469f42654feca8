use serde::{Deserialize, Serialize};

/// Name of the collection holding instance location documents.
pub const COLLECTION: &str = "gce_configs";

/// Maps a guild's slash command to the Compute Engine instance it controls.
///
/// Documents are keyed by `(guild_id, command_name)`. The key is expected to be
/// unique; uniqueness is the datastore's concern, lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Discord guild ID, stored as a decimal string.
    pub guild_id: String,
    /// Slash command name without the leading `/`.
    pub command_name: String,
    /// Google Cloud project ID.
    pub project: String,
    /// Compute Engine zone, e.g. `asia-northeast1-b`.
    pub zone: String,
    /// Compute Engine instance name.
    pub instance_name: String,
}

