use crate::error::internal::InternalError;

/// Coordinates of the Compute Engine instance controlled by a guild's command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLocation {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Slash command name the location is registered under.
    pub command_name: String,
    /// Google Cloud project ID.
    pub project: String,
    /// Compute Engine zone.
    pub zone: String,
    /// Compute Engine instance name.
    pub instance_name: String,
}

impl InstanceLocation {
    /// Converts a stored document to a domain model at the repository boundary.
    ///
    /// Parses the string guild_id from the database into u64 for type-safe
    /// usage in the service layer.
    ///
    /// # Arguments
    /// - `entity` - The stored document to convert
    ///
    /// # Returns
    /// - `Ok(InstanceLocation)` - Successfully converted domain model
    /// - `Err(InternalError::ParseStringId)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::instance_location::Model) -> Result<Self, InternalError> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| InternalError::ParseStringId {
                value: entity.guild_id.clone(),
                source: e,
            })?;

        Ok(Self {
            guild_id,
            command_name: entity.command_name,
            project: entity.project,
            zone: entity.zone,
            instance_name: entity.instance_name,
        })
    }
}

impl std::fmt::Display for InstanceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.zone, self.instance_name)
    }
}
