//! Instance location factory for creating stored location documents.

use crate::factory::helpers::next_id;

/// Factory for creating test instance location documents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::instance_location::InstanceLocationFactory;
///
/// let location = InstanceLocationFactory::new()
///     .guild_id("987654321")
///     .command_name("mc")
///     .instance_name("minecraft")
///     .build();
/// ```
pub struct InstanceLocationFactory {
    guild_id: String,
    command_name: String,
    project: String,
    zone: String,
    instance_name: String,
}

impl InstanceLocationFactory {
    /// Creates a new InstanceLocationFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - command_name: `"mc"`
    /// - project: `"project-{id}"`
    /// - zone: `"asia-northeast1-b"`
    /// - instance_name: `"instance-{id}"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            guild_id: id.to_string(),
            command_name: "mc".to_string(),
            project: format!("project-{}", id),
            zone: "asia-northeast1-b".to_string(),
            instance_name: format!("instance-{}", id),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn command_name(mut self, command_name: impl Into<String>) -> Self {
        self.command_name = command_name.into();
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    pub fn instance_name(mut self, instance_name: impl Into<String>) -> Self {
        self.instance_name = instance_name.into();
        self
    }

    /// Builds the document.
    ///
    /// # Returns
    /// - `entity::instance_location::Model` - The configured document
    pub fn build(self) -> entity::instance_location::Model {
        entity::instance_location::Model {
            guild_id: self.guild_id,
            command_name: self.command_name,
            project: self.project,
            zone: self.zone,
            instance_name: self.instance_name,
        }
    }
}

impl Default for InstanceLocationFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an instance location document with default values.
///
/// Shorthand for `InstanceLocationFactory::new().build()`.
pub fn create_location() -> entity::instance_location::Model {
    InstanceLocationFactory::new().build()
}
