//! Compute Engine instance factory for creating `instances.get` payloads.
//!
//! Payloads follow the shape of the Compute Engine v1 REST API closely enough
//! for deserialization tests, including fields the bot does not read.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for creating test instance JSON payloads.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::instance::InstanceFactory;
///
/// let instance = InstanceFactory::new()
///     .status("RUNNING")
///     .network_interface([None, Some("203.0.113.7")])
///     .build();
/// ```
pub struct InstanceFactory {
    id: u64,
    name: String,
    status: String,
    /// `None` keeps the default single interface with one external address.
    network_interfaces: Option<Vec<Vec<Option<String>>>>,
}

impl InstanceFactory {
    /// Creates a new InstanceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"instance-{id}"`
    /// - status: `"RUNNING"`
    /// - one network interface with a single access config whose NAT IP is
    ///   `"203.0.113.10"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("instance-{}", id),
            status: "RUNNING".to_string(),
            network_interfaces: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the API status label, e.g. `"TERMINATED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Adds a network interface with one access config per entry.
    ///
    /// `None` entries produce an access config without a `natIP` field. The
    /// first call replaces the default interface.
    pub fn network_interface<I, S>(mut self, nat_ips: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .push(nat_ips.into_iter().map(|ip| ip.map(Into::into)).collect());
        self
    }

    /// Removes every network interface from the payload.
    pub fn without_network_interfaces(mut self) -> Self {
        self.network_interfaces = Some(Vec::new());
        self
    }

    /// Builds the JSON payload.
    pub fn build(self) -> Value {
        let interfaces = self
            .network_interfaces
            .unwrap_or_else(|| vec![vec![Some("203.0.113.10".to_string())]]);

        let network_interfaces: Vec<Value> = interfaces
            .into_iter()
            .enumerate()
            .map(|(index, access_configs)| {
                let access_configs: Vec<Value> = access_configs
                    .into_iter()
                    .map(|nat_ip| match nat_ip {
                        Some(ip) => json!({
                            "kind": "compute#accessConfig",
                            "type": "ONE_TO_ONE_NAT",
                            "name": "External NAT",
                            "natIP": ip,
                        }),
                        None => json!({
                            "kind": "compute#accessConfig",
                            "type": "ONE_TO_ONE_NAT",
                            "name": "External NAT",
                        }),
                    })
                    .collect();

                json!({
                    "kind": "compute#networkInterface",
                    "name": format!("nic{}", index),
                    "networkIP": format!("10.146.0.{}", index + 2),
                    "accessConfigs": access_configs,
                })
            })
            .collect();

        json!({
            "kind": "compute#instance",
            "id": self.id.to_string(),
            "name": self.name,
            "status": self.status,
            "machineType": "zones/asia-northeast1-b/machineTypes/e2-medium",
            "networkInterfaces": network_interfaces,
        })
    }
}

impl Default for InstanceFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an instance payload with the given status and default networking.
pub fn create_instance(status: &str) -> Value {
    InstanceFactory::new().status(status).build()
}
