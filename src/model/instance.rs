//! Compute Engine instance resource as returned by `instances.get`.
//!
//! Only the fields the bot reads are modelled; everything else in the API
//! response is ignored during deserialization.

use serde::Deserialize;

/// Power state of a Compute Engine instance.
///
/// Serialized as the API's upper-case label. Labels added by the API in the
/// future deserialize as `Unknown` rather than failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Provisioning,
    Staging,
    Running,
    Stopping,
    Stopped,
    Suspending,
    Suspended,
    Repairing,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioning => "PROVISIONING",
            Self::Staging => "STAGING",
            Self::Running => "RUNNING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Suspending => "SUSPENDING",
            Self::Suspended => "SUSPENDED",
            Self::Repairing => "REPAIRING",
            Self::Terminated => "TERMINATED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub status: InstanceStatus,
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(default)]
    pub access_configs: Vec<AccessConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    #[serde(rename = "natIP")]
    pub nat_ip: Option<String>,
}

/// Result of looking for an instance's external address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalIp {
    Address(String),
    NoNetworkInterfaces,
    NoExternalIp,
}

impl std::fmt::Display for ExternalIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Address(ip) => f.write_str(ip),
            Self::NoNetworkInterfaces => f.write_str("No network interfaces"),
            Self::NoExternalIp => f.write_str("No external IP"),
        }
    }
}

impl Instance {
    /// Returns the first non-empty NAT IP across all interfaces, in API order.
    pub fn external_ip(&self) -> ExternalIp {
        if self.network_interfaces.is_empty() {
            return ExternalIp::NoNetworkInterfaces;
        }

        self.network_interfaces
            .iter()
            .flat_map(|iface| iface.access_configs.iter())
            .filter_map(|ac| ac.nat_ip.as_deref())
            .find(|ip| !ip.is_empty())
            .map(|ip| ExternalIp::Address(ip.to_string()))
            .unwrap_or(ExternalIp::NoExternalIp)
    }
}
