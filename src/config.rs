use std::{num::NonZeroU64, time::Duration};

use crate::{error::config::ConfigError, service::instance::PollPolicy};

const DEFAULT_DATABASE: &str = "servermanager";
const DEFAULT_COMPUTE_API_URL: &str = "https://compute.googleapis.com/compute/v1/";
const DEFAULT_METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

pub struct Config {
    pub discord_token: String,
    /// Registers slash commands to this guild only instead of globally.
    pub discord_guild_id: Option<u64>,

    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,

    pub compute_api_url: String,
    pub metadata_token_url: String,
    pub access_token: Option<String>,

    pub poll_policy: PollPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvVar)` - A numeric variable failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let defaults = PollPolicy::default();
        let attempts = match get("POLL_ATTEMPTS") {
            Some(value) => parse_number::<u32>("POLL_ATTEMPTS", value)?,
            None => defaults.attempts,
        };
        if attempts == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "POLL_ATTEMPTS".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let interval = match get("POLL_INTERVAL_SECS") {
            Some(value) => Duration::from_secs(parse_number::<u64>("POLL_INTERVAL_SECS", value)?),
            None => defaults.interval,
        };

        Ok(Self {
            discord_token: require("DISCORD_TOKEN")?,
            discord_guild_id: get("DISCORD_GUILD_ID")
                .map(|value| parse_number::<NonZeroU64>("DISCORD_GUILD_ID", value))
                .transpose()?
                .map(NonZeroU64::get),
            mongodb_uri: require("MONGODB_URI")?,
            mongodb_database: get("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            mongodb_collection: get("MONGODB_COLLECTION")
                .unwrap_or_else(|| entity::instance_location::COLLECTION.to_string()),
            compute_api_url: get("GCE_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPUTE_API_URL.to_string()),
            metadata_token_url: get("GCE_METADATA_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_METADATA_TOKEN_URL.to_string()),
            access_token: get("GCE_ACCESS_TOKEN"),
            poll_policy: PollPolicy { attempts, interval },
        })
    }
}

fn parse_number<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
