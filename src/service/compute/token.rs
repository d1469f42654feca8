use serde::Deserialize;
use std::time::Duration;
use tokio::{sync::Mutex, time::Instant};

use crate::error::compute::ComputeError;

/// Tokens are refreshed this long before the lifetime reported by the server.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Source of OAuth access tokens for the Compute Engine API.
pub enum TokenSource {
    /// A token supplied through configuration, used as-is.
    Fixed(String),

    /// Tokens fetched from the GCE metadata server for the instance's default
    /// service account, cached until shortly before they expire.
    MetadataServer {
        url: String,
        cached: Mutex<Option<CachedToken>>,
    },
}

pub struct CachedToken {
    value: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

impl TokenSource {
    pub fn fixed(token: impl Into<String>) -> Self {
        Self::Fixed(token.into())
    }

    pub fn metadata_server(url: impl Into<String>) -> Self {
        Self::MetadataServer {
            url: url.into(),
            cached: Mutex::new(None),
        }
    }

    /// Returns a valid access token, fetching a new one when needed.
    ///
    /// Concurrent callers wait on the same refresh rather than each querying
    /// the metadata server.
    ///
    /// # Arguments
    /// - `http` - Client used to reach the metadata server
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token
    /// - `Err(ComputeError::Token)` - Metadata server unreachable or returned an error
    pub async fn access_token(&self, http: &reqwest::Client) -> Result<String, ComputeError> {
        let (url, cached) = match self {
            Self::Fixed(token) => return Ok(token.clone()),
            Self::MetadataServer { url, cached } => (url, cached),
        };

        let mut cached = cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.expires_at > Instant::now()) {
            return Ok(token.value.clone());
        }

        tracing::debug!("Fetching access token from metadata server");

        let response = http
            .get(url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| ComputeError::Token(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ComputeError::Token(format!(
                "metadata server returned {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ComputeError::Token(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(token.access_token)
    }
}
