use async_trait::async_trait;
use reqwest::{header::CONTENT_LENGTH, RequestBuilder, Response};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

use crate::{
    error::compute::ComputeError,
    model::{instance::Instance, location::InstanceLocation},
    service::compute::{token::TokenSource, InstanceApi},
};

/// Compute Engine v1 REST client scoped to the `instances` resource.
///
/// Cheap to clone: the reqwest client and the token source are shared.
#[derive(Clone)]
pub struct ComputeClient {
    http: reqwest::Client,
    base_url: Url,
    token: Arc<TokenSource>,
}

/// Error body returned by Google APIs.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ComputeClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `base_url` - API root, e.g. `https://compute.googleapis.com/compute/v1/`
    /// - `token` - Source of bearer tokens
    ///
    /// # Returns
    /// - `Ok(ComputeClient)` - Client ready for use
    /// - `Err(ComputeError::InvalidUrl)` - `base_url` is not an absolute hierarchical URL
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        token: TokenSource,
    ) -> Result<Self, ComputeError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ComputeError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            token: Arc::new(token),
        })
    }

    /// URL of an instance, or of one of its custom verbs such as `start`.
    ///
    /// Path segments are percent-encoded, so location fields cannot escape the
    /// instance path.
    pub fn instance_url(
        &self,
        location: &InstanceLocation,
        verb: Option<&str>,
    ) -> Result<Url, ComputeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ComputeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([
                "projects",
                location.project.as_str(),
                "zones",
                location.zone.as_str(),
                "instances",
                location.instance_name.as_str(),
            ])
            .extend(verb);

        Ok(url)
    }

    /// Authorizes and sends a request, turning non-success statuses into
    /// `ComputeError::Api`.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ComputeError> {
        let token = self.token.access_token(&self.http).await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };

        Err(ComputeError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_verb(&self, location: &InstanceLocation, verb: &str) -> Result<(), ComputeError> {
        let url = self.instance_url(location, Some(verb))?;
        tracing::debug!("POST {}", url);

        // The API rejects body-less POSTs that omit Content-Length.
        self.send(self.http.post(url).header(CONTENT_LENGTH, 0))
            .await?;

        Ok(())
    }
}

#[async_trait]
impl InstanceApi for ComputeClient {
    async fn get(&self, location: &InstanceLocation) -> Result<Instance, ComputeError> {
        let url = self.instance_url(location, None)?;
        tracing::debug!("GET {}", url);

        let instance = self.send(self.http.get(url)).await?.json().await?;

        Ok(instance)
    }

    async fn start(&self, location: &InstanceLocation) -> Result<(), ComputeError> {
        self.post_verb(location, "start").await
    }

    async fn stop(&self, location: &InstanceLocation) -> Result<(), ComputeError> {
        self.post_verb(location, "stop").await
    }
}
