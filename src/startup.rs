use mongodb::bson::doc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{compute::ComputeError, AppError},
    service::compute::{token::TokenSource, ComputeClient},
};

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`; falls back to info for this crate and warnings for
/// serenity, whose gateway logging is noisy at info.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("servermanager=info,serenity=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to MongoDB and verifies the server is reachable.
///
/// The driver connects lazily, so a `ping` command is issued to surface a bad
/// URI or unreachable server at startup rather than on the first command.
///
/// # Arguments
/// - `config` - Application configuration containing the MongoDB URI and database name
///
/// # Returns
/// - `Ok(Database)` - Handle to the configured database
/// - `Err(AppError::DbErr)` - Invalid URI or server unreachable
pub async fn connect_to_database(config: &Config) -> Result<mongodb::Database, AppError> {
    let client = mongodb::Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.mongodb_database);

    db.run_command(doc! { "ping": 1 }, None).await?;

    tracing::info!("Connected to MongoDB database {}", config.mongodb_database);

    Ok(db)
}

/// Builds the Compute Engine client.
///
/// Redirects are disabled and requests time out after 30 seconds. A token set
/// through `GCE_ACCESS_TOKEN` takes precedence over the metadata server.
///
/// # Arguments
/// - `config` - Application configuration containing API and token settings
///
/// # Returns
/// - `Ok(ComputeClient)` - Client ready for use
/// - `Err(AppError::ComputeErr)` - HTTP client construction failed or the API URL is invalid
pub fn setup_compute_client(config: &Config) -> Result<ComputeClient, AppError> {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(ComputeError::from)?;

    let token = match &config.access_token {
        Some(token) => TokenSource::fixed(token.clone()),
        None => {
            tracing::info!("Using GCE metadata server for Compute Engine credentials");
            TokenSource::metadata_server(config.metadata_token_url.clone())
        }
    };

    Ok(ComputeClient::new(http, &config.compute_api_url, token)?)
}
