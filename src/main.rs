mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let compute = startup::setup_compute_client(&config)?;

    let state = AppState::new(&db, &config, compute);

    tracing::info!("Starting server manager");

    bot::start::start_bot(&config, state).await?;

    Ok(())
}
