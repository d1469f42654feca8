//! Business logic between the Discord handlers and the outside world.
//!
//! - `server_control` turns a slash command into an immediate reply or a
//!   background power job
//! - `instance` drives a single instance through start/stop and waits for the
//!   target power state
//! - `compute` talks to the Compute Engine REST API

pub mod compute;
pub mod instance;
pub mod server_control;

#[cfg(test)]
mod test;
