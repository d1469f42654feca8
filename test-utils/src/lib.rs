//! Server Manager Test Utils
//!
//! Provides shared testing utilities for the server manager bot. This crate
//! offers factories for stored instance locations and Compute Engine instance
//! payloads, plus a builder that stands up a mock Compute Engine API with
//! `wiremock`.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring the mock API
//! - **TestContext**: Running mock server and the URLs pointing at it
//! - **factory**: Builders for test documents and API payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_instance_lookup() {
//!     let location = factory::create_location();
//!     let test = TestBuilder::new()
//!         .with_access_token("test-token", 3600)
//!         .with_instance(&location, factory::create_instance("RUNNING"))
//!         .build()
//!         .await;
//!
//!     let base_url = test.compute_url();
//!     // Point the client under test at `base_url`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;
