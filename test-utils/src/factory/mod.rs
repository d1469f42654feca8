//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test documents and API
//! payloads with sensible defaults, reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each kind of test data has its own factory module with both a `Factory`
//! struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let location = factory::create_location();
//! let instance = factory::create_instance("TERMINATED");
//!
//! // Using builder pattern for customization
//! let location = factory::instance_location::InstanceLocationFactory::new()
//!     .guild_id("987654321")
//!     .command_name("mc")
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `instance_location` - Create stored instance location documents
//! - `instance` - Create Compute Engine instance JSON payloads
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod instance;
pub mod instance_location;

// Re-export commonly used factory functions for concise usage
pub use instance::create_instance;
pub use instance_location::create_location;
