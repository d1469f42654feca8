//! Stored document shapes for the server manager.
//!
//! Each module mirrors one MongoDB collection. The models are plain serde
//! structs so both the bot and the test utilities can build and read them
//! without pulling in a database driver.

pub mod instance_location;
