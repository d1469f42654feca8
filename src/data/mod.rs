//! Datastore access for instance locations.
//!
//! Repositories read stored documents through the MongoDB driver and return
//! domain models, converting at the boundary so the service layer never sees
//! raw documents.

pub mod instance_location;
