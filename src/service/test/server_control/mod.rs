use std::time::Duration;

use super::{instance, instance_without_ip, location, FakeInstanceApi, FakeLocationStore};
use crate::{
    error::control::ControlError,
    model::{command::{CommandRequest, PowerAction}, location::InstanceLocation},
    service::{
        instance::PollPolicy,
        server_control::{CommandReply, PowerJob, ServerControlService},
    },
};

mod prepare;
mod run;

fn request(name: &str, guild_id: Option<u64>, action: Option<&str>) -> CommandRequest {
    CommandRequest::from_options(name, guild_id, action.map(|a| ("action", Some(a))))
}

/// Store holding a single location registered for `/mc`.
fn store_with(location: &InstanceLocation) -> FakeLocationStore {
    FakeLocationStore::new(vec![location.clone()])
}
