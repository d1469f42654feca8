use std::time::Duration;
use tokio::time::Instant;

use super::{instance, instance_without_ip, location, FakeInstanceApi};
use crate::{
    error::control::ControlError,
    model::instance::{ExternalIp, InstanceStatus},
    service::instance::{InstanceController, PollPolicy, LAUNCHED_MESSAGE, STOPPED_MESSAGE},
};

mod external_ip;
mod start;
mod stop;
