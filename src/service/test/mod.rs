//! Fakes for the service layer seams.
//!
//! `FakeInstanceApi` serves scripted instance responses and counts calls;
//! `FakeLocationStore` answers lookups from a fixed list.

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU32, Ordering},
        Mutex,
    },
};
use test_utils::factory::{self, instance::InstanceFactory};

use crate::{
    error::{compute::ComputeError, internal::InternalError, AppError},
    model::{instance::Instance, location::InstanceLocation},
    service::compute::InstanceApi,
};

mod instance;
mod server_control;

type Scripted = Result<Instance, (u16, String)>;

fn api_error((status, message): (u16, String)) -> ComputeError {
    ComputeError::Api { status, message }
}

/// Parses a factory payload into the model served by the fake.
pub fn instance(status: &str) -> Instance {
    serde_json::from_value(factory::create_instance(status)).unwrap()
}

pub fn location() -> InstanceLocation {
    InstanceLocation::from_entity(factory::create_location()).unwrap()
}

pub struct FakeInstanceApi {
    /// Responses to `get`, in order. The last one repeats.
    responses: Mutex<VecDeque<Scripted>>,
    start_error: Option<(u16, String)>,
    stop_error: Option<(u16, String)>,
    pub gets: AtomicU32,
    pub starts: AtomicU32,
    pub stops: AtomicU32,
}

impl FakeInstanceApi {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            start_error: None,
            stop_error: None,
            gets: AtomicU32::new(0),
            starts: AtomicU32::new(0),
            stops: AtomicU32::new(0),
        }
    }

    /// Queues one `get` response per status label.
    pub fn with_statuses<'s>(self, statuses: impl IntoIterator<Item = &'s str>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .extend(statuses.into_iter().map(|s| Ok(instance(s))));
        self
    }

    pub fn with_instance(self, instance: Instance) -> Self {
        self.responses.lock().unwrap().push_back(Ok(instance));
        self
    }

    /// Queues a failing `get` response.
    pub fn with_get_error(self, status: u16, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err((status, message.to_string())));
        self
    }

    pub fn with_start_error(mut self, status: u16, message: &str) -> Self {
        self.start_error = Some((status, message.to_string()));
        self
    }

    pub fn with_stop_error(mut self, status: u16, message: &str) -> Self {
        self.stop_error = Some((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> (u32, u32, u32) {
        (
            self.gets.load(Ordering::SeqCst),
            self.starts.load(Ordering::SeqCst),
            self.stops.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl InstanceApi for FakeInstanceApi {
    async fn get(&self, _location: &InstanceLocation) -> Result<Instance, ComputeError> {
        self.gets.fetch_add(1, Ordering::SeqCst);

        let mut responses = self.responses.lock().unwrap();
        let next = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };

        match next {
            Some(response) => response.map_err(api_error),
            None => Err(api_error((404, "no scripted response".to_string()))),
        }
    }

    async fn start(&self, _location: &InstanceLocation) -> Result<(), ComputeError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        match &self.start_error {
            Some(error) => Err(api_error(error.clone())),
            None => Ok(()),
        }
    }

    async fn stop(&self, _location: &InstanceLocation) -> Result<(), ComputeError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        match &self.stop_error {
            Some(error) => Err(api_error(error.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeLocationStore {
    locations: Vec<InstanceLocation>,
    fail: bool,
    pub lookups: AtomicU32,
}

impl FakeLocationStore {
    pub fn new(locations: Vec<InstanceLocation>) -> Self {
        Self {
            locations,
            fail: false,
            lookups: AtomicU32::new(0),
        }
    }

    /// A store whose every lookup fails as if a stored document were malformed.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn lookups(&self) -> u32 {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl crate::data::instance_location::InstanceLocationStore for FakeLocationStore {
    async fn find(
        &self,
        guild_id: u64,
        command_name: &str,
    ) -> Result<Option<InstanceLocation>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            let source = "guild".parse::<u64>().unwrap_err();
            return Err(InternalError::ParseStringId {
                value: "guild".to_string(),
                source,
            }
            .into());
        }

        Ok(self
            .locations
            .iter()
            .find(|l| l.guild_id == guild_id && l.command_name == command_name)
            .cloned())
    }
}

/// Instance with no external address, for IP fallback tests.
pub fn instance_without_ip(status: &str) -> Instance {
    serde_json::from_value(
        InstanceFactory::new()
            .status(status)
            .network_interface([None::<&str>])
            .build(),
    )
    .unwrap()
}
