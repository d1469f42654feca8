//! Start/stop of a single instance and the status poller.
//!
//! A power request to Compute Engine returns as soon as the operation is
//! accepted, so after issuing one the controller polls the instance until it
//! reports the target state. The polling policy is fixed: a bounded number of
//! attempts a constant interval apart, stopping at the first fetch error.

use std::time::Duration;

use crate::{
    error::{compute::ComputeError, control::ControlError},
    model::{
        instance::{ExternalIp, InstanceStatus},
        location::InstanceLocation,
    },
    service::compute::InstanceApi,
};

pub const LAUNCHED_MESSAGE: &str = "A server launched.";
pub const STOPPED_MESSAGE: &str = "A server stopped.";

/// How often and how long to wait for a power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of status fetches.
    pub attempts: u32,
    /// Delay between consecutive fetches.
    pub interval: Duration,
}

impl Default for PollPolicy {
    /// 30 attempts, 10 seconds apart.
    fn default() -> Self {
        Self {
            attempts: 30,
            interval: Duration::from_secs(10),
        }
    }
}

pub struct InstanceController<'a, A: InstanceApi> {
    api: &'a A,
    location: &'a InstanceLocation,
    policy: PollPolicy,
}

impl<'a, A: InstanceApi> InstanceController<'a, A> {
    pub fn new(api: &'a A, location: &'a InstanceLocation, policy: PollPolicy) -> Self {
        Self {
            api,
            location,
            policy,
        }
    }

    /// Starts the instance and waits until it is RUNNING.
    ///
    /// # Returns
    /// - `Ok(LAUNCHED_MESSAGE)` - Instance reached RUNNING
    /// - `Err(ControlError::Launch)` - Start request rejected, no polling done
    /// - `Err(ControlError::Poll)` / `Err(ControlError::Timeout)` - See `wait_for_status`
    pub async fn start(&self) -> Result<&'static str, ControlError> {
        tracing::info!("Starting instance {}", self.location);

        self.api
            .start(self.location)
            .await
            .map_err(ControlError::Launch)?;

        self.wait_for_status(InstanceStatus::Running, LAUNCHED_MESSAGE)
            .await
    }

    /// Stops the instance and waits until it is TERMINATED.
    ///
    /// # Returns
    /// - `Ok(STOPPED_MESSAGE)` - Instance reached TERMINATED
    /// - `Err(ControlError::Stop)` - Stop request rejected, no polling done
    /// - `Err(ControlError::Poll)` / `Err(ControlError::Timeout)` - See `wait_for_status`
    pub async fn stop(&self) -> Result<&'static str, ControlError> {
        tracing::info!("Stopping instance {}", self.location);

        self.api
            .stop(self.location)
            .await
            .map_err(ControlError::Stop)?;

        self.wait_for_status(InstanceStatus::Terminated, STOPPED_MESSAGE)
            .await
    }

    /// Polls the instance until it reports `target`.
    ///
    /// Fetches at most `policy.attempts` times, sleeping `policy.interval`
    /// between fetches. The first failed fetch ends the loop.
    ///
    /// # Arguments
    /// - `target` - Power state to wait for
    /// - `success` - Message returned when the state is reached
    ///
    /// # Returns
    /// - `Ok(success)` - Status matched on some attempt
    /// - `Err(ControlError::Poll)` - A fetch failed
    /// - `Err(ControlError::Timeout)` - Attempts exhausted without a match
    pub async fn wait_for_status(
        &self,
        target: InstanceStatus,
        success: &'static str,
    ) -> Result<&'static str, ControlError> {
        for attempt in 1..=self.policy.attempts {
            let instance = self
                .api
                .get(self.location)
                .await
                .map_err(ControlError::Poll)?;

            tracing::debug!(
                "Instance {} is {} (attempt {}/{}, waiting for {})",
                self.location,
                instance.status,
                attempt,
                self.policy.attempts,
                target
            );

            if instance.status == target {
                return Ok(success);
            }

            if attempt < self.policy.attempts {
                tokio::time::sleep(self.policy.interval).await;
            }
        }

        tracing::warn!(
            "Instance {} did not reach {} after {} attempts",
            self.location,
            target,
            self.policy.attempts
        );

        Err(ControlError::Timeout { target })
    }

    /// Looks up the instance's external IP.
    pub async fn external_ip(&self) -> Result<ExternalIp, ComputeError> {
        Ok(self.api.get(self.location).await?.external_ip())
    }
}
