use super::*;

#[tokio::test(start_paused = true)]
async fn starts_and_waits_for_running() {
    let api = FakeInstanceApi::new().with_statuses(["STAGING", "RUNNING"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let result = controller.start().await;

    assert_eq!(result.unwrap(), "A server launched.");
    assert_eq!(api.calls(), (2, 1, 0));
}

/// Tests that a rejected start request is not followed by polling.
///
/// Expected: Err(Launch) with no status fetches
#[tokio::test(start_paused = true)]
async fn start_failure_skips_polling() {
    let api = FakeInstanceApi::new()
        .with_start_error(403, "permission denied")
        .with_statuses(["RUNNING"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let err = controller.start().await.unwrap_err();

    assert!(matches!(err, ControlError::Launch(_)));
    assert_eq!(err.to_string(), "Failed to launch: 403: permission denied");
    assert_eq!(api.calls(), (0, 1, 0));
}

/// Tests that a stopped status does not satisfy a start.
///
/// Expected: Err(Timeout) targeting RUNNING
#[tokio::test(start_paused = true)]
async fn start_times_out_if_never_running() {
    let api = FakeInstanceApi::new().with_statuses(["TERMINATED"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let err = controller.start().await.unwrap_err();

    assert!(matches!(
        err,
        ControlError::Timeout {
            target: InstanceStatus::Running
        }
    ));
}
