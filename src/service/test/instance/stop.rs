use super::*;

#[tokio::test(start_paused = true)]
async fn stops_and_waits_for_terminated() {
    let api = FakeInstanceApi::new().with_statuses(["STOPPING", "STOPPING", "TERMINATED"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let result = controller.stop().await;

    assert_eq!(result.unwrap(), "A server stopped.");
    assert_eq!(api.calls(), (3, 0, 1));
}

/// Tests that STOPPED is not treated as TERMINATED.
///
/// Compute Engine reports STOPPED only transiently; the poller waits for the
/// exact target label.
///
/// Expected: Ok after TERMINATED is observed
#[tokio::test(start_paused = true)]
async fn stopped_is_not_terminated() {
    let api = FakeInstanceApi::new().with_statuses(["STOPPED", "TERMINATED"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let result = controller.stop().await;

    assert!(result.is_ok());
    assert_eq!(api.calls(), (2, 0, 1));
}

#[tokio::test(start_paused = true)]
async fn stop_failure_skips_polling() {
    let api = FakeInstanceApi::new()
        .with_stop_error(404, "instance not found")
        .with_statuses(["RUNNING"]);
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let err = controller.stop().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to stop: 404: instance not found");
    assert_eq!(api.calls(), (0, 0, 1));
}
