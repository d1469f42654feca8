use super::*;

fn job(action: PowerAction) -> PowerJob {
    PowerJob {
        action,
        command_name: "mc".to_string(),
        location: location(),
    }
}

/// Tests the full start message.
///
/// Expected: launch message and external IP on separate lines
#[tokio::test(start_paused = true)]
async fn start_reports_result_and_ip() {
    let api = FakeInstanceApi::new().with_statuses(["STAGING", "RUNNING"]);

    let message = job(PowerAction::Start)
        .run(&api, PollPolicy::default())
        .await;

    assert_eq!(message, "A server launched.\n203.0.113.10");
    assert_eq!(api.calls(), (3, 1, 0));
}

/// Tests that the IP lookup still runs after a failed start.
///
/// Expected: launch error followed by the IP lookup result
#[tokio::test(start_paused = true)]
async fn start_failure_still_reports_ip_lookup() {
    let api = FakeInstanceApi::new()
        .with_start_error(409, "resource not ready")
        .with_instance(instance_without_ip("TERMINATED"));

    let message = job(PowerAction::Start)
        .run(&api, PollPolicy::default())
        .await;

    assert_eq!(
        message,
        "Failed to launch: 409: resource not ready\nNo external IP"
    );
}

#[tokio::test(start_paused = true)]
async fn start_ip_lookup_error() {
    let api = FakeInstanceApi::new()
        .with_instance(instance("RUNNING"))
        .with_get_error(500, "internal");

    let message = job(PowerAction::Start)
        .run(&api, PollPolicy::default())
        .await;

    assert_eq!(message, "A server launched.\nError: 500: internal");
}

#[tokio::test(start_paused = true)]
async fn stop_reports_result_only() {
    let api = FakeInstanceApi::new().with_statuses(["STOPPING", "TERMINATED"]);

    let message = job(PowerAction::Stop)
        .run(&api, PollPolicy::default())
        .await;

    assert_eq!(message, "A server stopped.");
    assert_eq!(api.calls(), (2, 0, 1));
}

/// Tests the timeout message surfaced to the user.
///
/// Expected: timeout text after the configured attempts
#[tokio::test(start_paused = true)]
async fn stop_timeout_message() {
    let api = FakeInstanceApi::new().with_statuses(["STOPPING"]);
    let policy = PollPolicy {
        attempts: 2,
        interval: Duration::from_secs(5),
    };

    let message = job(PowerAction::Stop).run(&api, policy).await;

    assert_eq!(
        message,
        "Timeout: Instance did not reach status TERMINATED within expected time."
    );
    assert_eq!(api.calls(), (2, 0, 1));
}
