use super::*;

#[tokio::test]
async fn returns_nat_ip() {
    let api = FakeInstanceApi::new().with_instance(instance("RUNNING"));
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let ip = controller.external_ip().await.unwrap();

    assert_eq!(ip, ExternalIp::Address("203.0.113.10".to_string()));
}

#[tokio::test]
async fn reports_missing_address() {
    let api = FakeInstanceApi::new().with_instance(instance_without_ip("RUNNING"));
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let ip = controller.external_ip().await.unwrap();

    assert_eq!(ip, ExternalIp::NoExternalIp);
}

#[tokio::test]
async fn propagates_fetch_error() {
    let api = FakeInstanceApi::new().with_get_error(500, "internal");
    let location = location();
    let controller = InstanceController::new(&api, &location, PollPolicy::default());

    let result = controller.external_ip().await;

    assert!(result.is_err());
    assert_eq!(api.calls(), (1, 0, 0));
}
