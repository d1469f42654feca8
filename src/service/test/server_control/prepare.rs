use super::*;

#[tokio::test]
async fn missing_action_is_unknown() {
    let store = FakeLocationStore::new(Vec::new());
    let service = ServerControlService::new(&store);

    let result = service.prepare(&request("mc", Some(1), None)).await;

    assert!(matches!(result, Err(ControlError::UnknownAction(None))));
    assert_eq!(store.lookups(), 0);
}

/// Tests that commands used outside a guild are rejected.
///
/// Expected: Err(NotInGuild) without a lookup
#[tokio::test]
async fn rejects_direct_messages() {
    let store = FakeLocationStore::new(Vec::new());
    let service = ServerControlService::new(&store);

    let result = service.prepare(&request("mc", None, Some("start"))).await;

    assert!(matches!(result, Err(ControlError::NotInGuild)));
    assert_eq!(store.lookups(), 0);
}

/// Tests that lookups are keyed by both guild and command name.
///
/// Expected: Err(LocationNotFound) for the right guild under another command
#[tokio::test]
async fn lookup_is_keyed_by_command_name() {
    let location = location();
    let store = store_with(&location);
    let service = ServerControlService::new(&store);

    let result = service
        .prepare(&request("valheim", Some(location.guild_id), Some("start")))
        .await;

    assert!(matches!(
        result,
        Err(ControlError::LocationNotFound { ref command_name }) if command_name == "valheim"
    ));
}

#[tokio::test]
async fn datastore_failure_is_reported() {
    let store = FakeLocationStore::failing();
    let service = ServerControlService::new(&store);

    let result = service.prepare(&request("mc", Some(1), Some("stop"))).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ControlError::Lookup(_)));
    assert!(err.to_string().starts_with("GCE configuration not found: "));
}

#[tokio::test]
async fn resolves_job_for_configured_command() {
    let location = location();
    let store = store_with(&location);
    let service = ServerControlService::new(&store);

    let job = service
        .prepare(&request("mc", Some(location.guild_id), Some("Stop")))
        .await
        .unwrap();

    assert_eq!(
        job,
        PowerJob {
            action: PowerAction::Stop,
            command_name: "mc".to_string(),
            location,
        }
    );
}
