use test_utils::{builder::TestBuilder, context::TestContext, factory};
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

use crate::{
    error::compute::ComputeError,
    model::{instance::InstanceStatus, location::InstanceLocation},
    service::compute::{token::TokenSource, ComputeClient, InstanceApi},
};


/// Converts a factory document into the domain model used by the client.
fn location_of(document: &entity::instance_location::Model) -> InstanceLocation {
    InstanceLocation::from_entity(document.clone()).unwrap()
}

/// Client against the mock server authenticated with a fixed token.
fn fixed_token_client(test: &TestContext) -> ComputeClient {
    ComputeClient::new(
        reqwest::Client::new(),
        &test.compute_url(),
        TokenSource::fixed("test-token"),
    )
    .unwrap()
}
