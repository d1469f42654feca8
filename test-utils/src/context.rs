use wiremock::MockServer;

/// Test context containing the running mock Compute Engine server.
///
/// The server shuts down when the context is dropped, so keep the context
/// alive for the duration of the test.
pub struct TestContext {
    /// Mock server serving the Compute Engine API and metadata token routes.
    ///
    /// Tests may mount additional mocks on it or inspect received requests.
    pub server: MockServer,
}

impl TestContext {
    /// Base URL of the mocked Compute Engine v1 API, with a trailing slash.
    pub fn compute_url(&self) -> String {
        format!("{}/compute/v1/", self.server.uri())
    }

    /// URL of the mocked metadata server token endpoint.
    pub fn metadata_token_url(&self) -> String {
        format!("{}{}", self.server.uri(), crate::builder::METADATA_TOKEN_PATH)
    }
}
