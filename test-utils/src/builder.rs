use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::context::TestContext;

/// Path of the metadata server token endpoint on the mock server.
pub const METADATA_TOKEN_PATH: &str =
    "/computeMetadata/v1/instance/service-accounts/default/token";

/// Builder for creating test contexts with a mock Compute Engine API.
///
/// Mocks are collected while configuring and mounted in the order they were
/// added when `build()` is called. When several mocks match a request the one
/// mounted first wins, until it has served its allowed number of responses.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let location = factory::create_location();
/// let test = TestBuilder::new()
///     .with_operation(&location, "start")
///     .with_instance_sequence(&location, vec![
///         factory::create_instance("STAGING"),
///         factory::create_instance("RUNNING"),
///     ])
///     .build()
///     .await;
/// ```
pub struct TestBuilder {
    mocks: Vec<Mock>,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Serves the instance resource for every `instances.get` request.
    ///
    /// # Arguments
    /// - `location` - Stored location identifying the instance path
    /// - `instance` - JSON body returned, usually from `InstanceFactory`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_instance(
        mut self,
        location: &entity::instance_location::Model,
        instance: Value,
    ) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path(instance_path(location, None)))
                .respond_with(ResponseTemplate::new(200).set_body_json(instance)),
        );
        self
    }

    /// Serves the given instance resources in order, one per `instances.get`
    /// request. The last resource keeps being served once the others are used.
    ///
    /// # Arguments
    /// - `location` - Stored location identifying the instance path
    /// - `instances` - JSON bodies returned in order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_instance_sequence(
        mut self,
        location: &entity::instance_location::Model,
        instances: Vec<Value>,
    ) -> Self {
        let last = instances.len().saturating_sub(1);
        for (index, instance) in instances.into_iter().enumerate() {
            let mock = Mock::given(method("GET"))
                .and(path(instance_path(location, None)))
                .respond_with(ResponseTemplate::new(200).set_body_json(instance));

            self.mocks
                .push(if index == last { mock } else { mock.up_to_n_times(1) });
        }
        self
    }

    /// Accepts a `start` or `stop` call and answers with a pending operation.
    ///
    /// # Arguments
    /// - `location` - Stored location identifying the instance path
    /// - `verb` - `"start"` or `"stop"`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_operation(
        mut self,
        location: &entity::instance_location::Model,
        verb: &str,
    ) -> Self {
        let body = json!({
            "kind": "compute#operation",
            "name": format!("operation-{}-{}", verb, location.instance_name),
            "operationType": verb,
            "status": "RUNNING",
            "zone": location.zone,
        });

        self.mocks.push(
            Mock::given(method("POST"))
                .and(path(instance_path(location, Some(verb))))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
        self
    }

    /// Answers a Compute Engine route with an API error body.
    ///
    /// # Arguments
    /// - `http_method` - `"GET"` or `"POST"`
    /// - `location` - Stored location identifying the instance path
    /// - `verb` - `None` for the instance itself, `Some("start")`/`Some("stop")` otherwise
    /// - `status` - HTTP status code to return
    /// - `message` - Value of `error.message` in the body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_api_error(
        mut self,
        http_method: &str,
        location: &entity::instance_location::Model,
        verb: Option<&str>,
        status: u16,
        message: &str,
    ) -> Self {
        let body = json!({
            "error": {
                "code": status,
                "message": message,
                "errors": [{ "message": message, "domain": "global" }],
            }
        });

        self.mocks.push(
            Mock::given(method(http_method))
                .and(path(instance_path(location, verb)))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        );
        self
    }

    /// Serves an access token from the metadata server token endpoint.
    ///
    /// # Arguments
    /// - `token` - Access token value
    /// - `expires_in` - Lifetime in seconds reported to the client
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_access_token(mut self, token: &str, expires_in: u64) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path(METADATA_TOKEN_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "access_token": token,
                    "expires_in": expires_in,
                    "token_type": "Bearer",
                }))),
        );
        self
    }

    /// Starts the mock server and mounts every configured route.
    ///
    /// # Returns
    /// - `TestContext` - Context owning the running server
    pub async fn build(self) -> TestContext {
        let server = MockServer::start().await;

        for mock in self.mocks {
            mock.mount(&server).await;
        }

        TestContext { server }
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of an instance, or of one of its custom verbs, under the mocked API.
///
/// # Arguments
/// - `location` - Stored location identifying the instance
/// - `verb` - Optional trailing path segment such as `"start"`
pub fn instance_path(location: &entity::instance_location::Model, verb: Option<&str>) -> String {
    let base = format!(
        "/compute/v1/projects/{}/zones/{}/instances/{}",
        location.project, location.zone, location.instance_name
    );

    match verb {
        Some(verb) => format!("{}/{}", base, verb),
        None => base,
    }
}
