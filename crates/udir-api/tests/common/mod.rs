use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceExt;
use udir_api::{ApiConfig, config::Environment, state::ApiState};
use udir_store::{Directory, UserStore};

/// Test state builder for an isolated store and config
pub struct TestStateBuilder {
    config: ApiConfig,
    directory: Directory,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            config: ApiConfig {
                env: Environment::Development,
                ..ApiConfig::default()
            },
            directory: Directory::seeded(),
        }
    }

    pub fn with_auth_token(mut self, token: &str) -> Self {
        self.config.auth_token = Some(token.to_string());
        self
    }

    pub fn with_allowed_origins(mut self, origins: &str) -> Self {
        self.config.allowed_origins = origins.to_string();
        self
    }

    pub fn without_graphiql(mut self) -> Self {
        self.config.graphiql = false;
        self
    }

    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directory = directory;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn build(self) -> ApiState {
        ApiState::new(&self.config, UserStore::new(self.directory))
    }

    /// Build the full application router (middleware included)
    pub fn build_app(self) -> (ApiState, Router) {
        let config = self.config.clone();
        let state = self.build();
        let app = udir_api::router::app(state.clone(), &config);
        (state, app)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body and an `Authorization` header
    pub async fn post_json_with_token<T: serde::Serialize>(
        &self,
        uri: &str,
        body: &T,
        token: &str,
    ) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", token)
            .body(Body::from(json_body))
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Run a GraphQL document against `/graphql`
    pub async fn graphql(&self, query: &str) -> TestResponse {
        self.post_json("/graphql", &json!({ "query": query })).await
    }

    /// Run a GraphQL document with variables against `/graphql`
    pub async fn graphql_with_variables(&self, query: &str, variables: Value) -> TestResponse {
        self.post_json(
            "/graphql",
            &json!({ "query": query, "variables": variables }),
        )
        .await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Shared GraphQL documents
pub mod documents {
    pub const USER_FIELDS: &str = "id login firstname lastname email";

    pub fn users() -> String {
        format!("{{ users {{ {USER_FIELDS} }} }}")
    }

    pub fn user_by_id(id: i32) -> String {
        format!("{{ userById(id: {id}) {{ {USER_FIELDS} }} }}")
    }

    pub const ADD_USER: &str = "mutation Add($user: UserInput!) { \
        addUser(user: $user) { id login firstname lastname email } }";

    pub const EDIT_USER: &str = "mutation Edit($id: Int!, $user: UserInput!) { \
        editUser(id: $id, user: $user) { id login firstname lastname email } }";
}
