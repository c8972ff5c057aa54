// tests/common/mod.rs
pub use serde_json::json;

use chrono::Utc;
use httpmock::{Method::POST, Mock, MockServer};

use crate::config::options::ModelOptions;

pub const TOKEN_PATH: &str = "/identity/token";

pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Mock the IAM exchange: responds with `value` expiring at `expires_at`.
pub async fn mock_token<'a>(server: &'a MockServer, value: &str, expires_at: i64) -> Mock<'a> {
    let value = value.to_owned();
    server
        .mock_async(move |when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "access_token": value,
                    "token_type": "Bearer",
                    "expiration": expires_at,
                }));
        })
        .await
}

/// Options wired to the mock server, with no environment fallback.
pub fn mock_options(server: &MockServer) -> ModelOptions {
    ModelOptions::from_env_with(|_| None)
        .api_key("test-api-key")
        .project_id("test-project")
        .iam_endpoint(server.url(TOKEN_PATH))
}
