// Shared helpers for the HTTP integration tests.

use netwave::CameraClient;
use std::time::Duration;
use wiremock::MockServer;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
/// base64("admin:secret")
pub const BASIC_AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

pub async fn start_mock_camera() -> MockServer {
    MockServer::start().await
}

pub fn client_for(uri: &str, timeout: Duration) -> CameraClient {
    CameraClient::new(uri, USERNAME, PASSWORD, timeout).expect("client should build")
}

/// reqwest's blocking client must not run on an async worker thread.
pub async fn run_blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task panicked")
}
