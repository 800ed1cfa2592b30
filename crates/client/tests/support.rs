//! Shared context for client integration tests.

use std::sync::Arc;

use gatescan_client::{ApiClient, ClientConfig};
use gatescan_common::auth::TokenStore;
use gatescan_common::testing::{MemoryStore, RecordingSessionEvents};
use wiremock::MockServer;

/// A client wired against a wiremock server with in-memory storage.
pub struct TestContext {
    pub server: MockServer,
    pub client: Arc<ApiClient<MemoryStore>>,
    pub session: Arc<RecordingSessionEvents>,
}

/// Start a mock backend and build a client pointed at it.
pub async fn setup() -> TestContext {
    let server = MockServer::start().await;

    let config =
        ClientConfig { base_url: server.uri(), timeout_secs: 5, ..ClientConfig::default() };
    let session = Arc::new(RecordingSessionEvents::new());
    let client = Arc::new(
        ApiClient::new(config, Arc::new(MemoryStore::new()), session.clone())
            .expect("client construction cannot fail with a valid config"),
    );

    TestContext { server, client, session }
}

impl TestContext {
    pub fn tokens(&self) -> Arc<TokenStore<MemoryStore>> {
        self.client.token_store()
    }

    /// Store tokens as a completed login would.
    pub async fn seed_tokens(&self, access: &str, refresh: Option<&str>) {
        self.tokens().set_tokens(access, refresh).await;
    }

    /// Number of requests the mock backend received for `path`.
    pub async fn requests_to(&self, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == path)
            .count()
    }
}
