//! Test helpers for integration tests
//!
//! Provides a service-level harness over the in-memory store and a spawned
//! HTTP server driven through `reqwest`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use forum_api::{create_app, AppState};
use forum_common::{AppConfig, JwtService, NotifyConfig};
use forum_core::entities::UserProfile;
use forum_service::{NotificationDispatcher, NotificationWorker, ServiceContext, ServiceContextBuilder};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::memory::MemoryStore;

/// Secret shared by the test server and the tokens it is sent
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// How long API tests wait for the notification worker
pub const NOTIFY_WAIT: Duration = Duration::from_secs(2);

/// Build a service context over the store and start its notification worker
pub fn build_context(
    store: &Arc<MemoryStore>,
    notify: &NotifyConfig,
) -> Result<(ServiceContext, JoinHandle<()>)> {
    let (notifier, queue) = NotificationDispatcher::channel();
    let worker = NotificationWorker::new(queue, store.clone(), store.clone(), notify).spawn();

    let ctx = ServiceContextBuilder::new()
        .post_repo(store.clone())
        .comment_repo(store.clone())
        .profile_repo(store.clone())
        .notification_repo(store.clone())
        .store_health(store.clone())
        .jwt_service(Arc::new(JwtService::new(TEST_JWT_SECRET, 0)))
        .notifier(notifier)
        .build()
        .map_err(|e| anyhow::anyhow!("Context error: {e}"))?;

    Ok((ctx, worker))
}

/// Fast notification pacing for tests
pub fn test_notify_config(chunk_size: usize) -> NotifyConfig {
    NotifyConfig {
        chunk_size,
        chunk_delay_ms: 0,
    }
}

// ============================================================================
// Service harness
// ============================================================================

/// Services wired to an in-memory store
pub struct TestForum {
    pub store: Arc<MemoryStore>,
    pub ctx: ServiceContext,
    worker: JoinHandle<()>,
}

impl TestForum {
    pub async fn new(members: &[&UserProfile]) -> Self {
        Self::with_notify(members, test_notify_config(25)).await
    }

    pub async fn with_notify(members: &[&UserProfile], notify: NotifyConfig) -> Self {
        let store = MemoryStore::new();
        for member in members {
            store.add_profile((*member).clone()).await;
        }
        let (ctx, worker) = build_context(&store, &notify).expect("context must build");
        Self { store, ctx, worker }
    }

    /// Close the notification queue, wait for the worker to drain it and
    /// hand back the store for inspection
    pub async fn finish(self) -> Arc<MemoryStore> {
        let Self { store, ctx, worker } = self;
        drop(ctx);
        worker.await.expect("notification worker panicked");
        store
    }
}

// ============================================================================
// HTTP server
// ============================================================================

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with the given members registered
    pub async fn start(members: &[&UserProfile]) -> Result<Self> {
        let config = test_config()?;
        let store = MemoryStore::new();
        for member in members {
            store.add_profile((*member).clone()).await;
        }

        let (ctx, _worker) = build_context(&store, &config.notify)?;
        let app = create_app(AppState::new(ctx, config))?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            jwt: JwtService::new(TEST_JWT_SECRET, 0),
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bearer token for a member, valid for an hour
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.jwt
            .issue_token(user_id, 3600)
            .expect("token must encode")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).bearer_auth(token).send().await?)
    }
}

/// Configuration for a server backed by the in-memory store
pub fn test_config() -> Result<AppConfig> {
    let lookup = |key: &str| {
        let value = match key {
            "API_PORT" => "0",
            "DATABASE_URL" => "postgres://unused/forum_test",
            "JWT_SECRET" => TEST_JWT_SECRET,
            "JWT_LEEWAY_SECONDS" => "0",
            "RATE_LIMIT_REQUESTS_PER_SECOND" => "1000",
            "RATE_LIMIT_BURST" => "1000",
            "NOTIFY_CHUNK_SIZE" => "2",
            "NOTIFY_CHUNK_DELAY_MS" => "0",
            _ => return None,
        };
        Some(value.to_string())
    };

    AppConfig::from_lookup(lookup).map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
