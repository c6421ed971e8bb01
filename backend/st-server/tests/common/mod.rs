#![allow(dead_code)]

//! Test infrastructure for st-server API tests

use st_auth::{
    CredentialService, IdentityStore, IssueRateLimiter, OwnedResource, RateLimitConfig,
    RecordOwnerStore, Result as AuthErrorResult, SqliteAuthStore,
};
use st_core::{Identity, Role};
use st_db::UserRepository;
use st_server::{AppState, build_router};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // One connection, so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    st_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Auth store that counts every lookup made by the gates
pub struct CountingStore {
    inner: SqliteAuthStore,
    lookups: AtomicUsize,
}

impl CountingStore {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityStore for CountingStore {
    async fn find_identity(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_identity(email).await
    }
}

#[async_trait]
impl RecordOwnerStore for CountingStore {
    async fn find_owner(
        &self,
        resource: OwnedResource,
        id: &str,
    ) -> AuthErrorResult<Option<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_owner(resource, id).await
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<CountingStore>,
}

/// Create the app with record ownership enforced
pub async fn create_test_app() -> TestApp {
    create_test_app_with(true, RateLimitConfig::default()).await
}

pub async fn create_test_app_with(enforce_record_ownership: bool, limits: RateLimitConfig) -> TestApp {
    let pool = create_test_pool().await;
    let store = Arc::new(CountingStore {
        inner: SqliteAuthStore::new(pool.clone()),
        lookups: AtomicUsize::new(0),
    });

    let state = AppState {
        pool,
        credentials: Arc::new(CredentialService::with_hs256(SECRET)),
        identities: store.clone(),
        owners: store.clone(),
        issue_limiter: Arc::new(IssueRateLimiter::new(limits)),
        enforce_record_ownership,
    };

    TestApp { state, store }
}

impl TestApp {
    /// Register an identity directly in the store and return its id
    pub async fn register(&self, email: &str, role: Role) -> String {
        let identity = match role {
            Role::Admin => Identity::admin(email),
            role => Identity::register(email, None, Some(role)).unwrap(),
        };
        let repo = UserRepository::new(self.state.pool.clone());
        repo.ensure_role(&identity).await.unwrap();

        repo.find_by_email(email).await.unwrap().unwrap().id.to_string()
    }

    /// Issue a credential through the public endpoint
    pub async fn token_for(&self, email: &str) -> String {
        let (status, json) = self.send("GET", &format!("/jwt?email={}", email), None, None).await;
        assert_eq!(status, StatusCode::OK, "token issue failed: {}", json);
        json["token"].as_str().unwrap().to_string()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let app = build_router(self.state.clone());
        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

/// Minimal valid listing body for `seller_email`
pub fn product_body(category_id: &str, seller_email: &str) -> serde_json::Value {
    serde_json::json!({
        "categoryId": category_id,
        "name": "Fender Stratocaster",
        "resalePrice": 450,
        "originalPrice": 900,
        "yearsOfUse": 3,
        "condition": "good",
        "sellerName": "Sam",
        "sellerEmail": seller_email,
    })
}
