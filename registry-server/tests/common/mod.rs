#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode};
use registry_server::db::repository::{RepoError, RepoResult};
use registry_server::{
    Config, EmployeeStore, MemoryEmployeeRepository, NumberStrategy, Scope, ServerState,
    build_app,
};
use serde_json::Value;
use shared::models::{Employee, NewEmployee};
use tower::ServiceExt;

pub const ORIGIN: &str = "http://localhost:3000";

pub fn test_state(config: Config) -> ServerState {
    ServerState::new(
        config,
        Arc::new(MemoryEmployeeRepository::new()),
        Arc::new(NumberStrategy::Timestamp),
    )
}

pub fn test_app() -> (Router, ServerState) {
    let state = test_state(Config::in_memory("test-app"));
    let app = build_app(state.clone()).expect("app builds");
    (app, state)
}

pub fn test_app_with(store: Arc<dyn EmployeeStore>, config: Config) -> (Router, ServerState) {
    let state = ServerState::new(config, store, Arc::new(NumberStrategy::Timestamp));
    let app = build_app(state.clone()).expect("app builds");
    (app, state)
}

/// Memory store that can be switched into failing mode, and can stall `list`
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: MemoryEmployeeRepository,
    failing: Arc<AtomicBool>,
    list_delay: Option<Duration>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_delay(delay: Duration) -> Self {
        Self {
            list_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepoError::Database("disk I/O error".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EmployeeStore for FlakyStore {
    fn backend(&self) -> &'static str {
        "flaky"
    }

    async fn insert(&self, scope: &Scope, new: NewEmployee) -> RepoResult<Employee> {
        self.check()?;
        self.inner.insert(scope, new).await
    }

    async fn list(&self, scope: &Scope) -> RepoResult<Vec<Employee>> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        self.inner.list(scope).await
    }

    async fn delete(&self, scope: &Scope, id: i64) -> RepoResult<bool> {
        self.check()?;
        self.inner.delete(scope, id).await
    }

    async fn count(&self, scope: &Scope) -> RepoResult<u64> {
        self.check()?;
        self.inner.count(scope).await
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

pub fn register_request(user: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post("/register").header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(path: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(path);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn delete_request(path: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::delete(path);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn register(app: &Router, user: Option<&str>, body: &str) -> (StatusCode, Value) {
    let response = send(app, register_request(user, body)).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn list(app: &Router, user: Option<&str>) -> Vec<Value> {
    let response = send(app, get_request("/api/employees", user)).await;
    assert_eq!(response.status(), StatusCode::OK);
    match body_json(response).await {
        Value::Array(items) => items,
        other => panic!("expected array, got {other}"),
    }
}
