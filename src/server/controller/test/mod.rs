use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::StoreConfig, data::soldier::DataLoader, router, state::AppState,
};


/// Test harness wrapping the real router around a private data loader.
struct TestApp {
    router: Router,
    data_loader: Arc<DataLoader>,
}

impl TestApp {
    /// App backed by a connected in-memory store.
    async fn connected() -> Self {
        let app = Self::disconnected();
        assert!(app.data_loader.connect().await);
        app
    }

    /// App whose data loader never connected.
    fn disconnected() -> Self {
        let data_loader = Arc::new(DataLoader::new(StoreConfig::in_memory()));
        let router = router::router().with_state(AppState::new(data_loader.clone()));

        Self {
            router,
            data_loader,
        }
    }

    /// Sends a request and returns the status with the parsed JSON body.
    ///
    /// An empty body is returned as `Value::Null`.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}
