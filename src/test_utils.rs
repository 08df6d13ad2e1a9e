// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Key = (String, String);

/// A mock HTTP service that returns predefined responses based on request paths.
///
/// Each path holds a queue of responses: every request consumes the front
/// entry, and the last entry keeps being served once the queue is drained.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Key, VecDeque<(u16, String)>>>>,
    requests: Arc<Mutex<HashMap<Key, usize>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on_get_sequence(path, vec![(status, body.to_string())])
    }

    /// Serve the given responses in order for GET requests on the path
    pub fn on_get_sequence(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), responses.into());
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Number of GET requests received for the exact path
    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .get(&("GET".to_string(), path.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let key = (method.to_string(), path.to_string());
        *self.requests.lock().unwrap().entry(key.clone()).or_insert(0) += 1;

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .next_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json("resource", &path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock object JSON response with an optional status block
pub fn resource_json(
    api_version: &str,
    kind: &str,
    namespace: &str,
    name: &str,
    status: Option<serde_json::Value>,
) -> String {
    let mut object = serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {}
    });
    if let Some(status) = status {
        object["status"] = status;
    }
    object.to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 403 forbidden response
pub fn forbidden_json(resource: &str, name: &str) -> String {
    status_json(
        403,
        "Forbidden",
        &format!("{} \"{}\" is forbidden: access denied", resource, name),
    )
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
