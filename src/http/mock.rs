//! # Mock HTTP
//!
//! A scripted [`HttpClient`] for driving the action layer without a network.
//!
//! Expectations are consumed in order. Each request pops the next one and
//! must match its method; the scripted response is returned as-is.
//!
//! ```ignore
//! let mock = MockHttp::new();
//! mock.expect_get().return_ok(json!({ "tags": [] }));
//! mock.expect_post().return_err(HttpError::Status { status: 500, body: "".into() });
//!
//! let actions = BlogActions::new(Arc::new(mock.clone()), &config);
//! // ...
//! mock.verify();
//! ```

use super::{HttpClient, HttpError, Result};
use crate::endpoint::Endpoint;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

struct Expectation {
    method: Method,
    response: Result<Value>,
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    expectations: VecDeque<Expectation>,
    requests: Vec<RecordedRequest>,
}

/// Scripted [`HttpClient`]. Clones share the same script.
#[derive(Clone, Default)]
pub struct MockHttp {
    inner: Arc<Mutex<Inner>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `get` request.
    pub fn expect_get(&self) -> ExpectationBuilder {
        ExpectationBuilder {
            method: Method::Get,
            inner: self.inner.clone(),
        }
    }

    /// Expects a `json_post` request.
    pub fn expect_post(&self) -> ExpectationBuilder {
        ExpectationBuilder {
            method: Method::Post,
            inner: self.inner.clone(),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let inner = self.inner.lock().unwrap();
        if !inner.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                inner.expectations.len()
            );
        }
    }

    fn respond(&self, method: Method, endpoint: &Endpoint, body: Option<&Value>) -> Result<Value> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method,
            endpoint: endpoint.to_string(),
            body: body.cloned(),
        });
        match inner.expectations.pop_front() {
            Some(expectation) if expectation.method == method => expectation.response,
            Some(expectation) => panic!(
                "Expected {:?} request, got {:?} {}",
                expectation.method, method, endpoint
            ),
            None => panic!("Unexpected {:?} request to {}", method, endpoint),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get(&self, endpoint: &Endpoint) -> Result<Value> {
        self.respond(Method::Get, endpoint, None)
    }

    async fn json_post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value> {
        self.respond(Method::Post, endpoint, Some(body))
    }
}

/// Builder returned by [`MockHttp::expect_get`] and [`MockHttp::expect_post`].
pub struct ExpectationBuilder {
    method: Method,
    inner: Arc<Mutex<Inner>>,
}

impl ExpectationBuilder {
    /// Resolve the request with `body`.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Fail the request with `error`.
    pub fn return_err(self, error: HttpError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value>) {
        let mut inner = self.inner.lock().unwrap();
        inner.expectations.push_back(Expectation {
            method: self.method,
            response,
        });
    }
}
