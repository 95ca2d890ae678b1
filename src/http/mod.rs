//! # HTTP Client
//!
//! The [`HttpClient`] trait is the seam between the action layer and the
//! network. [`ReqwestClient`] is the production implementation; tests drive
//! the action layer through [`mock::MockHttp`] instead.
//!
//! Both operations resolve with the parsed JSON body of any 2xx response and
//! fail otherwise. There is no retry or backoff.

mod error;
pub mod mock;

pub use error::*;

use crate::config::HttpConfig;
use crate::endpoint::Endpoint;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Issues requests to remote JSON providers.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `endpoint` and parse the body as JSON.
    async fn get(&self, endpoint: &Endpoint) -> Result<Value>;

    /// POST `body` as JSON to `endpoint` and parse the reply as JSON.
    async fn json_post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    /// Builds a client. With `timeout` unset, a stalled request waits forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()? })
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::new(config.timeout())
    }

    async fn handle_response(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Request rejected");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    #[instrument(skip(self, endpoint), fields(endpoint = %endpoint))]
    async fn get(&self, endpoint: &Endpoint) -> Result<Value> {
        debug!("Sending request");
        let response = self.http.get(endpoint.as_str()).send().await?;
        Self::handle_response(response).await
    }

    #[instrument(skip(self, endpoint, body), fields(endpoint = %endpoint))]
    async fn json_post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value> {
        debug!("Sending request");
        let response = self.http.post(endpoint.as_str()).json(body).send().await?;
        Self::handle_response(response).await
    }
}
