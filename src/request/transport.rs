//! The HTTP transport seam.
//!
//! The original browser client had two transports: plain HTTP for proxied
//! requests and a script-injection GET for direct calls, because the
//! provider does not serve CORS headers. Server-side both modes are plain
//! HTTP GETs; the direct/proxy distinction lives entirely in URL
//! construction, so one transport covers both. The trait stays as the seam
//! for tests and for hosts with their own HTTP stack.

use crate::request::error::RequestError;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// "GET and parse JSON" as a capability.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, RequestError>;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, RequestError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RequestError::Network(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    RequestError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    RequestError::Network(url.to_string(), e)
                });
            }
        };

        response.json::<Value>().await.map_err(RequestError::ParseJson)
    }
}
