//! HTTP client for the remote article-generation service.
//!
//! Thin wrapper over fetch. Every call races a fixed wall-clock deadline
//! so a hung request cannot leave the session busy forever.

use futures::{pin_mut, select, FutureExt};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde::de::DeserializeOwned;

use crate::session::GenerateBackend;
use crate::{
    defaults, ApiError, GenerateResponse, HealthStatus, SystemInfo, WireGenerateRequest,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: defaults::REQUEST_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Query the service configuration.
    pub async fn system_info(&self) -> Result<SystemInfo, ApiError> {
        let request = Request::get(&self.url("/system-info"))
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.execute(request).await
    }

    /// Probe the service and report its status.
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let request = Request::get(&self.url("/health"))
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let send = async {
            let response = request
                .send()
                .await
                .map_err(|err| ApiError::Request(err.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }
        .fuse();
        let deadline = TimeoutFuture::new(self.timeout_ms).fuse();
        pin_mut!(send, deadline);

        select! {
            result = send => result,
            _ = deadline => Err(ApiError::TimedOut),
        }
    }
}

impl GenerateBackend for ApiClient {
    async fn generate(&self, request: WireGenerateRequest) -> Result<GenerateResponse, ApiError> {
        debug!("dispatching generation request for '{}'", request.article_name);
        let request = Request::post(&self.url("/generate-article"))
            .json(&request)
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.execute(request).await
    }

    async fn generate_test(&self) -> Result<GenerateResponse, ApiError> {
        debug!("dispatching test generation request");
        let request = Request::post(&self.url("/test-generation"))
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_normalizes_trailing_slash() {
        let bare = ApiClient::new("http://localhost:8000");
        let slashed = ApiClient::new("http://localhost:8000/");
        assert_eq!(bare.url("/health"), "http://localhost:8000/health");
        assert_eq!(slashed.url("/health"), "http://localhost:8000/health");
    }
}
