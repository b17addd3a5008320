//! HTTP backend abstraction for the l10n repository.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest.

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Outcome of a GET request that produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpText {
    /// Status 200 with the full body decoded as text.
    Body(String),
    /// Any other status. The body is not read.
    Status(u16),
}

/// Trait for HTTP backends that can fetch text resources.
///
/// Transport problems (no response at all) are returned as `Err`; a
/// response with a non-200 status is a successful call returning
/// [`HttpText::Status`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch `url` and return its body if the server answered 200.
    async fn get_text(&self, url: &Url) -> FetchResult<HttpText>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Redirects are not followed: a 3xx answer is reported as a status like
/// any other non-200 response.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> FetchResult<HttpText> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(HttpText::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))?;
        Ok(HttpText::Body(body))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
