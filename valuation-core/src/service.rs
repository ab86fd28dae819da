//! The seam between the form and the remote prediction service.
//!
//! One implementation per transport; the UI only ever sees
//! [`ValuationService`], which keeps the submission pipeline testable with
//! in-process stubs.

use async_trait::async_trait;
use thiserror::Error;

use crate::request::{Valuation, ValuationRequest};

/// Fallback base URL when neither the CLI flag nor the environment set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "VALUATION_API_URL";

/// Connection configuration for the remote valuation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the prediction service, without the `/predict` path.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads the base URL from [`BASE_URL_ENV`], falling back to the default.
    pub fn from_env() -> Self {
        Self::resolve(None, std::env::var(BASE_URL_ENV).ok())
    }

    /// Applies the precedence: explicit override, then environment, then
    /// [`DEFAULT_BASE_URL`]. Blank values are skipped.
    pub fn resolve(
        override_url: Option<String>,
        env_url: Option<String>,
    ) -> Self {
        let base_url = [override_url, env_url]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}

/// Why an evaluation request failed.
///
/// Carries plain strings rather than transport-specific error types so the
/// core crate stays transport-free.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(u16),

    /// The response body was not a valid prediction.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A service that can price a property from its attributes.
#[async_trait]
pub trait ValuationService: Send + Sync {
    /// Issues exactly one evaluation request and returns the predicted
    /// value. No retry, no timeout; a failure is final for this attempt.
    async fn evaluate(
        &self,
        request: &ValuationRequest,
    ) -> Result<Valuation, ServiceError>;
}
