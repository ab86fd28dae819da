//! JSON-over-HTTP implementation of [`ValuationService`].
//!
//! One `POST {base}/predict` per evaluation with the normalized payload as
//! the body. No retries, no timeout, and no structured parsing of failure
//! bodies; any non-success status is a plain [`ServiceError::Status`].

use async_trait::async_trait;
use tracing::{debug, warn};

use valuation_core::{ApiConfig, ServiceError, Valuation, ValuationRequest, ValuationService};

/// Remote prediction API client.
pub struct HttpValuationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpValuationService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: predict_url(&config.base_url),
        }
    }
}

/// Joins the base URL with the predict path, tolerating a trailing slash.
fn predict_url(base_url: &str) -> String {
    format!("{}/predict", base_url.trim_end_matches('/'))
}

#[async_trait]
impl ValuationService for HttpValuationService {
    async fn evaluate(
        &self,
        request: &ValuationRequest,
    ) -> Result<Valuation, ServiceError> {
        debug!(endpoint = %self.endpoint, "sending evaluation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "evaluation request failed to send");
                ServiceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "evaluation service rejected the request");
            return Err(ServiceError::Status(status.as_u16()));
        }

        response
            .json::<Valuation>()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))
    }
}
