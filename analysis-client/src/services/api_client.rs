//! HTTP client for the analysis service

use crate::config::ApiConfig;
use crate::models::AnalyzeRequest;
use crate::utils::errors::SubmitError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::types::AnalysisReport;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport seam between the submission controller and the network.
///
/// The controller only ever talks to this trait, so its lifecycle logic
/// is testable without a live service behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyzeApi {
    /// POST the canonical URL for analysis and parse the report.
    async fn analyze(&self, endpoint_url: &str, url: &str) -> Result<AnalysisReport, SubmitError>;

    /// Probe the service health endpoint; true iff it answered 2xx.
    async fn health(&self, endpoint_url: &str) -> Result<bool, SubmitError>;
}

/// `reqwest`-backed production implementation of [`AnalyzeApi`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(Duration::from_secs(config.request_timeout_seconds))
    }
}

#[async_trait]
impl AnalyzeApi for ApiClient {
    async fn analyze(&self, endpoint_url: &str, url: &str) -> Result<AnalysisReport, SubmitError> {
        debug!(endpoint = %endpoint_url, "posting analysis request");

        let response = self
            .client
            .post(endpoint_url)
            .json(&AnalyzeRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "analysis service returned an error status");
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        let report = response.json::<AnalysisReport>().await?;
        debug!(score = report.score, "analysis report parsed");
        Ok(report)
    }

    async fn health(&self, endpoint_url: &str) -> Result<bool, SubmitError> {
        match self.client.get(endpoint_url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}
