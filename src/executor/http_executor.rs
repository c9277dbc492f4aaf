//! HTTP executor client implementation
//!
//! Both tiers run identical remote logic and differ only in the accelerator
//! class behind them, so a single parameterized client type is instantiated
//! once per tier rather than duplicated.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ExecutorConfig;
use crate::dispatch::{GenerateJob, Tier};
use crate::error::{AppError, Result};
use crate::executor::traits::Executor;

/// HTTP client for one remote generation executor
pub struct HttpExecutor {
    name: String,
    tier: Tier,
    client: Client,
    endpoint: String,
}

impl HttpExecutor {
    /// Create an executor client for the given tier from configuration
    pub fn new(tier: Tier, config: &ExecutorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            name: config.name.clone(),
            tier,
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    async fn generate(&self, job: &GenerateJob) -> Result<Vec<u8>> {
        debug!(
            executor = %self.name,
            endpoint = %self.endpoint,
            width = job.width,
            height = job.height,
            steps = job.steps,
            "Sending generate request"
        );

        let query = [
            ("prompt", job.prompt.clone()),
            ("width", job.width.to_string()),
            ("height", job.height.to_string()),
            ("steps", job.steps.to_string()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .header(reqwest::header::ACCEPT, "image/jpeg")
            .send()
            .await
            .map_err(|e| AppError::Executor(format!("{}: {}", self.name, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Executor(format!(
                "{} returned {}: {}",
                self.name, status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Executor(format!("{}: {}", self.name, e)))?;

        Ok(bytes.to_vec())
    }
}
