use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use shared::{CreateHolidayRequest, Holiday};

use super::error::SyncError;
use crate::config::ClientConfig;

/// The three backend operations the calendar needs.
///
/// Each call is exactly one round trip: no caching, batching or retries.
#[async_trait]
pub trait HolidaySync: Send + Sync {
    /// Fetch all holidays
    async fn list(&self) -> Result<Vec<Holiday>, SyncError>;

    /// Create a holiday, overwriting any holiday on the same date
    async fn create(&self, holiday: &Holiday) -> Result<(), SyncError>;

    /// Remove the holiday on `date`
    async fn delete(&self, date: &str) -> Result<(), SyncError>;
}

/// API client for communicating with the holiday backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpHolidayClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl HttpHolidayClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http_client, config })
    }
}

/// Turn a non-2xx response into `SyncError::Server`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(SyncError::Server {
        status: status.as_u16(),
        message,
    })
}

fn transport_error(e: reqwest::Error) -> SyncError {
    SyncError::Transport(e.to_string())
}

#[async_trait]
impl HolidaySync for HttpHolidayClient {
    async fn list(&self) -> Result<Vec<Holiday>, SyncError> {
        let url = self.config.holidays_url();
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<Holiday>>()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn create(&self, holiday: &Holiday) -> Result<(), SyncError> {
        let url = self.config.holidays_url();
        debug!("POST {} {:?}", url, holiday);

        let response = self
            .http_client
            .post(&url)
            .json(&CreateHolidayRequest::from(holiday))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, date: &str) -> Result<(), SyncError> {
        let url = self.config.holiday_url(date);
        debug!("DELETE {}", url);

        let response = self.http_client.delete(&url).send().await.map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}
