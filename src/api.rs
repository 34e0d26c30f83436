//! バックエンドAPIクライアント
//!
//! - `GET  {base}/api/getalerts` → Alert配列
//! - `POST {base}/api/report`    → ReportResponse

use std::time::Duration;

use alert_timeline_common::{
    parse_alerts_response, parse_report_response, unparseable_timestamps, Alert, ReportPayload,
    ReportResponse,
};
use async_trait::async_trait;

use crate::config::Config;
use crate::error::{Result, TimelineError};

pub const ALERTS_PATH: &str = "/api/getalerts";
pub const REPORT_PATH: &str = "/api/report";

/// セッションとHTTPの境界
#[async_trait]
pub trait TimelineApi: Send + Sync + 'static {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>>;

    async fn submit_report(&self, payload: &ReportPayload) -> Result<ReportResponse>;
}

/// reqwest による実装
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config, api_url: Option<&str>) -> Result<Self> {
        Self::new(
            &config.api_url(api_url),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn alerts_url(&self) -> String {
        format!("{}{}", self.base_url, ALERTS_PATH)
    }

    pub fn report_url(&self) -> String {
        format!("{}{}", self.base_url, REPORT_PATH)
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(TimelineError::Status {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TimelineApi for HttpApi {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        let url = self.alerts_url();
        tracing::debug!(%url, "fetching alerts");
        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response).await?;
        let alerts = parse_alerts_response(&body)?;
        for index in unparseable_timestamps(&alerts) {
            tracing::warn!(
                index,
                timestamp = %alerts[index].timestamp,
                "alert timestamp is not a datetime; sorted as oldest"
            );
        }
        tracing::debug!(count = alerts.len(), "alerts received");
        Ok(alerts)
    }

    async fn submit_report(&self, payload: &ReportPayload) -> Result<ReportResponse> {
        let url = self.report_url();
        tracing::debug!(%url, worker_id = payload.worker_id, "submitting report");
        let response = self.client.post(&url).json(payload).send().await?;
        let body = Self::read_body(response).await?;
        Ok(parse_report_response(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let api = HttpApi::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.alerts_url(), "http://localhost:8000/api/getalerts");
        assert_eq!(api.report_url(), "http://localhost:8000/api/report");
    }
}
