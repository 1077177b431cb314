use airinfo_core::{CoreError, CoreResult, Metar, WeatherFetcher};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the remote METAR service at a fixed base URL.
///
/// Requests are `GET <base_url>?loc=<station>`.
#[derive(Debug, Clone)]
pub struct HttpMetarClient {
    base_url: String,
    http: Client,
}

impl HttpMetarClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherFetcher for HttpMetarClient {
    async fn fetch_metar(&self, station_id: &str) -> CoreResult<Metar> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("loc", station_id)])
            .send()
            .await
            .map_err(|e| {
                CoreError::WeatherServiceError(format!("Failed to reach METAR service: {}", e))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            CoreError::WeatherServiceError(format!("Failed to read METAR response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(CoreError::WeatherServiceError(format!(
                "METAR request for {} failed with status {}: {}",
                station_id,
                status,
                truncate_body(&body),
            )));
        }

        serde_json::from_str::<Metar>(&body).map_err(|e| {
            CoreError::WeatherServiceError(format!("Failed to parse METAR JSON: {}", e))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
