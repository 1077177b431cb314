use async_trait::async_trait;
use crate::{CoreResult, Metar};

#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Fetch the current METAR for a station code.
    ///
    /// Any transport failure, non-success status or unexpected body shape
    /// must surface as `CoreError::WeatherServiceError`.
    async fn fetch_metar(&self, station_id: &str) -> CoreResult<Metar>;
}
