use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::{Airport, AirportReader, CoreError, CoreResult, Metar, WeatherFetcher};

#[derive(Debug, Clone, Copy)]
pub struct ServiceTimeouts {
    pub store: Duration,
    pub weather: Duration,
}

impl Default for ServiceTimeouts {
    fn default() -> Self {
        Self {
            store: Duration::from_secs(3),
            weather: Duration::from_secs(5),
        }
    }
}

/// Composes the airport catalog and the remote METAR service.
///
/// Every operation performs a single backend call bounded by its timeout.
/// Dropping the returned future drops the pending backend call with it.
#[derive(Clone)]
pub struct AirportInfoService {
    airports: Arc<dyn AirportReader>,
    weather: Arc<dyn WeatherFetcher>,
    timeouts: ServiceTimeouts,
}

impl AirportInfoService {
    pub fn new(
        airports: Arc<dyn AirportReader>,
        weather: Arc<dyn WeatherFetcher>,
        timeouts: ServiceTimeouts,
    ) -> Self {
        Self { airports, weather, timeouts }
    }

    pub async fn all_airports(&self) -> CoreResult<Vec<Airport>> {
        let airports = with_timeout(self.timeouts.store, self.airports.find_all(), |after| {
            CoreError::StoreUnavailable(format!("find_all timed out after {:?}", after))
        })
        .await?;

        tracing::debug!("Loaded {} airports", airports.len());
        Ok(airports)
    }

    /// Absence is an empty success, never an error.
    pub async fn airport_by_id(&self, id: &str) -> CoreResult<Option<Airport>> {
        let airport = with_timeout(self.timeouts.store, self.airports.find_by_id(id), |after| {
            CoreError::StoreUnavailable(format!("find_by_id({}) timed out after {:?}", id, after))
        })
        .await?;

        if airport.is_none() {
            tracing::debug!("No airport stored under {}", id);
        }
        Ok(airport)
    }

    /// The station code is forwarded as-is; it is not checked against the catalog.
    pub async fn metar(&self, id: &str) -> CoreResult<Metar> {
        with_timeout(self.timeouts.weather, self.weather.fetch_metar(id), |after| {
            CoreError::WeatherServiceError(format!("METAR lookup for {} timed out after {:?}", id, after))
        })
        .await
    }
}

async fn with_timeout<T, F>(
    limit: Duration,
    call: F,
    on_elapsed: impl FnOnce(Duration) -> CoreError,
) -> CoreResult<T>
where
    F: Future<Output = CoreResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(on_elapsed(limit)),
    }
}
