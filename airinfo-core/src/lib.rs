pub mod airport;
pub mod metar;
pub mod repository;
pub mod weather;
pub mod service;

pub use airport::Airport;
pub use metar::Metar;
pub use repository::{AirportReader, AirportWriter};
pub use service::{AirportInfoService, ServiceTimeouts};
pub use weather::WeatherFetcher;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Airport store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Weather service error: {0}")]
    WeatherServiceError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
