use async_trait::async_trait;
use crate::{Airport, CoreResult};

/// Read side of the airport catalog
#[async_trait]
pub trait AirportReader: Send + Sync {
    async fn find_all(&self) -> CoreResult<Vec<Airport>>;

    /// `Ok(None)` when no record carries `id`; errors are reserved for store faults.
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Airport>>;
}

/// Write side of the airport catalog, used only by the startup seeder
#[async_trait]
pub trait AirportWriter: Send + Sync {
    async fn delete_all(&self) -> CoreResult<u64>;

    async fn save(&self, airport: &Airport) -> CoreResult<()>;
}
