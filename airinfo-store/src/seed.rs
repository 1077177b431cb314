use airinfo_core::{Airport, AirportWriter, CoreResult};
use tracing::info;

pub fn sample_airports() -> Vec<Airport> {
    vec![
        Airport::new("KGAG", "Gage Airport"),
        Airport::new("KLOL", "Derby Field"),
        Airport::new("KBUM", "Butler Memorial Airport"),
        Airport::new("KSTL", "St. Louis Lambert International Airport"),
        Airport::new("KORD", "O'Hare International Airport"),
    ]
}

/// Replace the catalog with the sample airports.
///
/// Must finish before the listener accepts traffic.
pub async fn seed_airports(store: &dyn AirportWriter) -> CoreResult<usize> {
    let removed = store.delete_all().await?;
    info!("Cleared {} airports", removed);

    let airports = sample_airports();
    for airport in &airports {
        store.save(airport).await?;
        info!("Saved {}", airport);
    }

    info!("Seeded {} airports", airports.len());
    Ok(airports.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use airinfo_core::CoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        rows: Mutex<Vec<Airport>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl AirportWriter for RecordingStore {
        async fn delete_all(&self) -> CoreResult<u64> {
            let mut rows = self.rows.lock().unwrap();
            let n = rows.len() as u64;
            rows.clear();
            Ok(n)
        }

        async fn save(&self, airport: &Airport) -> CoreResult<()> {
            if self.fail_on == Some(airport.id.as_str()) {
                return Err(CoreError::StoreUnavailable("write rejected".to_string()));
            }
            self.rows.lock().unwrap().push(airport.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_seed_replaces_existing_rows() {
        let store = RecordingStore::default();
        store.rows.lock().unwrap().push(Airport::new("EGLL", "Heathrow"));

        let count = seed_airports(&store).await.unwrap();

        assert_eq!(count, 5);
        let rows = store.rows.lock().unwrap();
        assert_eq!(*rows, sample_airports());
        assert!(rows.iter().all(|a| a.id != "EGLL"));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = RecordingStore::default();
        seed_airports(&store).await.unwrap();
        seed_airports(&store).await.unwrap();

        assert_eq!(store.rows.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_seed_propagates_write_failure() {
        let store = RecordingStore { fail_on: Some("KSTL"), ..Default::default() };

        let err = seed_airports(&store).await.unwrap_err();
        assert!(matches!(err, CoreError::StoreUnavailable(_)));
    }
}
