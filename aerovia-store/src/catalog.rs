use aerovia_core::repository::StorageResult;
use aerovia_core::{Flight, FlightCatalog};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process flight catalog. Flights are loaded once at startup; the core
/// never mutates them.
pub struct InMemoryFlightCatalog {
    flights: RwLock<Vec<Flight>>,
    page_size: usize,
}

impl InMemoryFlightCatalog {
    pub fn new(page_size: usize) -> Self {
        Self {
            flights: RwLock::new(Vec::new()),
            page_size,
        }
    }

    pub async fn load(&self, flights: Vec<Flight>) {
        let mut guard = self.flights.write().await;
        guard.extend(flights);
    }
}

#[async_trait]
impl FlightCatalog for InMemoryFlightCatalog {
    async fn get_flight(&self, flight_id: Uuid) -> StorageResult<Option<Flight>> {
        let flights = self.flights.read().await;
        Ok(flights.iter().find(|f| f.id == flight_id).cloned())
    }

    async fn search(&self, query: Option<&str>) -> StorageResult<Vec<Flight>> {
        let flights = self.flights.read().await;
        let needle = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);

        let matches = flights
            .iter()
            .filter(|f| match &needle {
                Some(q) => {
                    f.departure_city.to_lowercase().contains(q)
                        || f.arrival_city.to_lowercase().contains(q)
                        || f.airline.to_lowercase().contains(q)
                }
                None => true,
            })
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(matches)
    }
}
