use aerovia_core::repository::StorageResult;
use aerovia_core::{PriceQuote, PriceTracker};
use aerovia_pricing::{PriceTrackingRecord, SurgeRules};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Tracks booking-attempt demand per flight and derives the applicable
/// price. The whole read-evaluate-write runs inside one critical section,
/// so concurrent attempts on the same flight serialize and no increment is
/// lost.
pub struct SurgeTracker {
    rules: SurgeRules,
    records: Mutex<HashMap<Uuid, PriceTrackingRecord>>,
}

impl SurgeTracker {
    pub fn new(rules: SurgeRules) -> Self {
        Self {
            rules,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Current tracking record for a flight, if any attempt has been made.
    pub async fn record(&self, flight_id: Uuid) -> Option<PriceTrackingRecord> {
        self.records.lock().await.get(&flight_id).cloned()
    }
}

#[async_trait]
impl PriceTracker for SurgeTracker {
    async fn quote_price(
        &self,
        flight_id: Uuid,
        base_price: Decimal,
        now: DateTime<Utc>,
    ) -> StorageResult<PriceQuote> {
        let mut records = self.records.lock().await;
        let (updated, quote) =
            self.rules
                .apply_attempt(records.get(&flight_id), flight_id, base_price, now);
        records.insert(flight_id, updated);
        Ok(quote)
    }
}
