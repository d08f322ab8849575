use aerovia_core::PriceQuote;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rolling demand window for a single flight. Created lazily on the first
/// booking attempt; `first_attempt_at` anchors the current window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTrackingRecord {
    pub flight_id: Uuid,
    pub attempt_count: u32,
    pub first_attempt_at: DateTime<Utc>,
    /// The price that will be charged for the next qualifying attempt.
    pub current_price: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Surge policy parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurgeRules {
    /// Window age (minutes, inclusive) up to which an attempt may recompute
    /// the price.
    pub recompute_window_minutes: i64,

    /// Window age (minutes) at which the next attempt starts a fresh window
    /// at the base price.
    pub reset_window_minutes: i64,

    /// Attempt count at which surge pricing kicks in.
    pub attempt_threshold: u32,

    /// Multiplier applied to the base price once surged.
    pub surge_multiplier: Decimal,
}

impl Default for SurgeRules {
    fn default() -> Self {
        Self {
            recompute_window_minutes: 5,
            reset_window_minutes: 10,
            attempt_threshold: 3,
            surge_multiplier: Decimal::new(110, 2), // 1.10
        }
    }
}

impl SurgeRules {
    /// Evaluate one booking attempt against the flight's existing tracking
    /// record, returning the updated record and the quote to charge.
    ///
    /// Three tiers by window age:
    /// - at most `recompute_window_minutes` (inclusive): count the attempt
    ///   and recompute. At or past `attempt_threshold` the price becomes
    ///   base x multiplier; the record stores whatever price was computed,
    ///   so once surged the window stays surged.
    /// - strictly between the two windows: count the attempt but charge the
    ///   stored price unchanged. No recomputation.
    /// - at or past `reset_window_minutes`: start over at the base price,
    ///   same as a flight with no record.
    ///
    /// The two-tier decay is deliberate policy, not an artifact: a window
    /// stays price-sensitive for five minutes, then only counts attempts
    /// until it ages out at ten.
    pub fn apply_attempt(
        &self,
        existing: Option<&PriceTrackingRecord>,
        flight_id: Uuid,
        base_price: Decimal,
        now: DateTime<Utc>,
    ) -> (PriceTrackingRecord, PriceQuote) {
        let record = match existing {
            Some(r) if now - r.first_attempt_at < Duration::minutes(self.reset_window_minutes) => r,
            // First attempt ever, or the previous window has aged out.
            _ => {
                let record = PriceTrackingRecord {
                    flight_id,
                    attempt_count: 1,
                    first_attempt_at: now,
                    current_price: base_price,
                    updated_at: now,
                };
                let quote = PriceQuote { price: base_price, surge_applied: false };
                return (record, quote);
            }
        };

        let age = now - record.first_attempt_at;
        let attempt_count = record.attempt_count + 1;

        if age <= Duration::minutes(self.recompute_window_minutes) {
            let (price, surge_applied) = if attempt_count >= self.attempt_threshold {
                (base_price * self.surge_multiplier, true)
            } else {
                (record.current_price, false)
            };
            let updated = PriceTrackingRecord {
                attempt_count,
                current_price: price,
                updated_at: now,
                ..record.clone()
            };
            (updated, PriceQuote { price, surge_applied })
        } else {
            // Cooling tier: keep counting, freeze the last computed price.
            let updated = PriceTrackingRecord {
                attempt_count,
                updated_at: now,
                ..record.clone()
            };
            let quote = PriceQuote { price: record.current_price, surge_applied: false };
            (updated, quote)
        }
    }
}
