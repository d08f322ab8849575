use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Flights are loaded at startup and never mutated by the
/// booking core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub base_price: Decimal,
}

/// A confirmed reservation. Once created it is an immutable historical
/// fact: there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub pnr: String,
    pub flight_id: Uuid,
    pub passenger_name: String,
    /// Snapshot of the quoted price at booking time.
    pub price_paid: Decimal,
    pub booking_date: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        pnr: String,
        flight_id: Uuid,
        passenger_name: String,
        price_paid: Decimal,
        booking_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pnr,
            flight_id,
            passenger_name,
            price_paid,
            booking_date,
        }
    }
}

/// Prepaid balance for a single user. Debited by the booking transaction,
/// topped up only at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub user_id: String,
    pub balance: Decimal,
}

/// What the price tracker answered for one booking attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: Decimal,
    pub surge_applied: bool,
}
