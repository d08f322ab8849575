use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Booking, Flight, PriceQuote, Wallet};

pub type StorageResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Read access to the flight catalog
#[async_trait]
pub trait FlightCatalog: Send + Sync {
    async fn get_flight(&self, flight_id: Uuid) -> StorageResult<Option<Flight>>;

    /// Free-text filter across departure city, arrival city and airline,
    /// case-insensitive substring match. Results are capped at the catalog
    /// page size.
    async fn search(&self, query: Option<&str>) -> StorageResult<Vec<Flight>>;
}

/// Demand tracking per flight
#[async_trait]
pub trait PriceTracker: Send + Sync {
    /// Record a booking attempt and return the price to charge for it,
    /// upserting the flight's tracking record atomically. Two concurrent
    /// quotes on the same flight must never lose an attempt increment.
    async fn quote_price(
        &self,
        flight_id: Uuid,
        base_price: Decimal,
        now: DateTime<Utc>,
    ) -> StorageResult<PriceQuote>;
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Insufficient wallet balance: {balance} available, {required} required")]
    InsufficientFunds { balance: Decimal, required: Decimal },

    #[error("Wallet storage failure: {0}")]
    Storage(String),
}

/// Per-user prepaid balances
#[async_trait]
pub trait WalletLedger: Send + Sync {
    async fn balance_of(&self, user_id: &str) -> StorageResult<Option<Wallet>>;

    /// Debit `amount` only if the balance covers it, returning the new
    /// balance. Check and debit commit atomically per user, so concurrent
    /// debits can never jointly overdraw.
    async fn debit_if_sufficient(&self, user_id: &str, amount: Decimal)
        -> Result<Decimal, LedgerError>;
}

/// Append-only booking history
#[async_trait]
pub trait BookingLog: Send + Sync {
    async fn append(&self, booking: Booking) -> StorageResult<Booking>;

    async fn get(&self, booking_id: Uuid) -> StorageResult<Option<Booking>>;

    /// Most recent first.
    async fn list_recent(&self) -> StorageResult<Vec<Booking>>;
}
