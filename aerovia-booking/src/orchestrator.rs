use aerovia_core::pnr;
use aerovia_core::repository::{BookingLog, FlightCatalog, PriceTracker, WalletLedger};
use aerovia_core::{Booking, Flight, LedgerError};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Outcome of a successful booking transaction.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub flight: Flight,
    pub surge_applied: bool,
    pub new_balance: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Flight not found: {0}")]
    FlightNotFound(Uuid),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Insufficient wallet balance: {balance} available, {required} required")]
    InsufficientFunds { balance: Decimal, required: Decimal },

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Booking could not be persisted: {0}")]
    Persistence(String),
}

impl From<LedgerError> for BookingError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::WalletNotFound(user) => Self::WalletNotFound(user),
            LedgerError::InsufficientFunds { balance, required } => {
                Self::InsufficientFunds { balance, required }
            }
            LedgerError::Storage(msg) => Self::Storage(msg),
        }
    }
}

/// Composes catalog, price tracker, wallet ledger and booking log into the
/// booking transaction.
///
/// The steps are independent atomic storage operations, not one database
/// transaction: a persistence failure after the debit leaves the user
/// charged with no booking created. That gap is part of the contract and is
/// logged loudly rather than compensated.
pub struct BookingOrchestrator {
    catalog: Arc<dyn FlightCatalog>,
    tracker: Arc<dyn PriceTracker>,
    ledger: Arc<dyn WalletLedger>,
    log: Arc<dyn BookingLog>,
}

impl BookingOrchestrator {
    pub fn new(
        catalog: Arc<dyn FlightCatalog>,
        tracker: Arc<dyn PriceTracker>,
        ledger: Arc<dyn WalletLedger>,
        log: Arc<dyn BookingLog>,
    ) -> Self {
        Self {
            catalog,
            tracker,
            ledger,
            log,
        }
    }

    pub async fn book_flight(
        &self,
        flight_id: Uuid,
        passenger_name: &str,
        user_id: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let flight = self
            .catalog
            .get_flight(flight_id)
            .await
            .map_err(|e| BookingError::Storage(e.to_string()))?
            .ok_or(BookingError::FlightNotFound(flight_id))?;

        let now = Utc::now();
        let quote = self
            .tracker
            .quote_price(flight.id, flight.base_price, now)
            .await
            .map_err(|e| BookingError::Storage(e.to_string()))?;

        // The attempt recorded above is deliberately not rolled back if the
        // debit fails: failed bookings still count toward surge.
        let new_balance = self.ledger.debit_if_sufficient(user_id, quote.price).await?;

        let booking = Booking::new(
            pnr::generate_pnr(now),
            flight.id,
            passenger_name.to_string(),
            quote.price,
            now,
        );

        let booking = match self.log.append(booking).await {
            Ok(booking) => booking,
            Err(e) => {
                // The debit has already committed and there is no
                // compensating refund.
                error!(
                    user_id,
                    %flight_id,
                    amount = %quote.price,
                    "booking persistence failed after wallet debit: {e}"
                );
                return Err(BookingError::Persistence(e.to_string()));
            }
        };

        info!(
            pnr = %booking.pnr,
            %flight_id,
            price = %quote.price,
            surge = quote.surge_applied,
            "booking confirmed"
        );

        Ok(BookingConfirmation {
            booking,
            flight,
            surge_applied: quote.surge_applied,
            new_balance,
        })
    }
}
