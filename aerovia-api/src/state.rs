use aerovia_booking::{BookingOrchestrator, TicketRenderer};
use aerovia_core::repository::{BookingLog, FlightCatalog, WalletLedger};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FlightCatalog>,
    pub ledger: Arc<dyn WalletLedger>,
    pub bookings: Arc<dyn BookingLog>,
    pub orchestrator: Arc<BookingOrchestrator>,
    pub tickets: Arc<TicketRenderer>,
}
