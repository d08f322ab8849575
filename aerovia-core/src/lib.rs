pub mod models;
pub mod pnr;
pub mod repository;

pub use models::{Booking, Flight, PriceQuote, Wallet};
pub use repository::{BookingLog, FlightCatalog, LedgerError, PriceTracker, WalletLedger};
