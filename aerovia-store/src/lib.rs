pub mod app_config;
pub mod booking_log;
pub mod catalog;
pub mod seed;
pub mod surge_tracker;
pub mod wallet;

pub use booking_log::InMemoryBookingLog;
pub use catalog::InMemoryFlightCatalog;
pub use surge_tracker::SurgeTracker;
pub use wallet::InMemoryWalletLedger;
