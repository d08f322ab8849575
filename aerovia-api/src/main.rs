use std::net::SocketAddr;
use std::sync::Arc;

use aerovia_api::{app, AppState};
use aerovia_booking::{BookingOrchestrator, TicketRenderer};
use aerovia_store::{InMemoryBookingLog, InMemoryFlightCatalog, InMemoryWalletLedger, SurgeTracker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerovia_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = aerovia_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Aerovia API on port {}", config.server.port);

    let catalog = Arc::new(InMemoryFlightCatalog::new(config.catalog.page_size));
    catalog.load(aerovia_store::seed::demo_flights()).await;

    let ledger = Arc::new(InMemoryWalletLedger::new());
    ledger
        .open_wallet(&config.wallet.default_user, config.wallet.opening_balance)
        .await;

    let tracker = Arc::new(SurgeTracker::new(config.surge.clone()));
    let bookings = Arc::new(InMemoryBookingLog::new());

    let orchestrator = Arc::new(BookingOrchestrator::new(
        catalog.clone(),
        tracker,
        ledger.clone(),
        bookings.clone(),
    ));

    let state = AppState {
        catalog,
        ledger,
        bookings,
        orchestrator,
        tickets: Arc::new(TicketRenderer),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
