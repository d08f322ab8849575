use std::sync::Arc;

use aerovia_api::{app, AppState};
use aerovia_booking::{BookingOrchestrator, TicketRenderer};
use aerovia_core::repository::{BookingLog, StorageResult};
use aerovia_core::{Booking, Flight};
use async_trait::async_trait;
use aerovia_pricing::SurgeRules;
use aerovia_store::{
    InMemoryBookingLog, InMemoryFlightCatalog, InMemoryWalletLedger, SurgeTracker,
};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

const USER: &str = "default_user";

fn test_flight(number: &str, airline: &str, from: &str, to: &str) -> Flight {
    let departure = Utc::now() + Duration::days(2);
    Flight {
        id: Uuid::new_v4(),
        flight_number: number.to_string(),
        airline: airline.to_string(),
        departure_city: from.to_string(),
        arrival_city: to.to_string(),
        departure_time: departure,
        arrival_time: departure + Duration::hours(2),
        base_price: dec!(1000),
    }
}

async fn test_app(flights: Vec<Flight>) -> Router {
    let catalog = Arc::new(InMemoryFlightCatalog::new(10));
    catalog.load(flights).await;

    let ledger = Arc::new(InMemoryWalletLedger::new());
    ledger.open_wallet(USER, dec!(5000)).await;

    let tracker = Arc::new(SurgeTracker::new(SurgeRules::default()));
    let bookings = Arc::new(InMemoryBookingLog::new());

    let orchestrator = Arc::new(BookingOrchestrator::new(
        catalog.clone(),
        tracker,
        ledger.clone(),
        bookings.clone(),
    ));

    app(AppState {
        catalog,
        ledger,
        bookings,
        orchestrator,
        tickets: Arc::new(TicketRenderer),
    })
}

/// Booking log whose writes always fail, standing in for a dead store.
struct FailingBookingLog;

#[async_trait]
impl BookingLog for FailingBookingLog {
    async fn append(&self, _booking: Booking) -> StorageResult<Booking> {
        Err("booking store unavailable".into())
    }

    async fn get(&self, _booking_id: Uuid) -> StorageResult<Option<Booking>> {
        Ok(None)
    }

    async fn list_recent(&self) -> StorageResult<Vec<Booking>> {
        Ok(Vec::new())
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn book_request(flight_id: Uuid, user_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "flightId": flight_id,
                "passengerName": "Asha Rao",
                "userId": user_id,
            })
            .to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn search_filters_and_caps_the_catalog() {
    let app = test_app(vec![
        test_flight("AV-101", "Aerovia", "Delhi", "Mumbai"),
        test_flight("AV-202", "Aerovia", "Mumbai", "Bengaluru"),
        test_flight("ZX-900", "Zephyr", "Chennai", "Kolkata"),
    ])
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/v1/flights?q=mumbai")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/flights")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn booking_succeeds_and_surges_on_the_third_attempt() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;
    let app = test_app(vec![flight]).await;

    let first = app
        .clone()
        .oneshot(book_request(flight_id, USER))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = json_body(first).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["booking"]["surgeApplied"], json!(false));
    assert_eq!(body["booking"]["price_paid"], json!(1000.0));
    assert_eq!(body["newBalance"], json!(4000.0));
    assert!(body["booking"]["pnr"].as_str().unwrap().starts_with("PNR"));
    assert_eq!(body["booking"]["flight"]["flight_number"], json!("AV-101"));

    let second = app
        .clone()
        .oneshot(book_request(flight_id, USER))
        .await
        .unwrap();
    let body = json_body(second).await;
    assert_eq!(body["booking"]["surgeApplied"], json!(false));
    assert_eq!(body["newBalance"], json!(3000.0));

    let third = app
        .clone()
        .oneshot(book_request(flight_id, USER))
        .await
        .unwrap();
    let body = json_body(third).await;
    assert_eq!(body["booking"]["surgeApplied"], json!(true));
    assert_eq!(body["booking"]["price_paid"], json!(1100.0));
    assert_eq!(body["newBalance"], json!(1900.0));
}

#[tokio::test]
async fn booking_an_unknown_flight_is_404() {
    let app = test_app(vec![test_flight("AV-101", "Aerovia", "Delhi", "Mumbai")]).await;

    let response = app.oneshot(book_request(Uuid::new_v4(), USER)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Flight not found"));
}

#[tokio::test]
async fn booking_without_a_wallet_is_404() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;
    let app = test_app(vec![flight]).await;

    let response = app
        .oneshot(book_request(flight_id, "stranger"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Wallet not found"));
}

#[tokio::test]
async fn booking_past_the_balance_is_400() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;
    let app = test_app(vec![flight]).await;

    // Balance 5000 covers 1000 + 1000 + 1100 + 1100; the fifth attempt
    // (800 left) must be rejected without creating a booking.
    for _ in 0..4 {
        let response = app
            .clone()
            .oneshot(book_request(flight_id, USER))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(book_request(flight_id, USER))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Insufficient wallet balance"));

    let history = app
        .oneshot(
            Request::builder()
                .uri("/v1/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(history).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn history_embeds_flights_most_recent_first() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;
    let app = test_app(vec![flight]).await;

    for _ in 0..2 {
        app.clone()
            .oneshot(book_request(flight_id, USER))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry["flight"]["flight_number"], json!("AV-101"));
    }
    let first: chrono::DateTime<Utc> =
        serde_json::from_value(entries[0]["booking_date"].clone()).unwrap();
    let second: chrono::DateTime<Utc> =
        serde_json::from_value(entries[1]["booking_date"].clone()).unwrap();
    assert!(first >= second);
}

#[tokio::test]
async fn persistence_failure_after_debit_is_500() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;

    let catalog = Arc::new(InMemoryFlightCatalog::new(10));
    catalog.load(vec![flight]).await;

    let ledger = Arc::new(InMemoryWalletLedger::new());
    ledger.open_wallet(USER, dec!(5000)).await;

    let tracker = Arc::new(SurgeTracker::new(SurgeRules::default()));
    let bookings = Arc::new(FailingBookingLog);

    let orchestrator = Arc::new(BookingOrchestrator::new(
        catalog.clone(),
        tracker,
        ledger.clone(),
        bookings.clone(),
    ));

    let app = app(AppState {
        catalog,
        ledger,
        bookings,
        orchestrator,
        tickets: Arc::new(TicketRenderer),
    });

    let response = app.oneshot(book_request(flight_id, USER)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wallet_endpoint_returns_balance_or_404() {
    let app = test_app(vec![]).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/v1/wallet/{USER}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user_id"], json!(USER));
    assert_eq!(body["balance"], json!(5000.0));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/wallet/stranger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ticket_download_round_trip() {
    let flight = test_flight("AV-101", "Aerovia", "Delhi", "Mumbai");
    let flight_id = flight.id;
    let app = test_app(vec![flight]).await;

    let response = app
        .clone()
        .oneshot(book_request(flight_id, USER))
        .await
        .unwrap();
    let body = json_body(response).await;
    let booking_id = body["booking"]["id"].as_str().unwrap().to_string();
    let pnr = body["booking"]["pnr"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/v1/tickets/{booking_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .contains(&pnr));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("FLIGHT TICKET"));
    assert!(text.contains(&pnr));
    assert!(text.contains("Asha Rao"));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/v1/tickets/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
