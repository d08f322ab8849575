use aerovia_core::Flight;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Demo catalog standing in for external catalog management, which is out
/// of scope. Departure times are relative to process start.
pub fn demo_flights() -> Vec<Flight> {
    let base = Utc::now() + Duration::days(3);

    let specs = [
        ("AI-202", "Air India", "Delhi", "Mumbai", 2, dec!(4500.00)),
        ("6E-512", "IndiGo", "Mumbai", "Bengaluru", 5, dec!(3200.00)),
        ("UK-810", "Vistara", "Delhi", "Goa", 8, dec!(5100.00)),
        ("SG-301", "SpiceJet", "Chennai", "Kolkata", 11, dec!(3800.00)),
        ("6E-204", "IndiGo", "Hyderabad", "Delhi", 14, dec!(4100.00)),
        ("AI-115", "Air India", "Mumbai", "London", 20, dec!(38500.00)),
    ];

    specs
        .into_iter()
        .map(|(number, airline, from, to, offset_hours, price)| {
            let departure = base + Duration::hours(offset_hours);
            Flight {
                id: Uuid::new_v4(),
                flight_number: number.to_string(),
                airline: airline.to_string(),
                departure_city: from.to_string(),
                arrival_city: to.to_string(),
                departure_time: departure,
                arrival_time: departure + Duration::hours(2),
                base_price: price,
            }
        })
        .collect()
}
