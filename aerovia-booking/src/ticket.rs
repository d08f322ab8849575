use aerovia_core::{Booking, Flight};

/// A downloadable ticket artifact.
#[derive(Debug, Clone)]
pub struct TicketDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Renders a completed booking into a downloadable ticket document.
///
/// Collaborator boundary: visual layout is out of scope, so the artifact is
/// plain text carrying the booking, flight and payment details.
pub struct TicketRenderer;

impl TicketRenderer {
    pub fn render(&self, booking: &Booking, flight: &Flight) -> TicketDocument {
        let body = format!(
            "FLIGHT TICKET\n\
             ============================================================\n\
             \n\
             Booking Details\n\
             PNR: {pnr}\n\
             Passenger Name: {passenger}\n\
             \n\
             Flight Details\n\
             Airline: {airline}\n\
             Flight Number: {flight_number}\n\
             \n\
             Route: {departure_city} -> {arrival_city}\n\
             Departure: {departure_time}\n\
             Arrival: {arrival_time}\n\
             \n\
             Payment Details\n\
             Price Paid: {price:.2}\n\
             Booking Date: {booking_date}\n",
            pnr = booking.pnr,
            passenger = booking.passenger_name,
            airline = flight.airline,
            flight_number = flight.flight_number,
            departure_city = flight.departure_city,
            arrival_city = flight.arrival_city,
            departure_time = flight.departure_time.to_rfc3339(),
            arrival_time = flight.arrival_time.to_rfc3339(),
            price = booking.price_paid,
            booking_date = booking.booking_date.to_rfc3339(),
        );

        TicketDocument {
            file_name: format!("ticket-{}.txt", booking.pnr),
            content_type: "text/plain; charset=utf-8",
            body: body.into_bytes(),
        }
    }
}
