use aerovia_core::repository::StorageResult;
use aerovia_core::{Booking, BookingLog};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Append-only booking history. Bookings are immutable once written.
pub struct InMemoryBookingLog {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingLog {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBookingLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingLog for InMemoryBookingLog {
    async fn append(&self, booking: Booking) -> StorageResult<Booking> {
        let mut bookings = self.bookings.lock().await;
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn get(&self, booking_id: Uuid) -> StorageResult<Option<Booking>> {
        let bookings = self.bookings.lock().await;
        Ok(bookings.iter().find(|b| b.id == booking_id).cloned())
    }

    async fn list_recent(&self) -> StorageResult<Vec<Booking>> {
        let bookings = self.bookings.lock().await;
        let mut listed: Vec<Booking> = bookings.clone();
        listed.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
        Ok(listed)
    }
}
