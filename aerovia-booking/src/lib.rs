pub mod orchestrator;
pub mod ticket;

pub use orchestrator::{BookingConfirmation, BookingError, BookingOrchestrator};
pub use ticket::{TicketDocument, TicketRenderer};
