pub mod seatmap;
pub mod session;

pub use seatmap::{SeatLayout, SeatMap, SeatMapError, SeatState, SeatToggle};
pub use session::{
    validate_passenger, BookingError, BookingSession, BookingSummary, PassengerField,
    PassengerInfo, SeatingConfig, SessionStatus, Ticket, TICKET_PREFIX,
};
