use crate::seatmap::{SeatLayout, SeatMap, SeatMapError, SeatToggle};
use chrono::{DateTime, NaiveDate, Utc};
use goride_offer::BusOffer;
use goride_shared::{format_inr, Masked};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed brand tag prefixing every ticket id
pub const TICKET_PREFIX: &str = "GORIDE-";

/// Seat-grid tunables applied to every new session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    pub layout: SeatLayout,
    pub min_booked: u32,
    pub max_booked: u32,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            layout: SeatLayout::default(),
            min_booked: 6,
            max_booked: 15,
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Selecting,
    Confirmed,
    Dismissed,
}

/// Contact details entered at booking time. Email and phone are masked in
/// Debug output so sessions and tickets can be logged safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInfo {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
}

impl PassengerInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: Masked::new(email.into()),
            phone: Masked::new(phone.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerField {
    Name,
    Email,
    Phone,
}

impl fmt::Display for PassengerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PassengerField::Name => "name",
            PassengerField::Email => "email",
            PassengerField::Phone => "phone",
        };
        f.write_str(label)
    }
}

/// Derived view of the live selection, recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    /// "A1, A3" in selection order, or "—" when nothing is selected
    pub seats: String,
    pub seat_count: usize,
    pub total: i64,
    pub total_display: String,
    /// True iff at least one seat is selected
    pub can_book: bool,
}

/// The in-progress state for one chosen bus: the offer snapshot, the live
/// seat map, and the derived totals. One session per bus selection; a new
/// selection starts a new session.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub bus: BusOffer,
    pub travel_date: NaiveDate,
    pub passenger_count: u32,
    seat_map: SeatMap,
    status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingSession {
    /// Open seat selection for a chosen offer. Rolls a fresh seat map with
    /// the passenger count as the selection cap.
    pub fn new(
        bus: BusOffer,
        travel_date: NaiveDate,
        passenger_count: u32,
        seating: &SeatingConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let seat_map = SeatMap::generate(
            seating.layout,
            seating.min_booked,
            seating.max_booked,
            passenger_count,
            rng,
        );
        Self {
            id: Uuid::from_u128(rng.gen()),
            bus,
            travel_date,
            passenger_count,
            seat_map,
            status: SessionStatus::Selecting,
            created_at: Utc::now(),
        }
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    pub fn toggle_seat(&mut self, seat_id: &str) -> Result<SeatToggle, SeatMapError> {
        self.seat_map.toggle(seat_id)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn summary(&self) -> BookingSummary {
        let seats = self.seat_map.selected_seats();
        let total = seats.len() as i64 * self.bus.price;
        BookingSummary {
            seats: if seats.is_empty() {
                "—".to_string()
            } else {
                seats.join(", ")
            },
            seat_count: seats.len(),
            total,
            total_display: format_inr(total),
            can_book: !seats.is_empty(),
        }
    }

    /// The seat-selection modal was closed without booking
    pub fn dismiss(&mut self) {
        if self.status == SessionStatus::Selecting {
            self.status = SessionStatus::Dismissed;
        }
    }

    /// Finalize the session into a Ticket.
    ///
    /// Requires an open session, at least one selected seat, and non-blank
    /// name/email/phone — whitespace-only counts as blank. Nothing beyond
    /// non-blankness is checked (no email/phone shape validation). On
    /// success the session is closed; the next bus selection starts a new
    /// one.
    pub fn finalize(
        &mut self,
        passenger: PassengerInfo,
        rng: &mut impl Rng,
    ) -> Result<Ticket, BookingError> {
        if self.status != SessionStatus::Selecting {
            return Err(BookingError::SessionClosed(self.status));
        }
        validate_passenger(&passenger)?;

        let seats = self.seat_map.selected_seats().to_vec();
        if seats.is_empty() {
            return Err(BookingError::NoSeatsSelected);
        }

        let ticket = Ticket {
            ticket_id: format!("{}{}", TICKET_PREFIX, rng.gen_range(100_000..1_000_000)),
            bus: self.bus.clone(),
            seats,
            passenger,
            travel_date: self.travel_date,
            total: self.summary().total,
            issued_at: Utc::now(),
        };
        self.status = SessionStatus::Confirmed;
        Ok(ticket)
    }
}

/// Non-blankness check on the contact fields, in form order. Callers that
/// pause before finalizing run this first so field errors stay synchronous.
pub fn validate_passenger(passenger: &PassengerInfo) -> Result<(), BookingError> {
    if passenger.name.trim().is_empty() {
        return Err(BookingError::MissingField(PassengerField::Name));
    }
    if passenger.email.expose().trim().is_empty() {
        return Err(BookingError::MissingField(PassengerField::Email));
    }
    if passenger.phone.expose().trim().is_empty() {
        return Err(BookingError::MissingField(PassengerField::Phone));
    }
    Ok(())
}

/// The immutable record minted on successful finalization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub bus: BusOffer,
    /// Seat ids in the order they were selected
    pub seats: Vec<String>,
    pub passenger: PassengerInfo,
    pub travel_date: NaiveDate,
    pub total: i64,
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    pub fn total_display(&self) -> String {
        format_inr(self.total)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("passenger {0} is required")]
    MissingField(PassengerField),

    #[error("no seats selected")]
    NoSeatsSelected,

    #[error("booking session is already {0:?}")]
    SessionClosed(SessionStatus),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use goride_catalog::ServiceClass;
    use goride_shared::TripDuration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn offer(price: i64) -> BusOffer {
        BusOffer {
            id: Uuid::nil(),
            operator: "Star Cruiser".to_string(),
            service_class: ServiceClass::AcSleeper,
            rating: 4.8,
            amenities: vec!["WiFi".to_string()],
            origin: "Mumbai".to_string(),
            destination: "Pune".to_string(),
            departure: NaiveTime::from_hms_opt(21, 30, 0).unwrap(),
            arrival: NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
            duration: TripDuration::new(3, 30),
            price,
            seats_left: 20,
        }
    }

    fn open_seating() -> SeatingConfig {
        // No pre-booked seats so tests can pick any seat id
        SeatingConfig {
            min_booked: 0,
            max_booked: 0,
            ..SeatingConfig::default()
        }
    }

    fn travel_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn passenger() -> PassengerInfo {
        PassengerInfo::new("Asha Rao", "asha@example.com", "9876543210")
    }

    #[test]
    fn test_summary_tracks_selection() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = BookingSession::new(offer(500), travel_date(), 2, &open_seating(), &mut rng);

        let empty = session.summary();
        assert_eq!(empty.seats, "—");
        assert_eq!(empty.total, 0);
        assert!(!empty.can_book);

        session.toggle_seat("A1").unwrap();
        session.toggle_seat("A3").unwrap();

        let picked = session.summary();
        assert_eq!(picked.seats, "A1, A3");
        assert_eq!(picked.total, 1000);
        assert_eq!(picked.total_display, "₹1,000");
        assert!(picked.can_book);
    }

    #[test]
    fn test_passenger_cap_comes_from_the_search() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = BookingSession::new(offer(500), travel_date(), 2, &open_seating(), &mut rng);

        session.toggle_seat("A1").unwrap();
        session.toggle_seat("A3").unwrap();
        assert_eq!(
            session.toggle_seat("A4"),
            Err(SeatMapError::CapacityReached { capacity: 2 })
        );
        assert_eq!(session.seat_map().selected_seats(), ["A1", "A3"]);
    }

    #[test]
    fn test_finalize_requires_contact_fields() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = BookingSession::new(offer(450), travel_date(), 1, &open_seating(), &mut rng);
        session.toggle_seat("B1").unwrap();

        let blank_name = PassengerInfo::new("", "a@b.c", "123");
        assert_eq!(
            session.finalize(blank_name, &mut rng),
            Err(BookingError::MissingField(PassengerField::Name))
        );

        let blank_email = PassengerInfo::new("Asha", "   ", "123");
        assert_eq!(
            session.finalize(blank_email, &mut rng),
            Err(BookingError::MissingField(PassengerField::Email))
        );

        let blank_phone = PassengerInfo::new("Asha", "a@b.c", "\t");
        assert_eq!(
            session.finalize(blank_phone, &mut rng),
            Err(BookingError::MissingField(PassengerField::Phone))
        );

        // Rejections leave the session open
        assert_eq!(session.status(), SessionStatus::Selecting);
    }

    #[test]
    fn test_finalize_mints_a_ticket() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = BookingSession::new(offer(780), travel_date(), 3, &open_seating(), &mut rng);
        for id in ["C4", "A1", "B2"] {
            session.toggle_seat(id).unwrap();
        }

        let ticket = session.finalize(passenger(), &mut rng).unwrap();

        assert!(ticket.ticket_id.starts_with(TICKET_PREFIX));
        let digits = &ticket.ticket_id[TICKET_PREFIX.len()..];
        assert_eq!(digits.len(), 6);
        let number: u32 = digits.parse().unwrap();
        assert!((100_000..=999_999).contains(&number));

        // Seats listed in selection order, total = seats × fare
        assert_eq!(ticket.seats, ["C4", "A1", "B2"]);
        assert_eq!(ticket.total, 3 * 780);
        assert_eq!(ticket.total_display(), "₹2,340");
        assert_eq!(session.status(), SessionStatus::Confirmed);
    }

    #[test]
    fn test_finalize_twice_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = BookingSession::new(offer(500), travel_date(), 1, &open_seating(), &mut rng);
        session.toggle_seat("A1").unwrap();

        session.finalize(passenger(), &mut rng).unwrap();
        assert_eq!(
            session.finalize(passenger(), &mut rng),
            Err(BookingError::SessionClosed(SessionStatus::Confirmed))
        );
    }

    #[test]
    fn test_dismissed_session_cannot_finalize() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = BookingSession::new(offer(500), travel_date(), 1, &open_seating(), &mut rng);
        session.toggle_seat("A1").unwrap();
        session.dismiss();

        assert_eq!(
            session.finalize(passenger(), &mut rng),
            Err(BookingError::SessionClosed(SessionStatus::Dismissed))
        );
    }

    #[test]
    fn test_finalize_needs_a_seat() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = BookingSession::new(offer(500), travel_date(), 1, &open_seating(), &mut rng);

        assert_eq!(
            session.finalize(passenger(), &mut rng),
            Err(BookingError::NoSeatsSelected)
        );
    }
}
