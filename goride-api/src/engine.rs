use crate::app_config::{DelayConfig, EngineConfig};
use crate::search::{SearchError, SearchRequest};
use chrono::NaiveDate;
use goride_booking::{
    validate_passenger, BookingError, BookingSession, PassengerInfo, SeatingConfig, Ticket,
};
use goride_chat::{ChatMessage, ChatResponder, ChatTranscript};
use goride_offer::{BusGenerator, BusOffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::info;

/// Owns the generator, the responder, and the session rng. One engine per
/// browsing session; engines share nothing, so independent sessions cannot
/// observe each other's state.
pub struct Engine {
    generator: BusGenerator,
    responder: ChatResponder,
    seating: SeatingConfig,
    delays: DelayConfig,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            generator: BusGenerator::new(config.generator),
            responder: ChatResponder::new(),
            seating: config.seating,
            delays: config.delays,
            rng,
        }
    }

    /// Validate and run one search.
    ///
    /// Validation errors surface before the simulated "searching" pause;
    /// the pause itself is awaited here, so a later search can never
    /// complete ahead of an earlier one.
    pub async fn search(&mut self, request: &SearchRequest) -> Result<Vec<BusOffer>, SearchError> {
        if let Err(e) = request.validate() {
            info!("Search rejected: {}", e);
            return Err(e);
        }
        self.pause(self.delays.search_ms).await;

        let offers = self
            .generator
            .generate(&request.origin, &request.destination, &mut self.rng);
        info!(
            "Search {} → {} returned {} buses",
            request.origin,
            request.destination,
            offers.len()
        );
        Ok(offers)
    }

    /// Open seat selection for a chosen offer. Rolls a fresh seat map and
    /// starts a new session; any previous session is simply dropped.
    pub fn open_seat_selection(
        &mut self,
        bus: &BusOffer,
        travel_date: NaiveDate,
        passengers: u32,
    ) -> BookingSession {
        BookingSession::new(
            bus.clone(),
            travel_date,
            passengers,
            &self.seating,
            &mut self.rng,
        )
    }

    /// Finalize a session into a ticket after the simulated "processing"
    /// pause. Contact-field errors stay synchronous; only a valid booking
    /// pays the pause.
    pub async fn confirm_booking(
        &mut self,
        session: &mut BookingSession,
        passenger: PassengerInfo,
    ) -> Result<Ticket, BookingError> {
        validate_passenger(&passenger)?;
        self.pause(self.delays.booking_ms).await;

        match session.finalize(passenger, &mut self.rng) {
            Ok(ticket) => {
                info!("Booking confirmed: {}", ticket.ticket_id);
                Ok(ticket)
            }
            Err(e) => {
                info!("Failed to confirm booking: {}", e);
                Err(e)
            }
        }
    }

    /// One chat exchange: append the user message, wait out the typing
    /// indicator, append and return the bot reply.
    pub async fn chat(&mut self, transcript: &mut ChatTranscript, text: &str) -> ChatMessage {
        transcript.push_user(text);

        let jitter = if self.delays.typing_jitter_ms > 0 {
            self.rng.gen_range(0..self.delays.typing_jitter_ms)
        } else {
            0
        };
        self.pause(self.delays.typing_base_ms + jitter).await;

        let reply = self.responder.respond(text);
        transcript.push_bot(reply).clone()
    }

    pub fn responder(&self) -> &ChatResponder {
        &self.responder
    }

    pub fn generator(&self) -> &BusGenerator {
        &self.generator
    }

    async fn pause(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
