use crate::models::BusOffer;
use chrono::NaiveTime;
use goride_catalog::{operators, FareSchedule};
use goride_shared::TripDuration;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Tunables for offer generation. Defaults mirror the production demo:
/// departures between 05:00 and 22:45, trips of 3 to 14 hours, 4 to 7
/// results per search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_results: u32,
    pub max_results: u32,
    pub earliest_departure_hour: u32,
    pub latest_departure_hour: u32,
    pub min_duration_hours: u32,
    pub max_duration_hours: u32,
    pub min_seats_left: u32,
    pub max_seats_left: u32,
    pub fare: FareSchedule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_results: 4,
            max_results: 7,
            earliest_departure_hour: 5,
            latest_departure_hour: 22,
            min_duration_hours: 3,
            max_duration_hours: 14,
            min_seats_left: 5,
            max_seats_left: 34,
            fare: FareSchedule::default(),
        }
    }
}

/// Produces the randomized, price-sorted candidate list for one search.
pub struct BusGenerator {
    config: GeneratorConfig,
}

impl BusGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fresh offer list for the given leg, sorted ascending by
    /// price. Every call regenerates from scratch; nothing is cached and
    /// successive lists are uncorrelated. Origin/destination strings are
    /// taken as-is; validating them is the caller's job.
    pub fn generate(&self, origin: &str, destination: &str, rng: &mut impl Rng) -> Vec<BusOffer> {
        let count = rng.gen_range(self.config.min_results..=self.config.max_results);
        let mut offers: Vec<BusOffer> = (0..count)
            .map(|_| self.generate_one(origin, destination, rng))
            .collect();
        offers.sort_by_key(|offer| offer.price);
        offers
    }

    fn generate_one(&self, origin: &str, destination: &str, rng: &mut impl Rng) -> BusOffer {
        let roster = operators();
        let operator = &roster[rng.gen_range(0..roster.len())];

        let departure_minute = rng
            .gen_range(self.config.earliest_departure_hour..=self.config.latest_departure_hour)
            .min(23)
            * 60
            + quarter_hour(rng);
        let duration = TripDuration::new(
            rng.gen_range(self.config.min_duration_hours..=self.config.max_duration_hours),
            quarter_hour(rng),
        );
        // Arrival wraps on the 24-hour wall clock with no date rollover:
        // an overnight trip "arrives" at an earlier clock time than it
        // departed.
        let arrival_minute = (departure_minute + duration.total_minutes()) % MINUTES_PER_DAY;

        let price = self.config.fare.quote(duration.hours, rng);
        let seats_left = rng.gen_range(self.config.min_seats_left..=self.config.max_seats_left);

        BusOffer {
            // Identity comes from the injected rng so seeded runs reproduce
            id: Uuid::from_u128(rng.gen()),
            operator: operator.name.to_string(),
            service_class: operator.service_class,
            rating: operator.rating,
            amenities: operator.amenities.iter().map(|a| a.to_string()).collect(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure: wall_clock(departure_minute),
            arrival: wall_clock(arrival_minute),
            duration,
            price,
            seats_left,
        }
    }
}

impl Default for BusGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

fn quarter_hour(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..4) * 15
}

fn wall_clock(minute_of_day: u32) -> NaiveTime {
    // minute_of_day is already reduced mod 24h, so this cannot miss
    NaiveTime::from_num_seconds_from_midnight_opt(minute_of_day * 60, 0).unwrap_or(NaiveTime::MIN)
}
