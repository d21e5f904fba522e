use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fare schedule for generated offers: a flat base, an hourly component
/// scaled by trip duration, and bounded uniform noise, rounded to the
/// coarse increments printed on fare boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FareSchedule {
    /// Flat component of every fare, in rupees
    pub base_fare: i64,
    /// Added per whole hour of trip duration
    pub per_hour: i64,
    /// Upper bound (exclusive) of the uniform noise term
    pub noise_max: i64,
    /// Fares are rounded to the nearest multiple of this increment
    pub rounding: i64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: 300,
            per_hour: 80,
            noise_max: 200,
            rounding: 10,
        }
    }
}

impl FareSchedule {
    /// Quote a fare for a trip of the given duration. Total over all
    /// well-formed inputs; the only variation comes from the injected rng.
    pub fn quote(&self, duration_hours: u32, rng: &mut impl Rng) -> i64 {
        let noise = if self.noise_max > 0 {
            rng.gen_range(0..self.noise_max)
        } else {
            0
        };
        let raw = self.base_fare + self.per_hour * i64::from(duration_hours) + noise;
        round_to_increment(raw, self.rounding)
    }
}

/// Round to the nearest multiple of `increment`; halves round up.
pub fn round_to_increment(amount: i64, increment: i64) -> i64 {
    if increment <= 1 {
        return amount;
    }
    ((amount + increment / 2) / increment) * increment
}
