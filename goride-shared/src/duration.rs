use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock length of a trip, kept as whole hours plus minutes.
///
/// Schedules quote durations like "3h 30m"; arithmetic against departure
/// times happens in minutes, so the two fields are never normalized into
/// each other after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl TripDuration {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    pub fn to_chrono(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.total_minutes() as i64)
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole-hour trips render as "3h 00m", matching the published schedules
        if self.minutes > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}h 00m", self.hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_minutes() {
        assert_eq!(TripDuration::new(3, 30).to_string(), "3h 30m");
        assert_eq!(TripDuration::new(12, 15).to_string(), "12h 15m");
    }

    #[test]
    fn test_display_whole_hours() {
        assert_eq!(TripDuration::new(6, 0).to_string(), "6h 00m");
    }

    #[test]
    fn test_total_minutes() {
        assert_eq!(TripDuration::new(3, 45).total_minutes(), 225);
        assert_eq!(TripDuration::new(0, 0).total_minutes(), 0);
    }
}
