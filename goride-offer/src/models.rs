use chrono::NaiveTime;
use goride_catalog::ServiceClass;
use goride_shared::TripDuration;
use serde::Serialize;
use uuid::Uuid;

/// A generated bus offer. Immutable once generated; its lifetime is one
/// search result set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BusOffer {
    pub id: Uuid,
    pub operator: String,
    pub service_class: ServiceClass,
    pub rating: f32,
    pub amenities: Vec<String>,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub duration: TripDuration,
    /// Fare per seat, in rupees
    pub price: i64,
    pub seats_left: u32,
}

impl BusOffer {
    /// Timing strip shown on a result card: "22:15 → 03:45 · 5h 30m"
    pub fn timing(&self) -> String {
        format!(
            "{} → {} · {}",
            self.departure.format("%H:%M"),
            self.arrival.format("%H:%M"),
            self.duration
        )
    }

    /// "Mumbai → Pune"
    pub fn leg(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BusOffer {
        BusOffer {
            id: Uuid::nil(),
            operator: "Volvo Express".to_string(),
            service_class: ServiceClass::AcSleeper,
            rating: 4.7,
            amenities: vec!["WiFi".to_string(), "AC".to_string()],
            origin: "Mumbai".to_string(),
            destination: "Pune".to_string(),
            departure: NaiveTime::from_hms_opt(22, 15, 0).unwrap(),
            arrival: NaiveTime::from_hms_opt(3, 45, 0).unwrap(),
            duration: TripDuration::new(5, 30),
            price: 780,
            seats_left: 12,
        }
    }

    #[test]
    fn test_timing_strip() {
        assert_eq!(sample().timing(), "22:15 → 03:45 · 5h 30m");
    }

    #[test]
    fn test_serializes_wall_clock_times() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["departure"], "22:15:00");
        assert_eq!(json["service_class"], "AC_SLEEPER");
    }
}
