use serde::Serialize;
use std::fmt;

/// Service classes offered across the fleet
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceClass {
    AcSleeper,
    AcSeater,
    NonAcSeater,
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceClass::AcSleeper => "AC Sleeper",
            ServiceClass::AcSeater => "AC Seater",
            ServiceClass::NonAcSeater => "Non-AC Seater",
        };
        f.write_str(label)
    }
}

/// A bus company profile: service class, rating, and amenity set
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Operator {
    pub name: &'static str,
    pub service_class: ServiceClass,
    pub rating: f32,
    pub amenities: &'static [&'static str],
}

/// The roster generated offers draw operators from
pub fn operators() -> &'static [Operator] {
    &OPERATORS
}

static OPERATORS: [Operator; 8] = [
    Operator {
        name: "Volvo Express",
        service_class: ServiceClass::AcSleeper,
        rating: 4.7,
        amenities: &["WiFi", "AC", "Charging", "Blanket"],
    },
    Operator {
        name: "Royal Travels",
        service_class: ServiceClass::AcSeater,
        rating: 4.5,
        amenities: &["AC", "Water", "Snacks"],
    },
    Operator {
        name: "Greenline Deluxe",
        service_class: ServiceClass::NonAcSeater,
        rating: 4.2,
        amenities: &["Water", "Fan"],
    },
    Operator {
        name: "Star Cruiser",
        service_class: ServiceClass::AcSleeper,
        rating: 4.8,
        amenities: &["WiFi", "AC", "TV", "Charging", "Blanket"],
    },
    Operator {
        name: "City Connect",
        service_class: ServiceClass::AcSeater,
        rating: 4.3,
        amenities: &["AC", "Charging", "Water"],
    },
    Operator {
        name: "Supreme Travels",
        service_class: ServiceClass::AcSleeper,
        rating: 4.6,
        amenities: &["WiFi", "AC", "Charging", "Snacks", "Blanket"],
    },
    Operator {
        name: "Eagle Express",
        service_class: ServiceClass::NonAcSeater,
        rating: 4.0,
        amenities: &["Fan", "Water"],
    },
    Operator {
        name: "Paradise Lines",
        service_class: ServiceClass::AcSeater,
        rating: 4.4,
        amenities: &["AC", "WiFi", "Charging"],
    },
];
