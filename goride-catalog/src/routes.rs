use goride_shared::TripDuration;
use serde::Serialize;

/// Cities the network serves
pub fn cities() -> &'static [&'static str] {
    &CITIES
}

static CITIES: [&str; 18] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Surat",
    "Nagpur",
    "Indore",
    "Bhopal",
    "Chandigarh",
    "Goa",
    "Kochi",
    "Vizag",
];

/// A promoted route card. Static marketing data, read-only.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PopularRoute {
    pub origin: &'static str,
    pub destination: &'static str,
    pub duration: TripDuration,
    pub base_price: i64,
    pub bus_count: u32,
    pub rating: f32,
}

pub fn popular_routes() -> &'static [PopularRoute] {
    &POPULAR_ROUTES
}

static POPULAR_ROUTES: [PopularRoute; 6] = [
    PopularRoute {
        origin: "Mumbai",
        destination: "Pune",
        duration: TripDuration::new(3, 30),
        base_price: 450,
        bus_count: 28,
        rating: 4.6,
    },
    PopularRoute {
        origin: "Delhi",
        destination: "Jaipur",
        duration: TripDuration::new(5, 15),
        base_price: 650,
        bus_count: 35,
        rating: 4.5,
    },
    PopularRoute {
        origin: "Bangalore",
        destination: "Chennai",
        duration: TripDuration::new(6, 0),
        base_price: 750,
        bus_count: 42,
        rating: 4.7,
    },
    PopularRoute {
        origin: "Hyderabad",
        destination: "Vizag",
        duration: TripDuration::new(8, 30),
        base_price: 950,
        bus_count: 18,
        rating: 4.4,
    },
    PopularRoute {
        origin: "Pune",
        destination: "Goa",
        duration: TripDuration::new(9, 0),
        base_price: 1100,
        bus_count: 22,
        rating: 4.8,
    },
    PopularRoute {
        origin: "Kolkata",
        destination: "Bhopal",
        duration: TripDuration::new(18, 0),
        base_price: 1800,
        bus_count: 8,
        rating: 4.3,
    },
];
