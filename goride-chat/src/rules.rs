use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Semantic categories the responder recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Greeting,
    Routes,
    Cancellation,
    Booking,
    Pricing,
    Payment,
    Amenities,
    Safety,
}

/// One classification rule: a keyword-fragment pattern and its canned reply.
/// Patterns match anywhere in the lowercased input, so fragments hit inside
/// words too ("which" greets because it contains "hi").
pub struct ChatRule {
    pub intent: Intent,
    pattern: Regex,
    pub reply: &'static str,
}

impl ChatRule {
    fn new(intent: Intent, pattern: &str, reply: &'static str) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).expect("static rule pattern"),
            reply,
        }
    }

    pub fn matches(&self, lowercased: &str) -> bool {
        self.pattern.is_match(lowercased)
    }
}

/// The ordered rule table. First match wins, so order is part of the
/// contract: cancellation sits ahead of booking because cancellation
/// questions usually mention tickets as well.
pub fn rules() -> &'static [ChatRule] {
    &RULES
}

static RULES: Lazy<Vec<ChatRule>> = Lazy::new(|| {
    vec![
        ChatRule::new(Intent::Greeting, "hello|hi|hey|greet", GREETING),
        ChatRule::new(Intent::Routes, "route|city|cities|destination|where", ROUTES),
        ChatRule::new(Intent::Cancellation, "cancel|refund", CANCELLATION),
        ChatRule::new(Intent::Booking, "book|how.*book|ticket|steps", BOOKING),
        ChatRule::new(Intent::Pricing, "price|cost|fare|cheap|expensive", PRICING),
        ChatRule::new(Intent::Payment, "pay|payment|upi|card", PAYMENT),
        ChatRule::new(
            Intent::Amenities,
            "amenity|amenities|wifi|ac|sleeper|charge",
            AMENITIES,
        ),
        ChatRule::new(Intent::Safety, "safe|safety|security|gps|driver", SAFETY),
    ]
});

pub(crate) const GREETING: &str = "👋 Hi there! I'm GoRide AI. How can I help you today? I can help with routes, booking, pricing, or cancellations.";

const ROUTES: &str = "🗺️ We operate 500+ routes across 120+ cities in India! Some popular ones: Mumbai↔Pune, Delhi↔Jaipur, Bangalore↔Chennai. Use the search bar above to find buses on your route!";

const BOOKING: &str = "🎫 Booking is easy!\n1. Enter your From & To cities + travel date\n2. Click 'Search Buses'\n3. Pick a bus from the results\n4. Choose your seats\n5. Fill in your details & confirm!\nIt takes less than 30 seconds!";

const CANCELLATION: &str = "❌ Cancellations are hassle-free! You can cancel up to 2 hours before departure for a full refund. Just go to 'My Bookings' and click cancel. Refunds are processed within 24 hours.";

const PRICING: &str = "💰 Our prices start from just ₹250 for short routes! AC Sleeper buses range from ₹600-₹2000 depending on distance. We also offer AI-powered price alerts for the best deals!";

const PAYMENT: &str = "💳 We accept all payment methods: UPI, Cards, Net Banking, and Wallets. All payments are 100% secure with bank-grade encryption.";

const AMENITIES: &str = "🛋️ Our premium buses offer: WiFi, AC, Charging Ports, Blankets, TV Screens, Water & Snacks. Filter by amenities when searching!";

const SAFETY: &str = "🛡️ Your safety is our priority! All buses have GPS tracking, verified drivers, emergency contacts, and 24/7 monitoring.";

/// Returned when no rule matches
pub const DEFAULT_REPLY: &str = "🤔 I'm not sure about that, but I'll learn! You can ask me about routes, booking, prices, cancellations, amenities, safety, or payment methods.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_eight_intents_in_order() {
        let intents: Vec<Intent> = rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            intents,
            vec![
                Intent::Greeting,
                Intent::Routes,
                Intent::Cancellation,
                Intent::Booking,
                Intent::Pricing,
                Intent::Payment,
                Intent::Amenities,
                Intent::Safety,
            ]
        );
    }

    #[test]
    fn test_patterns_match_lowercased_fragments() {
        let booking = &rules()[3];
        assert!(booking.matches("how do i book a seat"));
        assert!(booking.matches("ticket"));
        assert!(!booking.matches("hello"));
    }
}
