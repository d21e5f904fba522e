use goride_booking::SeatingConfig;
use goride_offer::GeneratorConfig;
use serde::Deserialize;
use std::env;

/// Simulated latency, in milliseconds.
///
/// The pauses are serialized: each entry point awaits its own pause before
/// returning, so a second action cannot complete ahead of an earlier one.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DelayConfig {
    pub search_ms: u64,
    pub booking_ms: u64,
    pub typing_base_ms: u64,
    /// Uniform random extra on top of the base typing pause
    pub typing_jitter_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            search_ms: 1500,
            booking_ms: 1800,
            typing_base_ms: 800,
            typing_jitter_ms: 600,
        }
    }
}

impl DelayConfig {
    /// Zero every pause; tests run with this
    pub fn none() -> Self {
        Self {
            search_ms: 0,
            booking_ms: 0,
            typing_base_ms: 0,
            typing_jitter_ms: 0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub generator: GeneratorConfig,
    pub seating: SeatingConfig,
    pub delays: DelayConfig,
    /// Fixed rng seed for reproducible runs; entropy-seeded when unset
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file source is optional; the coded defaults cover a
            // bare checkout
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `GORIDE_DELAYS__SEARCH_MS=0`
            .add_source(config::Environment::with_prefix("GORIDE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_demo_windows() {
        let config = EngineConfig::default();
        assert_eq!(config.delays.search_ms, 1500);
        assert_eq!(config.delays.booking_ms, 1800);
        assert_eq!(config.generator.min_results, 4);
        assert_eq!(config.generator.max_results, 7);
        assert_eq!(config.seating.min_booked, 6);
        assert_eq!(config.seating.max_booked, 15);
        assert!(config.seed.is_none());
    }
}
