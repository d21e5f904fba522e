use chrono::NaiveDate;
use serde::Deserialize;

/// Search parameters as entered in the search bar. Cities are free text;
/// only the checks below gate a search, everything else is taken as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub travel_date: Option<NaiveDate>,
    pub passengers: u32,
}

impl SearchRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        travel_date: NaiveDate,
        passengers: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            travel_date: Some(travel_date),
            passengers,
        }
    }

    /// Synchronous input validation, in form order. Every failure is
    /// non-fatal and recoverable by re-entry.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin.trim().is_empty() {
            return Err(SearchError::MissingOrigin);
        }
        if self.destination.trim().is_empty() {
            return Err(SearchError::MissingDestination);
        }
        if self.travel_date.is_none() {
            return Err(SearchError::MissingDate);
        }
        if self.origin.trim().to_lowercase() == self.destination.trim().to_lowercase() {
            return Err(SearchError::SameCity);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("origin city is required")]
    MissingOrigin,

    #[error("destination city is required")]
    MissingDestination,

    #[error("travel date is required")]
    MissingDate,

    #[error("origin and destination cities cannot be the same")]
    SameCity,
}
