use serde::{Deserialize, Serialize};

use crate::models::domain::{RankedFlightSet, RetreatMatch};

/// Response for the quiz match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizMatchResponse {
    pub matches: Vec<RetreatMatch>,
    #[serde(rename = "totalConsidered")]
    pub total_considered: usize,
}

/// Where the flight offers for a search came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferSource {
    Provider,
    Synthetic,
}

/// Response for the flight search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResponse {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "departureDate")]
    pub departure_date: chrono::NaiveDate,
    #[serde(rename = "returnDate")]
    pub return_date: Option<chrono::NaiveDate>,
    #[serde(rename = "retreatSlug")]
    pub retreat_slug: Option<String>,
    pub source: OfferSource,
    #[serde(rename = "totalOffers")]
    pub total_offers: usize,
    pub flights: RankedFlightSet,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
