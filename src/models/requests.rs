use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::QuizAnswers;

/// Request to match quiz answers against the retreat catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizMatchRequest {
    #[validate(nested)]
    pub answers: QuizAnswers,
    #[serde(default = "default_match_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: u16,
}

fn default_match_limit() -> u16 {
    10
}

/// Request to search and rank flights for a retreat
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FlightSearchRequest {
    /// IATA airport code
    #[validate(length(min = 3, max = 3))]
    pub origin: String,
    /// IATA airport code
    #[validate(length(min = 3, max = 3))]
    pub destination: String,
    #[serde(rename = "departureDate")]
    pub departure_date: chrono::NaiveDate,
    #[serde(rename = "returnDate", default)]
    pub return_date: Option<chrono::NaiveDate>,
    #[serde(rename = "retreatSlug", default)]
    pub retreat_slug: Option<String>,
}
