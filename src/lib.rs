//! Salty Match - retreat matching and flight ranking service
//!
//! This library provides the two scoring engines behind the Salty retreats
//! funnel: the quiz-driven retreat matcher and the flight offer ranker.
//! Both are pure, synchronous functions over small in-memory collections.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FlightRanker, MatchOutcome, RetreatMatcher};
pub use crate::models::{
    FlightOffer, FlightRankWeights, MatchBreakdown, MatchWeights, QuizAnswers, RankedFlightSet,
    Retreat, RetreatMatch, SaltyMeter, Vibe,
};
