// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FlightOffer, FlightRankWeights, MatchBreakdown, MatchWeights, PriceBand, QuizAnswers,
    RankedFlightSet, Retreat, RetreatMatch, RetreatStatus, RoomPreference, RoomTier, SaltyMeter,
    Vibe, FLEXIBLE_SENTINEL, SURPRISE_ME_SENTINEL,
};
pub use requests::{FlightSearchRequest, QuizMatchRequest};
pub use responses::{
    ErrorResponse, FlightSearchResponse, HealthResponse, OfferSource, QuizMatchResponse,
};
