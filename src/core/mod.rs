// Core algorithm exports
pub mod activities;
pub mod flights;
pub mod matcher;
pub mod scoring;

pub use activities::{count_matches, tag_matches, TAG_RULES};
pub use flights::{FlightRanker, MAX_PER_VIEW};
pub use matcher::{MatchOutcome, RetreatMatcher};
pub use scoring::{composite_score, compute_breakdown, region_for_country};
