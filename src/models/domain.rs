use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One flight offer for a single origin/destination/date search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub price: f64,
    #[serde(rename = "totalDurationMinutes")]
    pub total_duration_minutes: u32,
    pub stops: u32,
    /// Opaque segment data from the provider, passed through untouched
    #[serde(default)]
    pub segments: serde_json::Value,
    #[serde(rename = "bookingLink", default)]
    pub booking_link: Option<String>,
}

/// Three ranked views over one search's offers, each capped at 10 entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedFlightSet {
    pub cheapest: Vec<FlightOffer>,
    pub fastest: Vec<FlightOffer>,
    pub best: Vec<FlightOffer>,
    /// Offers the caller chose to keep out of the ranked views
    #[serde(default)]
    pub unlisted: Vec<FlightOffer>,
}

/// Quiz vibes, each mapped to one salty-meter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Adventure,
    Culture,
    Party,
    Fitness,
    Rest,
}

impl Vibe {
    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Adventure => "adventure",
            Vibe::Culture => "culture",
            Vibe::Party => "party",
            Vibe::Fitness => "fitness",
            Vibe::Rest => "rest",
        }
    }
}

/// Room preference, each mapped to a price band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomPreference {
    Dorm,
    Triple,
    Premium,
    Single,
}

/// Price band for a room preference
///
/// Open-ended bands (single rooms) have no real ceiling; `max` is only used
/// for center/width math in the closest-tier fallback.
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
    pub open_ended: bool,
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        if self.open_ended {
            price >= self.min
        } else {
            price >= self.min && price <= self.max
        }
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl RoomPreference {
    /// Tuned price bands; do not adjust without product sign-off
    pub fn price_band(&self) -> PriceBand {
        match self {
            RoomPreference::Dorm => PriceBand { min: 0.0, max: 1999.0, open_ended: false },
            RoomPreference::Triple => PriceBand { min: 2000.0, max: 2399.0, open_ended: false },
            RoomPreference::Premium => PriceBand { min: 2300.0, max: 2799.0, open_ended: false },
            RoomPreference::Single => PriceBand { min: 2800.0, max: 3600.0, open_ended: true },
        }
    }
}

/// Sentinel in `availability` meaning "any month works"
pub const FLEXIBLE_SENTINEL: &str = "flexible";

/// Sentinel in `regions` meaning "no region preference"
pub const SURPRISE_ME_SENTINEL: &str = "surprise-me";

/// Traveler quiz answers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizAnswers {
    #[serde(default)]
    #[validate(length(max = 3))]
    pub vibes: Vec<Vibe>,
    #[serde(rename = "roomPreference", default)]
    pub room_preference: Option<RoomPreference>,
    /// Year-month strings ("2026-11") or the "flexible" sentinel
    #[serde(default)]
    pub availability: Vec<String>,
    /// Region tags ("asia", "europe", ...) or the "surprise-me" sentinel
    #[serde(default)]
    pub regions: Vec<String>,
    /// 1 = all rest, 10 = all party
    #[serde(rename = "partyVsRest", default = "default_party_vs_rest")]
    #[validate(range(min = 1, max = 10))]
    pub party_vs_rest: u8,
    #[serde(rename = "mustHaves", default)]
    pub must_haves: Vec<String>,
    #[serde(rename = "travelingSolo", default)]
    pub traveling_solo: Option<bool>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
}

fn default_party_vs_rest() -> u8 {
    5
}

impl Default for QuizAnswers {
    fn default() -> Self {
        Self {
            vibes: vec![],
            room_preference: None,
            availability: vec![],
            regions: vec![],
            party_vs_rest: default_party_vs_rest(),
            must_haves: vec![],
            traveling_solo: None,
            experience_level: None,
        }
    }
}

impl QuizAnswers {
    pub fn is_flexible(&self) -> bool {
        self.availability.iter().any(|m| m == FLEXIBLE_SENTINEL)
    }

    pub fn wants_surprise(&self) -> bool {
        self.regions.iter().any(|r| r == SURPRISE_ME_SENTINEL)
    }
}

/// Five-dimension retreat character profile, each 0-10
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SaltyMeter {
    #[serde(default)]
    pub adventure: u8,
    #[serde(default)]
    pub culture: u8,
    #[serde(default)]
    pub party: u8,
    #[serde(default)]
    pub sweat: u8,
    #[serde(default)]
    pub rest: u8,
}

impl SaltyMeter {
    /// Dimension a quiz vibe reads from (fitness reads sweat)
    pub fn dimension(&self, vibe: Vibe) -> u8 {
        match vibe {
            Vibe::Adventure => self.adventure,
            Vibe::Culture => self.culture,
            Vibe::Party => self.party,
            Vibe::Fitness => self.sweat,
            Vibe::Rest => self.rest,
        }
    }
}

/// One bookable room tier on a retreat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTier {
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetreatStatus {
    #[default]
    Open,
    AlmostFull,
    SoldOut,
}

/// One retreat from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retreat {
    pub slug: String,
    pub destination: String,
    pub country: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    /// 0 means price TBD: excluded from price scoring
    #[serde(rename = "lowestPrice", default)]
    pub lowest_price: f64,
    #[serde(rename = "roomTiers", default)]
    pub room_tiers: Vec<RoomTier>,
    #[serde(rename = "saltyMeter", default)]
    pub salty_meter: SaltyMeter,
    /// Free text, keyword-matched by the activity rules
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(rename = "locationFeatures", default)]
    pub location_features: Vec<String>,
    #[serde(default)]
    pub status: RetreatStatus,
    #[serde(rename = "spotsRemaining", default)]
    pub spots_remaining: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Retreat {
    pub fn sold_out(&self) -> bool {
        self.status == RetreatStatus::SoldOut
    }

    /// Bookable = not sold out and not already finished
    pub fn bookable(&self, today: NaiveDate) -> bool {
        !self.sold_out() && self.end_date >= today
    }

    /// Lowercased haystack for must-have keyword matching
    pub fn search_text(&self) -> String {
        let mut text = String::new();
        for entry in self.activities.iter().chain(self.location_features.iter()) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&entry.to_lowercase());
        }
        text
    }
}

/// Per-factor sub-scores behind one match
///
/// All on a 0-100 scale except `activity`, which carries the -30
/// missed-all-must-haves penalty as a negative signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "vibeScore")]
    pub vibe: f64,
    #[serde(rename = "roomScore")]
    pub room: f64,
    #[serde(rename = "dateScore")]
    pub date: f64,
    #[serde(rename = "regionScore")]
    pub region: f64,
    #[serde(rename = "activityScore")]
    pub activity: f64,
    #[serde(rename = "partyRestScore")]
    pub party_rest: f64,
}

/// Scored retreat match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetreatMatch {
    pub retreat: Retreat,
    /// Clamped to [5, 99] for display
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub breakdown: MatchBreakdown,
    #[serde(rename = "whyMatch")]
    pub why_match: Vec<String>,
}

/// Retreat match factor weights
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub vibe: f64,
    pub room: f64,
    pub date: f64,
    pub region: f64,
    pub activity: f64,
    pub party_rest: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            vibe: 0.30,
            room: 0.20,
            date: 0.15,
            region: 0.15,
            activity: 0.10,
            party_rest: 0.10,
        }
    }
}

/// Flight "best" blend weights; the 60/40 price/duration split is a tuned
/// business parameter, do not change without product sign-off
#[derive(Debug, Clone, Copy)]
pub struct FlightRankWeights {
    pub price: f64,
    pub duration: f64,
}

impl Default for FlightRankWeights {
    fn default() -> Self {
        Self {
            price: 0.60,
            duration: 0.40,
        }
    }
}
