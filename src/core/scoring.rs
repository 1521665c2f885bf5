use chrono::Datelike;

use crate::core::activities::count_matches;
use crate::models::{MatchBreakdown, MatchWeights, QuizAnswers, Retreat, RoomPreference};

/// Neutral sub-score used whenever an answer or a retreat field is missing
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Activity sub-score signal for "hit none of your must-haves"; subtracted
/// from the composite after weighting, so it costs more than a plain 0 could
pub const MISSED_ALL_PENALTY: f64 = -30.0;

/// Calculate the full sub-score breakdown for one retreat
///
/// Scoring formula:
/// score = (
///     vibe_score * 0.30 +         # salty-meter alignment with selected vibes
///     room_score * 0.20 +         # price-band fit for the room preference
///     date_score * 0.15 +         # start month vs available months
///     region_score * 0.15 +       # country's region vs preferred regions
///     activity_score * 0.10 +     # must-have tag coverage
///     party_rest_score * 0.10     # party/rest ratio vs the 1-10 slider
/// )
pub fn compute_breakdown(retreat: &Retreat, answers: &QuizAnswers) -> MatchBreakdown {
    MatchBreakdown {
        vibe: vibe_score(retreat, answers),
        room: room_score(retreat, answers.room_preference),
        date: date_score(retreat, answers),
        region: region_score(retreat, answers),
        activity: activity_score(retreat, &answers.must_haves),
        party_rest: party_rest_score(retreat, answers.party_vs_rest),
    }
}

/// Weighted composite, clamped to [5, 99] for display
///
/// Never shows 0% or 100%: both read as broken to an end user. The -30
/// missed-all-must-haves penalty lands after weighting, so its activity
/// term contributes nothing to the weighted sum.
pub fn composite_score(breakdown: &MatchBreakdown, weights: &MatchWeights) -> u8 {
    let weighted = breakdown.vibe * weights.vibe
        + breakdown.room * weights.room
        + breakdown.date * weights.date
        + breakdown.region * weights.region
        + breakdown.activity.max(0.0) * weights.activity
        + breakdown.party_rest * weights.party_rest;

    let mut composite = weighted.round();
    if breakdown.activity < 0.0 {
        composite += breakdown.activity;
    }

    composite.clamp(5.0, 99.0) as u8
}

/// Average of the salty-meter dimensions behind the selected vibes, x10
pub fn vibe_score(retreat: &Retreat, answers: &QuizAnswers) -> f64 {
    if answers.vibes.is_empty() {
        return NEUTRAL_SCORE;
    }

    let total: u32 = answers
        .vibes
        .iter()
        .map(|vibe| retreat.salty_meter.dimension(*vibe) as u32)
        .sum();

    (total as f64 / answers.vibes.len() as f64) * 10.0
}

/// Price-band fit for the traveler's room preference
pub fn room_score(retreat: &Retreat, preference: Option<RoomPreference>) -> f64 {
    let Some(preference) = preference else {
        return NEUTRAL_SCORE;
    };
    let band = preference.price_band();

    // Explicit tier pricing wins over the headline price
    let available: Vec<f64> = retreat
        .room_tiers
        .iter()
        .filter(|tier| tier.available)
        .map(|tier| tier.price)
        .collect();

    if !available.is_empty() {
        if available.iter().any(|price| band.contains(*price)) {
            return 100.0;
        }

        // Closest tier, graded by distance from the band center.
        // The 0.5x / 1.0x band-width thresholds are tuned against real
        // catalog data; preserve them exactly.
        let closest = available
            .iter()
            .map(|price| (price - band.center()).abs())
            .fold(f64::INFINITY, f64::min);

        return if closest <= band.width() * 0.5 {
            80.0
        } else if closest <= band.width() {
            60.0
        } else {
            40.0
        };
    }

    // No tier data: compare the headline price against the band
    if retreat.lowest_price <= 0.0 {
        return NEUTRAL_SCORE;
    }
    let price = retreat.lowest_price;

    if band.contains(price) {
        100.0
    } else if price < band.min {
        // Cheaper than asked for is a bonus, not a miss
        90.0
    } else {
        // Linear decay from just over the ceiling down to 30 at +20%
        let overshoot = (price - band.max) / band.max;
        if overshoot >= 0.2 {
            30.0
        } else {
            100.0 - (overshoot / 0.2) * 70.0
        }
    }
}

/// Start-month fit against the traveler's available months
///
/// Exact month 100, one month off 60, two months off 30, otherwise a soft
/// floor of 20 so one bad date never eliminates a retreat outright.
pub fn date_score(retreat: &Retreat, answers: &QuizAnswers) -> f64 {
    if answers.availability.is_empty() {
        return NEUTRAL_SCORE;
    }
    // Flexible travelers score well but never outrank an exact match
    if answers.is_flexible() {
        return 80.0;
    }

    let start = month_index(retreat.start_date.year(), retreat.start_date.month());

    let mut best = 20.0_f64;
    for month in &answers.availability {
        let Some(selected) = parse_month(month) else {
            continue;
        };
        let score = match (selected - start).abs() {
            0 => 100.0,
            1 => 60.0,
            2 => 30.0,
            _ => 20.0,
        };
        best = best.max(score);
    }
    best
}

/// Region fit: 100 on match, 45 on miss (soft penalty, not exclusionary)
pub fn region_score(retreat: &Retreat, answers: &QuizAnswers) -> f64 {
    if answers.regions.is_empty() {
        return NEUTRAL_SCORE;
    }
    if answers.wants_surprise() {
        return 80.0;
    }

    match region_for_country(&retreat.country) {
        Some(region) if answers.regions.iter().any(|r| r.eq_ignore_ascii_case(region)) => 100.0,
        _ => 45.0,
    }
}

/// Must-have tag coverage; zero hits signals the -30 penalty
pub fn activity_score(retreat: &Retreat, must_haves: &[String]) -> f64 {
    if must_haves.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matched = count_matches(must_haves, retreat);
    if matched == 0 {
        return MISSED_ALL_PENALTY;
    }

    ((matched as f64 / must_haves.len() as f64) * 100.0).round()
}

/// Distance between the retreat's party/rest ratio and the 1-10 slider
pub fn party_rest_score(retreat: &Retreat, party_vs_rest: u8) -> f64 {
    let party = retreat.salty_meter.party as f64;
    let rest = retreat.salty_meter.rest as f64;

    let ratio = if party + rest > 0.0 {
        (party / (party + rest)) * 10.0
    } else {
        5.0
    };

    let diff = (ratio - party_vs_rest as f64).abs();
    (100.0 - diff * 12.0).max(0.0)
}

/// Region tag for a catalog country, used by the region sub-score
pub fn region_for_country(country: &str) -> Option<&'static str> {
    const REGIONS: &[(&str, &str)] = &[
        ("indonesia", "asia"),
        ("thailand", "asia"),
        ("sri lanka", "asia"),
        ("philippines", "asia"),
        ("vietnam", "asia"),
        ("japan", "asia"),
        ("portugal", "europe"),
        ("spain", "europe"),
        ("greece", "europe"),
        ("italy", "europe"),
        ("croatia", "europe"),
        ("morocco", "africa"),
        ("south africa", "africa"),
        ("tanzania", "africa"),
        ("costa rica", "latin-america"),
        ("mexico", "latin-america"),
        ("nicaragua", "latin-america"),
        ("peru", "latin-america"),
        ("colombia", "latin-america"),
        ("brazil", "latin-america"),
        ("australia", "oceania"),
        ("new zealand", "oceania"),
        ("fiji", "oceania"),
        ("jordan", "middle-east"),
        ("oman", "middle-east"),
        ("united arab emirates", "middle-east"),
    ];

    let normalized = country.to_lowercase();
    REGIONS
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, region)| *region)
}

fn month_index(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

/// Parse a "YYYY-MM" availability entry into a comparable month index
fn parse_month(value: &str) -> Option<i32> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(month_index(year, month))
}
