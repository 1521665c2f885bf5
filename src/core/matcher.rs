use chrono::NaiveDate;

use crate::core::scoring::{composite_score, compute_breakdown};
use crate::models::{MatchBreakdown, MatchWeights, QuizAnswers, Retreat, RetreatMatch};

/// Result of matching one set of quiz answers against the catalog
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<RetreatMatch>,
    pub total_considered: usize,
}

/// Retreat matching orchestrator
///
/// # Pipeline stages
/// 1. Drop sold-out and already-finished retreats
/// 2. Score each survivor across the six factors
/// 3. Generate the "why this matched" reasons
/// 4. Rank descending by composite score
///
/// No-throw by design: missing optional retreat data degrades to neutral
/// sub-scores, and an empty catalog yields an empty result, not an error.
#[derive(Debug, Clone, Copy)]
pub struct RetreatMatcher {
    weights: MatchWeights,
}

impl RetreatMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Score every bookable retreat and rank descending by match score
    ///
    /// `today` drives the past-retreat filter; callers pass the current
    /// date so tests stay deterministic.
    pub fn match_all(
        &self,
        catalog: &[Retreat],
        answers: &QuizAnswers,
        today: NaiveDate,
    ) -> MatchOutcome {
        let total_considered = catalog.len();

        let mut matches: Vec<RetreatMatch> = catalog
            .iter()
            .filter(|retreat| retreat.bookable(today))
            .map(|retreat| {
                let breakdown = compute_breakdown(retreat, answers);
                let match_score = composite_score(&breakdown, &self.weights);
                let why_match = build_reasons(retreat, answers, &breakdown);

                RetreatMatch {
                    retreat: retreat.clone(),
                    match_score,
                    breakdown,
                    why_match,
                }
            })
            .collect();

        // Stable sort: catalog order breaks score ties
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        MatchOutcome {
            matches,
            total_considered,
        }
    }
}

impl Default for RetreatMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Build 2-4 short reasons, strongest signals first
fn build_reasons(retreat: &Retreat, answers: &QuizAnswers, breakdown: &MatchBreakdown) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.vibe >= 70.0 {
        let strong: Vec<&str> = answers
            .vibes
            .iter()
            .filter(|vibe| retreat.salty_meter.dimension(**vibe) >= 7)
            .map(|vibe| vibe.label())
            .collect();
        if !strong.is_empty() {
            reasons.push(format!("Nails your {} vibe", strong.join(" + ")));
        }
    }

    if breakdown.room >= 80.0 && retreat.lowest_price > 0.0 {
        reasons.push(format!(
            "Rooms from ${:.0}, right around your budget",
            retreat.lowest_price
        ));
    }

    if breakdown.date >= 80.0 {
        reasons.push("Runs when you can travel".to_string());
    } else if breakdown.date >= 50.0 {
        reasons.push("Close to your preferred dates".to_string());
    }

    if breakdown.activity >= 70.0 && !answers.must_haves.is_empty() {
        reasons.push("Covers your must-have activities".to_string());
    }

    if let Some(spots) = retreat.spots_remaining {
        if spots <= 10 {
            reasons.push(format!("Only {} spots left", spots));
        }
    }

    if answers.traveling_solo == Some(true) {
        reasons.push("Solo-friendly: most guests come alone".to_string());
    }

    // Backfill so the card never shows fewer than two reasons
    if reasons.len() < 2 {
        if let Some(rating) = retreat.rating {
            reasons.push(format!("Rated {:.1} by past guests", rating));
        }
    }
    if reasons.len() < 2 {
        reasons.push(format!(
            "{} is a Salty crowd favorite",
            retreat.destination
        ));
    }

    reasons.truncate(4);
    reasons
}
