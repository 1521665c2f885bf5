use crate::models::{FlightOffer, FlightRankWeights, RankedFlightSet};

/// Cap on each ranked view; the UI never shows more than a page
pub const MAX_PER_VIEW: usize = 10;

/// Sorts one search's offers into the three ranked views
///
/// Pure and deterministic: no filtering, no I/O, stable ordering for ties.
/// Stop-count, price and alliance filters are the caller's concern, applied
/// as predicates before or after ranking.
#[derive(Debug, Clone, Copy)]
pub struct FlightRanker {
    weights: FlightRankWeights,
}

impl FlightRanker {
    pub fn new(weights: FlightRankWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FlightRankWeights::default(),
        }
    }

    /// Partition offers into cheapest / fastest / best views
    ///
    /// `best` blends normalized price and duration (default 60/40). Min/max
    /// for normalization are computed once over the full input, and a
    /// degenerate range divides by 1 so a uniform field scores flat.
    pub fn rank(&self, offers: &[FlightOffer]) -> RankedFlightSet {
        if offers.is_empty() {
            return RankedFlightSet::default();
        }

        let mut cheapest = offers.to_vec();
        cheapest.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        cheapest.truncate(MAX_PER_VIEW);

        let mut fastest = offers.to_vec();
        fastest.sort_by_key(|offer| offer.total_duration_minutes);
        fastest.truncate(MAX_PER_VIEW);

        let best = self.rank_best(offers);

        RankedFlightSet {
            cheapest,
            fastest,
            best,
            unlisted: vec![],
        }
    }

    fn rank_best(&self, offers: &[FlightOffer]) -> Vec<FlightOffer> {
        let min_price = offers.iter().map(|o| o.price).fold(f64::INFINITY, f64::min);
        let max_price = offers
            .iter()
            .map(|o| o.price)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_duration = offers
            .iter()
            .map(|o| o.total_duration_minutes)
            .min()
            .unwrap_or(0) as f64;
        let max_duration = offers
            .iter()
            .map(|o| o.total_duration_minutes)
            .max()
            .unwrap_or(0) as f64;

        let price_range = if max_price > min_price {
            max_price - min_price
        } else {
            1.0
        };
        let duration_range = if max_duration > min_duration {
            max_duration - min_duration
        } else {
            1.0
        };

        let mut scored: Vec<(f64, FlightOffer)> = offers
            .iter()
            .map(|offer| {
                let norm_price = (offer.price - min_price) / price_range;
                let norm_duration =
                    (offer.total_duration_minutes as f64 - min_duration) / duration_range;
                let score = norm_price * self.weights.price + norm_duration * self.weights.duration;
                (score, offer.clone())
            })
            .collect();

        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(MAX_PER_VIEW)
            .map(|(_, offer)| offer)
            .collect()
    }
}

impl Default for FlightRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
