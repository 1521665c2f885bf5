// Integration tests for Salty Match

use chrono::NaiveDate;
use salty_match::core::{FlightRanker, RetreatMatcher, MAX_PER_VIEW};
use salty_match::models::{
    QuizAnswers, Retreat, RetreatStatus, RoomPreference, RoomTier, SaltyMeter, Vibe,
};
use salty_match::services::{synthetic_offers, CatalogStore};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn create_test_retreat(
    slug: &str,
    country: &str,
    start: NaiveDate,
    price: f64,
    meter: SaltyMeter,
    activities: &[&str],
) -> Retreat {
    Retreat {
        slug: slug.to_string(),
        destination: format!("Destination {}", slug),
        country: country.to_string(),
        start_date: start,
        end_date: start + chrono::Duration::days(7),
        lowest_price: price,
        room_tiers: vec![],
        salty_meter: meter,
        activities: activities.iter().map(|s| s.to_string()).collect(),
        location_features: vec![],
        status: RetreatStatus::Open,
        spots_remaining: Some(12),
        rating: Some(4.6),
    }
}

fn test_catalog() -> Vec<Retreat> {
    vec![
        create_test_retreat(
            "bali-surf",
            "Indonesia",
            NaiveDate::from_ymd_opt(2027, 3, 6).unwrap(),
            2250.0,
            SaltyMeter { adventure: 8, culture: 5, party: 7, sweat: 6, rest: 3 },
            &["Surf lessons", "Sunrise yoga", "Beach club nights"],
        ),
        create_test_retreat(
            "lisbon-culture",
            "Portugal",
            NaiveDate::from_ymd_opt(2027, 4, 17).unwrap(),
            2450.0,
            SaltyMeter { adventure: 4, culture: 9, party: 6, sweat: 3, rest: 6 },
            &["Food tours", "History walks", "Fado nights"],
        ),
        create_test_retreat(
            "chiang-mai-wellness",
            "Thailand",
            NaiveDate::from_ymd_opt(2027, 2, 13).unwrap(),
            1950.0,
            SaltyMeter { adventure: 5, culture: 8, party: 2, sweat: 4, rest: 9 },
            &["Meditation sessions", "Spa afternoons", "Temple visits"],
        ),
    ]
}

#[test]
fn test_end_to_end_quiz_matching() {
    let matcher = RetreatMatcher::with_default_weights();
    let catalog = test_catalog();

    // An adventure/party traveler who surfs, wants Asia in March
    let answers = QuizAnswers {
        vibes: vec![Vibe::Adventure, Vibe::Party],
        room_preference: Some(RoomPreference::Triple),
        availability: vec!["2027-03".to_string()],
        regions: vec!["asia".to_string()],
        party_vs_rest: 7,
        must_haves: vec!["surfing".to_string(), "beach".to_string()],
        traveling_solo: Some(true),
        experience_level: None,
    };

    let outcome = matcher.match_all(&catalog, &answers, today());

    assert_eq!(outcome.matches.len(), 3);
    assert_eq!(outcome.matches[0].retreat.slug, "bali-surf");

    for pair in outcome.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for m in &outcome.matches {
        assert!((5..=99).contains(&m.match_score));
        assert!(m.why_match.len() >= 2 && m.why_match.len() <= 4);
    }
}

#[test]
fn test_rest_seeker_prefers_wellness_retreat() {
    let matcher = RetreatMatcher::with_default_weights();
    let catalog = test_catalog();

    let answers = QuizAnswers {
        vibes: vec![Vibe::Rest],
        party_vs_rest: 2,
        must_haves: vec!["wellness".to_string()],
        ..Default::default()
    };

    let outcome = matcher.match_all(&catalog, &answers, today());
    assert_eq!(outcome.matches[0].retreat.slug, "chiang-mai-wellness");
}

#[test]
fn test_catalog_store_round_trip_through_matcher() {
    let store = CatalogStore::from_retreats(test_catalog());
    let matcher = RetreatMatcher::with_default_weights();

    let outcome = matcher.match_all(store.all(), &QuizAnswers::default(), today());
    assert_eq!(outcome.total_considered, store.len());
}

#[test]
fn test_sold_out_retreat_never_surfaces() {
    let matcher = RetreatMatcher::with_default_weights();
    let mut catalog = test_catalog();
    catalog[0].status = RetreatStatus::SoldOut;

    let outcome = matcher.match_all(&catalog, &QuizAnswers::default(), today());
    assert!(outcome.matches.iter().all(|m| m.retreat.slug != "bali-surf"));
}

#[test]
fn test_room_tiers_override_headline_price() {
    let matcher = RetreatMatcher::with_default_weights();
    let mut catalog = test_catalog();
    // Headline price misses the dorm band, but an available dorm tier hits it
    catalog[0].lowest_price = 2250.0;
    catalog[0].room_tiers = vec![RoomTier {
        name: "Shared dorm".to_string(),
        price: 1850.0,
        available: true,
    }];

    let answers = QuizAnswers {
        room_preference: Some(RoomPreference::Dorm),
        ..Default::default()
    };

    let outcome = matcher.match_all(&catalog, &answers, today());
    let bali = outcome
        .matches
        .iter()
        .find(|m| m.retreat.slug == "bali-surf")
        .unwrap();
    assert_eq!(bali.breakdown.room, 100.0);
}

#[test]
fn test_synthetic_search_end_to_end() {
    let date = NaiveDate::from_ymd_opt(2027, 3, 4).unwrap();
    let offers = synthetic_offers("LAX", "DPS", date);
    assert!(!offers.is_empty());

    let ranker = FlightRanker::with_default_weights();
    let ranked = ranker.rank(&offers);

    assert!(ranked.cheapest.len() <= MAX_PER_VIEW);
    for pair in ranked.cheapest.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
    for pair in ranked.fastest.windows(2) {
        assert!(pair[0].total_duration_minutes <= pair[1].total_duration_minutes);
    }

    // Every ranked offer exists in the input set
    for view in [&ranked.cheapest, &ranked.fastest, &ranked.best] {
        for ranked_offer in view {
            assert!(offers.iter().any(|o| o.id == ranked_offer.id));
        }
    }

    // Same search again ranks identically
    let again = ranker.rank(&synthetic_offers("LAX", "DPS", date));
    let ids: Vec<&str> = ranked.best.iter().map(|o| o.id.as_str()).collect();
    let again_ids: Vec<&str> = again.best.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, again_ids);
}

#[test]
fn test_shipped_catalog_file_parses() {
    let store = CatalogStore::load_from_path("data/retreats.json").unwrap();
    assert!(store.len() >= 3);

    // The shipped file contains one sold-out retreat that must be filtered
    let bookable = store.bookable(today());
    assert!(bookable.len() < store.len());
    assert!(bookable.iter().all(|r| !r.sold_out()));
}
