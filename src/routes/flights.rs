use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, FlightSearchRequest, FlightSearchResponse, OfferSource};
use crate::routes::AppState;
use crate::services::synthetic_offers;

/// Configure flight search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/flights/search", web::post().to(search_flights));
}

/// Flight search endpoint
///
/// POST /api/v1/flights/search
///
/// Request body:
/// ```json
/// {
///   "origin": "LAX",
///   "destination": "DPS",
///   "departureDate": "2027-03-04",
///   "returnDate": "2027-03-14",
///   "retreatSlug": "bali-surf-march"
/// }
/// ```
///
/// Offers come from the configured provider; any provider failure falls
/// back to the synthetic generator so the page always renders.
async fn search_flights(
    state: web::Data<AppState>,
    req: web::Json<FlightSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for flight search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Searching flights {} -> {} on {}",
        req.origin,
        req.destination,
        req.departure_date
    );

    let (offers, source) = match &state.provider {
        Some(provider) => match provider.search(&req).await {
            Ok(offers) if !offers.is_empty() => (offers, OfferSource::Provider),
            Ok(_) => {
                tracing::warn!(
                    "Provider returned no offers for {} -> {}, using synthetic data",
                    req.origin,
                    req.destination
                );
                (
                    synthetic_offers(&req.origin, &req.destination, req.departure_date),
                    OfferSource::Synthetic,
                )
            }
            Err(e) => {
                tracing::warn!("Provider search failed ({}), using synthetic data", e);
                (
                    synthetic_offers(&req.origin, &req.destination, req.departure_date),
                    OfferSource::Synthetic,
                )
            }
        },
        None => (
            synthetic_offers(&req.origin, &req.destination, req.departure_date),
            OfferSource::Synthetic,
        ),
    };

    let total_offers = offers.len();
    let flights = state.ranker.rank(&offers);

    tracing::info!(
        "Ranked {} offers for {} -> {} ({:?})",
        total_offers,
        req.origin,
        req.destination,
        source
    );

    HttpResponse::Ok().json(FlightSearchResponse {
        origin: req.origin.clone(),
        destination: req.destination.clone(),
        departure_date: req.departure_date,
        return_date: req.return_date,
        retreat_slug: req.retreat_slug.clone(),
        source,
        total_offers,
        flights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_parses_and_validates() {
        let raw = r#"{
            "origin": "LAX",
            "destination": "DPS",
            "departureDate": "2027-03-04",
            "retreatSlug": "bali-surf-march"
        }"#;

        let req: FlightSearchRequest = serde_json::from_str(raw).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.return_date, None);
    }

    #[test]
    fn test_search_request_rejects_bad_airport_code() {
        let raw = r#"{
            "origin": "LOSANGELES",
            "destination": "DPS",
            "departureDate": "2027-03-04"
        }"#;

        let req: FlightSearchRequest = serde_json::from_str(raw).unwrap();
        assert!(req.validate().is_err());
    }
}
