use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, QuizMatchRequest, QuizMatchResponse};
use crate::routes::AppState;

/// Configure quiz and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/quiz/match", web::post().to(match_quiz))
        .route("/retreats", web::get().to(list_retreats));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Quiz match endpoint
///
/// POST /api/v1/quiz/match
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "vibes": ["adventure", "party"],
///     "roomPreference": "triple",
///     "availability": ["2027-03", "2027-04"],
///     "regions": ["asia"],
///     "partyVsRest": 7,
///     "mustHaves": ["surfing"],
///     "travelingSolo": true
///   },
///   "limit": 10
/// }
/// ```
async fn match_quiz(
    state: web::Data<AppState>,
    req: web::Json<QuizMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for quiz match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit as usize;
    let today = chrono::Utc::now().date_naive();

    tracing::info!(
        "Matching quiz: {} vibes, {} must-haves, limit {}",
        req.answers.vibes.len(),
        req.answers.must_haves.len(),
        limit
    );

    let mut outcome = state
        .matcher
        .match_all(state.catalog.all(), &req.answers, today);
    outcome.matches.truncate(limit);

    tracing::info!(
        "Returning {} matches (from {} retreats)",
        outcome.matches.len(),
        outcome.total_considered
    );

    HttpResponse::Ok().json(QuizMatchResponse {
        matches: outcome.matches,
        total_considered: outcome.total_considered,
    })
}

/// List the currently bookable catalog
///
/// GET /api/v1/retreats
async fn list_retreats(state: web::Data<AppState>) -> impl Responder {
    let today = chrono::Utc::now().date_naive();
    let retreats = state.catalog.bookable(today);

    HttpResponse::Ok().json(serde_json::json!({
        "retreats": retreats,
        "count": retreats.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_quiz_request_parses_camel_case() {
        let raw = r#"{
            "answers": {
                "vibes": ["adventure"],
                "roomPreference": "dorm",
                "partyVsRest": 8,
                "mustHaves": ["surfing"]
            }
        }"#;

        let req: QuizMatchRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.limit, 10);
        assert_eq!(req.answers.party_vs_rest, 8);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_quiz_request_rejects_bad_slider() {
        let raw = r#"{"answers": {"partyVsRest": 14}}"#;
        let req: QuizMatchRequest = serde_json::from_str(raw).unwrap();
        assert!(req.validate().is_err());
    }
}
