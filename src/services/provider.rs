use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::{FlightOffer, FlightSearchRequest};

/// Errors that can occur talking to the flight data provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("provider returned error: {0}")]
    ApiError(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Flight data provider client
///
/// Thin wrapper over the upstream search API. Callers fall back to
/// `synthetic_offers` when no provider is configured or a search fails.
pub struct FlightProviderClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl FlightProviderClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Search one-way/round-trip offers for a route and date
    pub async fn search(
        &self,
        request: &FlightSearchRequest,
    ) -> Result<Vec<FlightOffer>, ProviderError> {
        let mut url = format!(
            "{}/flights/search?origin={}&destination={}&departureDate={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&request.origin),
            urlencoding::encode(&request.destination),
            request.departure_date,
        );
        if let Some(return_date) = request.return_date {
            url.push_str(&format!("&returnDate={}", return_date));
        }

        tracing::debug!("Fetching offers from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let raw_offers = json
            .get("offers")
            .and_then(|o| o.as_array())
            .ok_or_else(|| ProviderError::InvalidResponse("Missing offers array".into()))?;

        // Malformed individual offers are dropped, not fatal
        let offers: Vec<FlightOffer> = raw_offers
            .iter()
            .filter_map(|raw| serde_json::from_value(raw.clone()).ok())
            .collect();

        tracing::debug!(
            "Provider returned {} offers ({} usable)",
            raw_offers.len(),
            offers.len()
        );

        Ok(offers)
    }
}

/// Generate plausible offers for a route when no provider is available
///
/// Seeded from the route and date, so the same search always produces the
/// same offers: demo pages and snapshot tests stay stable.
pub fn synthetic_offers(origin: &str, destination: &str, date: NaiveDate) -> Vec<FlightOffer> {
    let mut hasher = DefaultHasher::new();
    origin.hash(&mut hasher);
    destination.hash(&mut hasher);
    date.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());

    let count = rng.gen_range(8..=16);
    let base_price = rng.gen_range(220.0..650.0);
    let base_duration = rng.gen_range(150..=420);

    (0..count)
        .map(|i| {
            let stops = rng.gen_range(0..=2u32);
            let price = (base_price + rng.gen_range(-80.0..400.0) - stops as f64 * 40.0).max(90.0);
            let duration = base_duration + stops * rng.gen_range(45..=180) + rng.gen_range(0..90);

            FlightOffer {
                id: format!("syn-{}-{}-{}", origin.to_lowercase(), destination.to_lowercase(), i),
                price: (price * 100.0).round() / 100.0,
                total_duration_minutes: duration,
                stops,
                segments: Value::Null,
                booking_link: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_request() -> FlightSearchRequest {
        FlightSearchRequest {
            origin: "LAX".to_string(),
            destination: "DPS".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2027, 3, 4).unwrap(),
            return_date: None,
            retreat_slug: Some("bali-surf-march".to_string()),
        }
    }

    #[test]
    fn test_synthetic_offers_deterministic_per_route() {
        let date = NaiveDate::from_ymd_opt(2027, 3, 4).unwrap();
        let first = synthetic_offers("LAX", "DPS", date);
        let second = synthetic_offers("LAX", "DPS", date);
        assert_eq!(first, second);

        let other_route = synthetic_offers("JFK", "DPS", date);
        assert_ne!(first, other_route);
    }

    #[test]
    fn test_synthetic_offers_plausible() {
        let date = NaiveDate::from_ymd_opt(2027, 3, 4).unwrap();
        let offers = synthetic_offers("LAX", "DPS", date);

        assert!((8..=16).contains(&offers.len()));
        for offer in &offers {
            assert!(offer.price > 0.0);
            assert!(offer.total_duration_minutes > 0);
            assert!(offer.stops <= 2);
        }
    }

    #[tokio::test]
    async fn test_search_parses_offers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"offers": [
                    {"id": "of-1", "price": 540.5, "totalDurationMinutes": 1130, "stops": 1},
                    {"id": "broken"},
                    {"id": "of-2", "price": 610.0, "totalDurationMinutes": 980, "stops": 0,
                     "bookingLink": "https://example.test/book/of-2"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = FlightProviderClient::new(server.url(), "test-key".to_string(), 5);
        let offers = client.search(&search_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].id, "of-1");
        assert_eq!(offers[1].booking_link.as_deref(), Some("https://example.test/book/of-2"));
    }

    #[tokio::test]
    async fn test_search_maps_upstream_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let client = FlightProviderClient::new(server.url(), "test-key".to_string(), 5);
        let err = client.search(&search_request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_search_rejects_missing_offers_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let client = FlightProviderClient::new(server.url(), "test-key".to_string(), 5);
        let err = client.search(&search_request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
