// Route exports
pub mod flights;
pub mod quiz;

use std::sync::Arc;

use actix_web::web;

use crate::core::{FlightRanker, RetreatMatcher};
use crate::services::{CatalogStore, FlightProviderClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    /// None when no provider is configured; searches use synthetic offers
    pub provider: Option<Arc<FlightProviderClient>>,
    pub matcher: RetreatMatcher,
    pub ranker: FlightRanker,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(quiz::configure)
            .configure(flights::configure),
    );
}
