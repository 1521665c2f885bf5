use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Retreat;

/// Errors that can occur loading the retreat catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog file contains no retreats")]
    Empty,
}

/// Process-wide read-only retreat catalog
///
/// The catalog is a static, versioned JSON file loaded once at startup and
/// shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    retreats: Vec<Retreat>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file (an array of retreat records)
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let retreats: Vec<Retreat> = serde_json::from_str(&raw)?;

        if retreats.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::info!("Loaded {} retreats from catalog", retreats.len());
        Ok(Self { retreats })
    }

    /// Build a store from already-parsed records (tests, embedded data)
    pub fn from_retreats(retreats: Vec<Retreat>) -> Self {
        Self { retreats }
    }

    pub fn all(&self) -> &[Retreat] {
        &self.retreats
    }

    /// Retreats a traveler can still book as of `today`
    pub fn bookable(&self, today: NaiveDate) -> Vec<&Retreat> {
        self.retreats
            .iter()
            .filter(|retreat| retreat.bookable(today))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.retreats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retreats.is_empty()
    }
}
