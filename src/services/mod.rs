// Service exports
pub mod catalog;
pub mod provider;

pub use catalog::{CatalogError, CatalogStore};
pub use provider::{synthetic_offers, FlightProviderClient, ProviderError};
