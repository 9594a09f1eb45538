//! Module resolving an address query into a geocoding result by trying the
//! address spellings of a record one after the other.

use tracing::{debug, error};

use crate::domain::{AddressQuery, AddressResult};
use crate::geocoding::Geocoder;


/// Which spelling of the address to send to the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Land-lot based address (지번)
    LotNumber,
    /// Road-name based address (도로명)
    Road,
}

impl ResolutionStrategy {
    fn address<'q>(&self, query: &'q AddressQuery) -> &'q str {
        match self {
            ResolutionStrategy::LotNumber => &query.lot_number,
            ResolutionStrategy::Road => &query.road,
        }
    }
}

/// Lot-number address first, road address as the fallback.
pub const DEFAULT_STRATEGIES: [ResolutionStrategy; 2] =
    [ResolutionStrategy::LotNumber, ResolutionStrategy::Road];

pub struct AddressResolver<G> {
    geocoder: G,
    strategies: Vec<ResolutionStrategy>,
}

impl<G: Geocoder> AddressResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self::with_strategies(geocoder, DEFAULT_STRATEGIES.to_vec())
    }

    pub fn with_strategies(geocoder: G, strategies: Vec<ResolutionStrategy>) -> Self {
        Self {
            geocoder,
            strategies,
        }
    }

    /// Tries the strategies in order and returns the first usable result, or the
    /// all-empty sentinel if none produced one. Lookup errors never escape: they are
    /// logged and the next strategy is tried.
    pub fn resolve(&self, query: &AddressQuery) -> AddressResult {
        self.strategies
            .iter()
            .find_map(|strategy| self.attempt(*strategy, query))
            .unwrap_or_else(AddressResult::not_found)
    }

    fn attempt(&self, strategy: ResolutionStrategy, query: &AddressQuery) -> Option<AddressResult> {
        let address = strategy.address(query);
        match self.geocoder.geocode(address) {
            Ok(Some(result)) => {
                debug!("Resolved {strategy:?} address: {address}");
                Some(result)
            }
            Ok(None) => {
                error!("No address found for {strategy:?} address: {address}");
                None
            }
            Err(e) => {
                error!("Error fetching address for {strategy:?} address {address}: {e}");
                None
            }
        }
    }
}
