//! Registry mapping algorithm identifiers to strategies
//!
//! The registry is filled eagerly with one strategy per [`Algorithm`] and never
//! changes afterwards, so shared references can be handed to any number of
//! threads without locking.

use crate::compression;
use crate::{Algorithm, CompressionStrategy, Error, Result};
use std::sync::OnceLock;

/// Fixed mapping from algorithm identifier to strategy
#[derive(Debug)]
pub struct StrategyRegistry {
    /// Indexed by algorithm identifier
    strategies: Vec<Box<dyn CompressionStrategy>>,
}

impl StrategyRegistry {
    /// Creates a registry holding a strategy for every known algorithm
    pub fn new() -> Self {
        let strategies: Vec<Box<dyn CompressionStrategy>> = Algorithm::ALL
            .into_iter()
            .map(compression::instantiate)
            .collect();

        log::debug!("Registered {} compression strategies", strategies.len());

        Self { strategies }
    }

    /// Retrieves the strategy registered under `id`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownAlgorithm`] carrying `id` when nothing is
    /// registered under it.
    pub fn get_strategy(&self, id: i64) -> Result<&dyn CompressionStrategy> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.strategies.get(index))
            .map(|strategy| strategy.as_ref())
            .ok_or(Error::UnknownAlgorithm { id })
    }

    /// Retrieves the strategy for a known algorithm
    pub fn get(&self, algorithm: Algorithm) -> &dyn CompressionStrategy {
        // `new` registers every variant at its identifier.
        self.strategies[usize::from(algorithm.id())].as_ref()
    }

    /// Iterates over the registered strategies in identifier order
    pub fn strategies(&self) -> impl Iterator<Item = &dyn CompressionStrategy> + '_ {
        self.strategies.iter().map(|strategy| strategy.as_ref())
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<StrategyRegistry> = OnceLock::new();

/// Process-wide registry, built on first use
pub fn registry() -> &'static StrategyRegistry {
    GLOBAL_REGISTRY.get_or_init(StrategyRegistry::new)
}
