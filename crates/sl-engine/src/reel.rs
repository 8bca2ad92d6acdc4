//! Reel construction
//!
//! The reel is the full randomized pool of symbols a spin draws its visible
//! window from. It is built exactly once per session: the weight table is
//! expanded into a flat multiset and uniformly shuffled. Order is the only
//! source of positional randomness; the multiset always matches the weights.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigResult;
use crate::symbols::Symbol;

/// A shuffled circular reel strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    symbols: Vec<Symbol>,
}

impl Reel {
    /// Build a reel from the configured weight table.
    ///
    /// Fails fast on configuration invariant violations (zero weight, empty
    /// reel); those are startup errors, not runtime conditions.
    pub fn build<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> ConfigResult<Self> {
        config.validate()?;

        let mut symbols = Vec::with_capacity(config.reel_len());
        for symbol in Symbol::ALL {
            symbols.extend(std::iter::repeat(symbol).take(config.weight(symbol) as usize));
        }
        symbols.shuffle(rng);

        log::debug!("built reel of {} symbols", symbols.len());
        Ok(Self { symbols })
    }

    /// Create a reel with a fixed symbol order. Useful for deterministic
    /// setups; skips the weight table entirely.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Strip length
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at a cyclic position; wraps at both ends, so `-1` is the last
    /// entry and `len` is the first.
    pub fn symbol_at(&self, position: isize) -> Symbol {
        let len = self.symbols.len() as isize;
        self.symbols[position.rem_euclid(len) as usize]
    }

    /// Symbols in strip order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::ConfigError;

    fn count(reel: &Reel, symbol: Symbol) -> usize {
        reel.symbols().iter().filter(|&&s| s == symbol).count()
    }

    #[test]
    fn test_multiset_matches_weights() {
        let config = GameConfig::default();
        // Two different shuffles, same multiset either way
        for seed in [0u64, 987_654_321] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let reel = Reel::build(&config, &mut rng).unwrap();
            assert_eq!(reel.len(), config.reel_len());
            for symbol in Symbol::ALL {
                assert_eq!(count(&reel, symbol), config.weight(symbol) as usize);
            }
        }
    }

    #[test]
    fn test_different_seeds_differ_in_order() {
        let config = GameConfig::default();
        let a = Reel::build(&config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = Reel::build(&config, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        // Overwhelmingly likely for a 20-symbol multiset
        assert_ne!(a.symbols(), b.symbols());
    }

    #[test]
    fn test_cyclic_access_wraps_both_ends() {
        let reel =
            Reel::from_symbols(vec![Symbol::Seven, Symbol::Bell, Symbol::Cherry, Symbol::Lemon]);
        assert_eq!(reel.symbol_at(-1), Symbol::Lemon);
        assert_eq!(reel.symbol_at(0), Symbol::Seven);
        assert_eq!(reel.symbol_at(4), Symbol::Seven);
        assert_eq!(reel.symbol_at(5), Symbol::Bell);
    }

    #[test]
    fn test_zero_weight_is_fatal() {
        let mut config = GameConfig::default();
        config.weights[Symbol::Seven.index()] = 0;
        let err = Reel::build(&config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroWeight(Symbol::Seven));
    }
}
