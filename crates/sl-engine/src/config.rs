//! Game configuration
//!
//! One immutable [`GameConfig`] is built at process start and injected into the
//! reel builder, payout evaluator, and session. There is no module-level
//! mutable state; per-test overrides are plain struct construction.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::symbols::Symbol;

/// Visible rows per column. The viewing window is always three symbols tall.
pub const ROWS: usize = 3;

/// How a winning line scales with the bet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutMode {
    /// Canonical rule: payout value × bet per line
    #[default]
    PerLine,
    /// Historical variant: payout value × bet per line × active line count
    PerLineTimesLines,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Relative reel frequency per symbol, indexed by [`Symbol::index`]
    pub weights: [u32; Symbol::COUNT],
    /// Per-unit-bet payout per symbol, indexed by [`Symbol::index`]
    pub payouts: [u64; Symbol::COUNT],
    /// Maximum number of paylines a bet can cover
    pub max_lines: usize,
    /// Minimum bet per line
    pub min_bet: u64,
    /// Maximum bet per line
    pub max_bet: u64,
    /// Grid columns per spin
    pub columns: usize,
    /// Payout rule
    pub payout_mode: PayoutMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            weights: [2, 4, 6, 8],
            payouts: [30, 15, 9, 4],
            max_lines: 3,
            min_bet: 1,
            max_bet: 100,
            columns: 3,
            payout_mode: PayoutMode::PerLine,
        }
    }
}

impl GameConfig {
    /// Reel frequency for a symbol
    pub fn weight(&self, symbol: Symbol) -> u32 {
        self.weights[symbol.index()]
    }

    /// Per-unit-bet payout for a symbol
    pub fn payout(&self, symbol: Symbol) -> u64 {
        self.payouts[symbol.index()]
    }

    /// Total reel length (sum of all weights)
    pub fn reel_len(&self) -> usize {
        self.weights.iter().map(|&w| w as usize).sum()
    }

    /// Validate startup invariants. A violation here is fatal; the engine
    /// must not run with an inconsistent reel.
    pub fn validate(&self) -> ConfigResult<()> {
        for symbol in Symbol::ALL {
            if self.weight(symbol) == 0 {
                return Err(ConfigError::ZeroWeight(symbol));
            }
        }
        if self.reel_len() == 0 {
            return Err(ConfigError::EmptyReel);
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.max_lines == 0 || self.max_lines > ROWS {
            return Err(ConfigError::TooManyLines(self.max_lines, ROWS));
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvertedBetBounds {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reel_len(), 20);
        assert_eq!(config.payout(Symbol::Seven), 30);
        assert_eq!(config.weight(Symbol::Lemon), 8);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut config = GameConfig::default();
        config.weights[Symbol::Bell.index()] = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroWeight(Symbol::Bell)));
    }

    #[test]
    fn test_too_many_lines_rejected() {
        let mut config = GameConfig::default();
        config.max_lines = ROWS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::TooManyLines(4, 3))));
    }

    #[test]
    fn test_inverted_bet_bounds_rejected() {
        let mut config = GameConfig::default();
        config.min_bet = 200;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBetBounds { min: 200, max: 100 })
        ));
    }
}
