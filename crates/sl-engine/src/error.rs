//! Error types for the slot engine

use thiserror::Error;

use crate::symbols::Symbol;

/// Fatal configuration errors, checked once at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol {0:?} has zero weight")]
    ZeroWeight(Symbol),

    #[error("reel would be empty")]
    EmptyReel,

    #[error("grid must have at least one column")]
    NoColumns,

    #[error("max lines {0} exceeds row count {1}")]
    TooManyLines(usize, usize),

    #[error("bet bounds are inverted: min {min} > max {max}")]
    InvertedBetBounds { min: u64, max: u64 },
}

/// Recoverable bet validation errors; the caller re-prompts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BetError {
    #[error("line count {got} out of range 1-{max}")]
    LinesOutOfRange { got: usize, max: usize },

    #[error("bet per line {got} out of range {min}-{max}")]
    BetOutOfRange { got: u64, min: u64, max: u64 },

    #[error("insufficient funds: bet {needed} exceeds balance {balance}")]
    InsufficientFunds { needed: u64, balance: u64 },
}

/// Result alias for configuration-time checks
pub type ConfigResult<T> = Result<T, ConfigError>;
