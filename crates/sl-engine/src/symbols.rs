//! Reel symbol definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reel symbol. Weights and payout values live in [`GameConfig`](crate::config::GameConfig),
/// not on the symbol itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    /// Premium symbol, rarest on the reel
    Seven = 0,
    Bell = 1,
    Cherry = 2,
    Lemon = 3,
}

impl Symbol {
    /// Number of distinct symbols
    pub const COUNT: usize = 4;

    /// All symbols, in table order (highest paying first)
    pub const ALL: [Symbol; Self::COUNT] =
        [Symbol::Seven, Symbol::Bell, Symbol::Cherry, Symbol::Lemon];

    /// Index into the config weight/payout tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character glyph for grid rendering
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Seven => '7',
            Symbol::Bell => 'B',
            Symbol::Cherry => 'C',
            Symbol::Lemon => 'L',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
