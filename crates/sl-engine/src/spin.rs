//! Spin sampling and round results
//!
//! A spin models a physical three-symbol viewing window on a circular reel:
//! per column one reel index is drawn uniformly, and the column shows the
//! previous, chosen, and next reel entries with wraparound at both ends. The
//! three cells of a column are therefore correlated, never independent.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ROWS;
use crate::paytable::LineWin;
use crate::reel::Reel;
use crate::symbols::Symbol;

/// The visible symbols of one spin: 3 rows × `columns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinGrid {
    rows: [Vec<Symbol>; ROWS],
}

impl SpinGrid {
    /// Build a grid from row slices. Rows must all have the same length.
    pub fn from_rows(rows: [Vec<Symbol>; ROWS]) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// One row (a payline candidate)
    pub fn row(&self, index: usize) -> &[Symbol] {
        &self.rows[index]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Column count
    pub fn columns(&self) -> usize {
        self.rows[0].len()
    }
}

/// Sample one spin from the reel.
///
/// Column draws are independent and with replacement; every draw is accepted.
/// The output shape is always exactly `ROWS × columns`. Deterministic under a
/// seeded RNG.
pub fn spin<R: Rng + ?Sized>(columns: usize, reel: &Reel, rng: &mut R) -> SpinGrid {
    let mut rows: [Vec<Symbol>; ROWS] = std::array::from_fn(|_| Vec::with_capacity(columns));

    for _ in 0..columns {
        let index = rng.random_range(0..reel.len()) as isize;
        rows[0].push(reel.symbol_at(index - 1));
        rows[1].push(reel.symbol_at(index));
        rows[2].push(reel.symbol_at(index + 1));
    }

    SpinGrid { rows }
}

/// Outcome of one spin against an active bet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The sampled grid
    pub grid: SpinGrid,
    /// Wins on active lines, ascending by row index
    pub line_wins: Vec<LineWin>,
    /// Total winnings for the round; always ≥ 0 by construction
    pub winnings: u64,
}

impl RoundResult {
    /// Check if this round paid anything
    pub fn is_win(&self) -> bool {
        self.winnings > 0
    }

    /// Row is among the winning lines
    pub fn is_winning_row(&self, row: usize) -> bool {
        self.line_wins.iter().any(|w| w.line == row)
    }

    /// Winning row indices, ascending
    pub fn winning_rows(&self) -> Vec<usize> {
        self.line_wins.iter().map(|w| w.line).collect()
    }
}
