//! Payline evaluation and payouts

use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, PayoutMode, ROWS};
use crate::spin::SpinGrid;
use crate::symbols::Symbol;

/// A win on a single payline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    /// Winning row index
    pub line: usize,
    /// The symbol filling the line
    pub symbol: Symbol,
    /// Win amount for this line
    pub amount: u64,
}

/// Result of evaluating one grid against a bet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Line wins, ascending by row index
    pub line_wins: Vec<LineWin>,
    /// Sum over all line wins
    pub total_win: u64,
}

impl Evaluation {
    /// Check if anything paid
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }
}

/// Evaluate the active lines of a grid.
///
/// Only rows with index `< line_count` are eligible; later rows are never
/// inspected even when they would match. A row wins iff every column holds
/// the identical symbol. Total over well-formed inputs: there are no error
/// conditions and the result is always ≥ 0.
pub fn evaluate(
    grid: &SpinGrid,
    line_count: usize,
    bet_per_line: u64,
    config: &GameConfig,
) -> Evaluation {
    let mut line_wins = Vec::new();

    for line in 0..line_count.min(ROWS) {
        let row = grid.row(line);
        let Some((&first, rest)) = row.split_first() else {
            continue;
        };
        if rest.iter().all(|&s| s == first) {
            let mut amount = config.payout(first) * bet_per_line;
            if config.payout_mode == PayoutMode::PerLineTimesLines {
                amount *= line_count as u64;
            }
            line_wins.push(LineWin { line, symbol: first, amount });
        }
    }

    let total_win = line_wins.iter().map(|w| w.amount).sum();
    Evaluation { line_wins, total_win }
}
