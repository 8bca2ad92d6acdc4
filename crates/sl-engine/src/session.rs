//! Session state machine: balance, bets, round transitions
//!
//! The session owns the single mutable balance. Bets are validated against
//! the configured bounds and the current balance before any deduction, so the
//! balance can never go negative; running out of funds is a defined state
//! transition, not an error.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::BetError;

/// A validated bet: active line count and stake per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Active paylines (1..=max_lines)
    pub lines: usize,
    /// Stake per line
    pub per_line: u64,
}

impl Bet {
    /// Total stake deducted per spin
    pub fn total(&self) -> u64 {
        self.lines as u64 * self.per_line
    }
}

/// What the player chose to do after a round. Parsed from raw input at the
/// presentation boundary; the core only ever sees this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundAction {
    /// Spin again with the same bet
    Continue,
    /// Return to betting to pick new lines/stake
    ChangeBet,
    /// End the session
    Exit,
}

/// One player session: the balance and the bet bounds it implies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    balance: u64,
}

impl Session {
    /// Start a session with a deposit
    pub fn new(config: GameConfig, deposit: u64) -> Self {
        log::info!("session started with balance {deposit}");
        Self { config, balance: deposit }
    }

    /// Current balance
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Session is over: the balance can no longer cover any bet
    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }

    /// Upper bet-per-line bound for a given line count:
    /// `min(max_bet, balance / lines)`
    pub fn max_bet_per_line(&self, lines: usize) -> u64 {
        self.config.max_bet.min(self.balance / lines.max(1) as u64)
    }

    /// Validate a line count / stake pair into a [`Bet`]
    pub fn bet(&self, lines: usize, per_line: u64) -> Result<Bet, BetError> {
        if lines < 1 || lines > self.config.max_lines {
            return Err(BetError::LinesOutOfRange { got: lines, max: self.config.max_lines });
        }
        let max = self.max_bet_per_line(lines);
        if per_line < self.config.min_bet || per_line > max {
            return Err(BetError::BetOutOfRange {
                got: per_line,
                min: self.config.min_bet,
                max,
            });
        }
        Ok(Bet { lines, per_line })
    }

    /// Deduct the bet's total stake. Fails without touching the balance when
    /// funds no longer cover it; the caller ends the betting round.
    pub fn place(&mut self, bet: Bet) -> Result<(), BetError> {
        let needed = bet.total();
        if needed > self.balance {
            return Err(BetError::InsufficientFunds { needed, balance: self.balance });
        }
        self.balance -= needed;
        Ok(())
    }

    /// Credit a round's winnings
    pub fn settle(&mut self, winnings: u64) {
        self.balance += winnings;
        log::debug!("settled {winnings}, balance now {}", self.balance);
    }
}
