//! Engine façade tying configuration, reel, and randomness together

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigResult;
use crate::paytable::evaluate;
use crate::reel::Reel;
use crate::session::Bet;
use crate::spin::{RoundResult, spin};

/// Slot engine
///
/// Owns the immutable configuration, the once-shuffled reel, and the RNG that
/// feeds every spin. System entropy by default; seedable for reproducible
/// sessions.
pub struct SlotEngine {
    config: GameConfig,
    reel: Reel,
    rng: StdRng,
    spin_count: u64,
    stats: SessionStats,
}

/// Aggregate spin statistics for the running session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: u64,
    pub total_win: u64,
    pub wins: u64,
    pub losses: u64,
    pub max_win: u64,
}

impl SessionStats {
    /// Return-to-player percentage
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_win as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of spins that paid anything
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }

    fn record(&mut self, bet: u64, win: u64) {
        self.total_spins += 1;
        self.total_bet += bet;
        self.total_win += win;
        if win > 0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.max_win = self.max_win.max(win);
    }
}

impl SlotEngine {
    /// Create an engine with system entropy
    pub fn new(config: GameConfig) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine with a fixed seed; the reel shuffle and every
    /// subsequent spin are reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> ConfigResult<Self> {
        let reel = Reel::build(&config, &mut rng)?;
        Ok(Self {
            config,
            reel,
            rng,
            spin_count: 0,
            stats: SessionStats::default(),
        })
    }

    /// Reseed the RNG. Affects subsequent spins only; the reel was built once
    /// at construction and is never rebuilt.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Current configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The session reel
    pub fn reel(&self) -> &Reel {
        &self.reel
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Execute one spin against a bet and evaluate its active lines
    pub fn spin_round(&mut self, bet: Bet) -> RoundResult {
        self.spin_count += 1;

        let grid = spin(self.config.columns, &self.reel, &mut self.rng);
        let eval = evaluate(&grid, bet.lines, bet.per_line, &self.config);
        self.stats.record(bet.total(), eval.total_win);

        log::debug!(
            "spin {:06}: {} winning line(s), won {}",
            self.spin_count,
            eval.line_wins.len(),
            eval.total_win
        );

        RoundResult {
            grid,
            line_wins: eval.line_wins,
            winnings: eval.total_win,
        }
    }
}
