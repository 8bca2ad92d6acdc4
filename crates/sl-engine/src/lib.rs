//! # sl-engine — Line-based slot machine engine
//!
//! A deterministic-when-seeded slot machine core: reel construction from a
//! symbol weight table, windowed spin sampling on a circular reel, and
//! line-based payout evaluation. Presentation (prompts, rendering, menus)
//! lives in `sl-cli`; this crate does no I/O.
//!
//! ## Architecture
//!
//! ```text
//! GameConfig (weights, payouts, bet limits)
//!     │
//!     ├── Reel (weight expansion + one shuffle per session)
//!     │       │
//!     │       v
//!     ├── spin() → SpinGrid (3×N viewing window, wraparound)
//!     │       │
//!     │       v
//!     └── evaluate() → Evaluation (active lines only)
//!
//! SlotEngine = config + reel + RNG + stats
//! Session    = balance + bet validation + round transitions
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod paytable;
pub mod reel;
pub mod session;
pub mod spin;
pub mod symbols;

pub use config::{GameConfig, PayoutMode, ROWS};
pub use engine::{SessionStats, SlotEngine};
pub use error::{BetError, ConfigError, ConfigResult};
pub use paytable::{Evaluation, LineWin, evaluate};
pub use reel::Reel;
pub use session::{Bet, RoundAction, Session};
pub use spin::{RoundResult, SpinGrid, spin};
pub use symbols::Symbol;
