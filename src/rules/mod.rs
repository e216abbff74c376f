//! Rules of play.
//!
//! - `claims`: Peng and Chi eligibility and application
//! - `win`: winning-hand detection
//! - `seating`: turn rotation and claim seating
//! - `engine`: the `RulesEngine` trait and the table's implementation
//!
//! Claim and win checks are pure functions over a `Hand`; only the engine
//! touches `GameState`.

pub mod claims;
pub mod engine;
pub mod seating;
pub mod win;

pub use claims::{
    apply_chi, apply_peng, can_chi, can_peng, find_chi_options, ChiOption, ChiOptions,
    ClaimOutcome, Meld, MeldKind, Melds,
};
pub use engine::{GameResult, MahjongRules, RulesEngine};
pub use seating::Seating;
pub use win::{check_win, is_win, WinShape};
