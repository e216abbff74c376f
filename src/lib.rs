//! # mahjong-table
//!
//! A simplified mahjong table played at the terminal: one operator seat
//! against bot seats that discard whatever they draw.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Claim eligibility, claim application and win
//!    detection are functions over a borrowed `Hand`. Only the engine
//!    mutates `GameState`.
//!
//! 2. **N-Seat Rotation**: Seat arithmetic lives in `Seating` and is
//!    parameterised by table size, never by fixed seat numbers.
//!
//! 3. **Configuration Over Convention**: Deal sizes, draw order, claim
//!    seating and prompt limits are set through `TableConfig`.
//!
//! ## Architecture
//!
//! - **Explicit Phases**: The game is a state machine over `Phase`. The
//!   driver asks `RulesEngine::legal_actions` and feeds one `Action` at a
//!   time to `apply_action`.
//!
//! - **Persistent Data Structures**: The discard pile and action history
//!   are `im` vectors, so public snapshots clone cheaply.
//!
//! - **Deterministic Replay**: Shuffles and draws come from a seeded
//!   ChaCha8 `GameRng`; equal seeds and inputs give byte-identical
//!   `PublicState::encode` snapshots.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `tiles`: Tiles, the wall and hands
//! - `rules`: Claims, win detection, seating and the rules engine
//! - `table`: Console I/O and the interactive turn loop

pub mod core;
pub mod tiles;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    SeatId, SeatMap,
    GameRng,
    TableConfig, DrawOrder, ClaimPolicy, ChiSource, ResumeRule,
    Action, ActionRecord,
    Phase, PublicState, GameState,
    GameError, TableResult,
};

pub use crate::tiles::{Deck, Hand, Honor, Suit, Tile, sort_tiles, join_tiles};

pub use crate::rules::{
    RulesEngine, MahjongRules, GameResult, Seating,
    ChiOption, Meld, MeldKind, Melds, ClaimOutcome, WinShape,
    can_peng, can_chi, find_chi_options, apply_peng, apply_chi, check_win, is_win,
};

pub use crate::table::{Console, StdConsole, ScriptedConsole, Table};
