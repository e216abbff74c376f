//! Core table types: seats, state, actions, RNG, configuration, errors.
//!
//! Nothing here knows the claim or win rules. Variants are chosen through
//! `TableConfig` rather than by modifying the core.

pub mod seat;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use seat::{SeatId, SeatMap};
pub use rng::GameRng;
pub use config::{ChiSource, ClaimPolicy, DrawOrder, ResumeRule, TableConfig};
pub use action::{Action, ActionRecord};
pub use state::{GameState, Phase, PublicState};
pub use error::{GameError, TableResult};
