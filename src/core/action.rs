//! Actions a seat can take, and the history records they leave.
//!
//! Which actions are legal depends on the game phase:
//! - `Draw` when the seat is due to draw
//! - `Keep` / `Reject` for a freshly drawn tile at the interactive seat
//! - `Discard` when the seat must give up a tile from hand
//! - `Peng` / `Chi` / `Pass` when offered another seat's discard

use serde::{Deserialize, Serialize};
use std::fmt;

use super::seat::SeatId;
use crate::rules::claims::ChiOption;
use crate::tiles::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw a tile from the wall. Bot seats discard it at once.
    Draw,
    /// Keep the drawn tile; a discard from hand follows.
    Keep,
    /// Discard the drawn tile without taking it into hand.
    Reject,
    /// Discard this tile from hand.
    Discard(Tile),
    /// Claim the offered discard as a triplet.
    Peng(Tile),
    /// Claim the offered discard as a run with these hand tiles.
    Chi(ChiOption),
    /// Decline the offered discard.
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Draw => f.write_str("draw"),
            Action::Keep => f.write_str("keep the drawn tile"),
            Action::Reject => f.write_str("reject the drawn tile"),
            Action::Discard(tile) => write!(f, "discard {}", tile),
            Action::Peng(tile) => write!(f, "peng {}", tile),
            Action::Chi(option) => write!(f, "chi with {}", option),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,

    pub action: Action,

    /// Tile that moved, when the action reveals one: the discarded tile
    /// for a bot's draw, the drawn tile for keep/reject.
    pub tile: Option<Tile>,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}
