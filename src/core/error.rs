//! Error type shared by the rules engine and the table driver.

use std::fmt;

use super::seat::SeatId;
use crate::tiles::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A draw was attempted with no tiles left in the wall.
    WallExhausted { draws: usize },
    /// Text that is not the exact name of a tile.
    ParseTile { input: String },
    /// A discard or claim named a tile the hand does not hold.
    TileNotInHand(Tile),
    /// A Peng or Chi the hand is not eligible for.
    IneligibleClaim { tile: Tile },
    /// An action that is not legal for this seat in the current phase.
    IllegalAction {
        seat: SeatId,
        action: String,
        phase: String,
    },
    /// The input source reached end of input.
    InputClosed,
    /// Too many invalid answers to a single prompt.
    RetriesExhausted { attempts: u32 },
    /// Reading or writing the console failed.
    Io { message: String },
    /// Snapshot encoding failed.
    Encode { message: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WallExhausted { draws } => {
                write!(f, "the wall is exhausted after {} draws with no winner", draws)
            }
            GameError::ParseTile { input } => write!(f, "'{}' is not a tile name", input),
            GameError::TileNotInHand(tile) => write!(f, "{} is not in hand", tile),
            GameError::IneligibleClaim { tile } => write!(f, "hand cannot claim {}", tile),
            GameError::IllegalAction { seat, action, phase } => {
                write!(f, "{} cannot {} while {}", seat, action, phase)
            }
            GameError::InputClosed => write!(f, "input closed before the game finished"),
            GameError::RetriesExhausted { attempts } => {
                write!(f, "gave up after {} invalid answers", attempts)
            }
            GameError::Io { message } => write!(f, "console error: {}", message),
            GameError::Encode { message } => write!(f, "snapshot encoding failed: {}", message),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io {
            message: err.to_string(),
        }
    }
}

pub type TableResult<T> = Result<T, GameError>;
