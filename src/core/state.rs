//! Game state: public and private information.
//!
//! ## PublicState
//!
//! Observable by every seat:
//! - Phase, turn, active seat
//! - Hand sizes and claimed sets
//! - The discard pile and action history
//!
//! ## GameState
//!
//! Complete state owned by the table driver:
//! - Public state
//! - The wall and every seat's hand
//! - RNG

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::{Action, ActionRecord};
use super::config::DrawOrder;
use super::error::{GameError, TableResult};
use super::rng::GameRng;
use super::seat::{SeatId, SeatMap};
use crate::rules::claims::Melds;
use crate::rules::engine::GameResult;
use crate::tiles::{Deck, Hand, Tile};

/// What the game is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The dealer must discard before the first draw.
    OpeningDiscard,
    /// The active seat must discard from hand.
    AwaitDiscard,
    /// The active seat must draw.
    AwaitDraw,
    /// The active seat drew `drawn` and must keep or reject it.
    AwaitKeep { drawn: Tile },
    /// The active seat may claim `tile`, discarded by `from`.
    AwaitClaim { tile: Tile, from: SeatId },
    Finished(GameResult),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::OpeningDiscard => f.write_str("awaiting the opening discard"),
            Phase::AwaitDiscard => f.write_str("awaiting a discard"),
            Phase::AwaitDraw => f.write_str("awaiting a draw"),
            Phase::AwaitKeep { drawn } => write!(f, "deciding whether to keep {}", drawn),
            Phase::AwaitClaim { tile, from } => {
                write!(f, "deciding whether to claim {} from {}", tile, from)
            }
            Phase::Finished(_) => f.write_str("the game is over"),
        }
    }
}

/// Public game state - observable by all seats.
///
/// Uses `im` persistent vectors so snapshots and clones stay cheap as the
/// discard pile and history grow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    seat_count: usize,

    pub phase: Phase,

    /// Turn number (starts at 1, advances on every rotation).
    pub turn_number: u32,

    /// Action sequence across the game.
    pub action_sequence: u32,

    /// Seat expected to act.
    pub active_seat: SeatId,

    /// Set after a claim: rotation continues after this seat once the
    /// claimer has discarded.
    pub resume_after: Option<SeatId>,

    /// Hand sizes (public knowledge).
    pub hand_sizes: SeatMap<u32>,

    /// Claimed sets per seat.
    pub melds: SeatMap<Melds>,

    /// Every discard, in order. Claimed tiles stay here too.
    pub discard_pile: Vector<Tile>,

    pub wall_remaining: usize,

    pub action_history: Vector<ActionRecord>,
}

impl PublicState {
    /// Create a new public state. The first seat is active and opens with
    /// a discard.
    #[must_use]
    pub fn new(seat_count: usize) -> Self {
        Self {
            seat_count,
            phase: Phase::OpeningDiscard,
            turn_number: 1,
            action_sequence: 0,
            active_seat: SeatId::new(0),
            resume_after: None,
            hand_sizes: SeatMap::with_value(seat_count, 0),
            melds: SeatMap::with_default(seat_count),
            discard_pile: Vector::new(),
            wall_remaining: 0,
            action_history: Vector::new(),
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    /// The most recent discard.
    #[must_use]
    pub fn last_discard(&self) -> Option<Tile> {
        self.discard_pile.back().copied()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Advance to the next turn, handing play to `seat`.
    pub fn advance_turn(&mut self, seat: SeatId) {
        self.turn_number += 1;
        self.active_seat = seat;
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Record an action in history.
    pub fn record(&mut self, seat: SeatId, action: Action, tile: Option<Tile>) {
        let sequence = self.next_sequence();
        self.action_history.push_back(ActionRecord {
            seat,
            action,
            tile,
            turn: self.turn_number,
            sequence,
        });
    }

    /// Encode the public state as a compact binary snapshot.
    ///
    /// Equal snapshots mean two games are indistinguishable to an observer.
    ///
    /// # Errors
    ///
    /// `GameError::Encode` if serialization fails.
    pub fn encode(&self) -> TableResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::Encode {
            message: e.to_string(),
        })
    }

    /// Decode a snapshot produced by `encode`.
    ///
    /// # Errors
    ///
    /// `GameError::Encode` if the bytes are not a valid snapshot.
    pub fn decode(bytes: &[u8]) -> TableResult<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::Encode {
            message: e.to_string(),
        })
    }
}

/// Full game state including private information.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Public state (observable by all).
    pub public: PublicState,

    /// Undrawn tiles.
    wall: Deck,

    /// Hands per seat. Bot hands are dealt and held but never played.
    hands: SeatMap<Hand>,

    /// Deterministic RNG for draws.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state around an undealt wall.
    #[must_use]
    pub fn new(seat_count: usize, wall: Deck, rng: GameRng) -> Self {
        let mut public = PublicState::new(seat_count);
        public.wall_remaining = wall.remaining();

        Self {
            public,
            wall,
            hands: SeatMap::with_default(seat_count),
            rng,
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.public.seat_count()
    }

    #[must_use]
    pub fn wall(&self) -> &Deck {
        &self.wall
    }

    /// Take one tile from the wall.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` when the wall is empty; state is unchanged.
    pub fn draw(&mut self, order: DrawOrder) -> TableResult<Tile> {
        let tile = self.wall.draw(order, &mut self.rng)?;
        self.public.wall_remaining = self.wall.remaining();
        Ok(tile)
    }

    // === Hands ===

    #[must_use]
    pub fn hand(&self, seat: SeatId) -> &Hand {
        &self.hands[seat]
    }

    pub fn add_to_hand(&mut self, seat: SeatId, tile: Tile) {
        self.hands[seat].add(tile);
        self.public.hand_sizes[seat] += 1;
    }

    /// Remove one copy of a tile from a hand.
    ///
    /// Returns true if the tile was found and removed.
    pub fn remove_from_hand(&mut self, seat: SeatId, tile: Tile) -> bool {
        if self.hands[seat].remove(tile) {
            self.public.hand_sizes[seat] -= 1;
            true
        } else {
            false
        }
    }

    /// Replace a hand wholesale, e.g. with the result of a claim.
    pub fn set_hand(&mut self, seat: SeatId, hand: Hand) {
        self.public.hand_sizes[seat] = hand.len() as u32;
        self.hands[seat] = hand;
    }

    // === Discards ===

    /// Append a tile to the discard pile.
    pub fn push_discard(&mut self, tile: Tile) {
        self.public.discard_pile.push_back(tile);
    }

    /// Tiles accounted for across wall, hands, claimed sets, discards and
    /// a drawn tile awaiting keep or reject.
    ///
    /// A claimed set counts only the two tiles it took from hand; its third
    /// tile is still on the discard pile. Stays at the deck size for the
    /// whole game.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let pending = usize::from(matches!(self.public.phase, Phase::AwaitKeep { .. }));

        self.wall.remaining()
            + self.hands.values().map(Hand::len).sum::<usize>()
            + self.public.melds.values().map(Melds::hand_tile_count).sum::<usize>()
            + self.public.discard_pile.len()
            + pending
    }
}
