//! Table configuration.
//!
//! A `TableConfig` fixes everything about a game that is not chance:
//! - Table size and which seat is operated interactively
//! - Deal sizes
//! - How draws pick a tile from the wall
//! - Which seats a claim may be made from, and where rotation resumes
//! - Pacing and input retry limits
//!
//! ```
//! use std::time::Duration;
//! use mahjong_table::core::{DrawOrder, TableConfig};
//!
//! let config = TableConfig::new(4)
//!     .with_draw_order(DrawOrder::Top)
//!     .with_turn_delay(Duration::from_millis(500));
//! assert_eq!(config.tiles_dealt(), 14 + 3 * 13);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::seat::SeatId;
use crate::tiles::Deck;

/// How a draw selects its tile from the wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOrder {
    /// A uniformly random tile, chosen by the game RNG.
    #[default]
    Random,
    /// The last tile of the wall as stored. Lets a known wall permutation
    /// fix the whole draw sequence.
    Top,
}

/// Which discarders the claiming seat may Chi from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChiSource {
    /// Only the seat immediately before the claimer in rotation.
    #[default]
    PrecedingSeat,
    /// Any other seat.
    AnySeat,
}

/// Where rotation resumes once a claimer has made their discard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeRule {
    /// The seat after the claimer; seats between discarder and claimer
    /// lose their turn.
    #[default]
    AfterClaimer,
    /// The seat after the discarder, as if the claim had not happened.
    AfterDiscarder,
}

/// Claim rules for Peng and Chi. Peng may always be claimed from any seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPolicy {
    pub chi_from: ChiSource,
    pub resume: ResumeRule,
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of seats (2-8).
    pub seat_count: usize,

    /// The seat operated through the console. Also the dealer.
    pub interactive_seat: SeatId,

    /// Tiles dealt to the dealer.
    pub dealer_hand_size: usize,

    /// Tiles dealt to every other seat.
    pub hand_size: usize,

    pub draw_order: DrawOrder,

    pub claim_policy: ClaimPolicy,

    /// Pause before each draw, for human pacing.
    pub turn_delay: Duration,

    /// Invalid answers tolerated for a single prompt before giving up.
    pub max_prompt_retries: u32,
}

impl TableConfig {
    /// Create a configuration for `seat_count` seats with default rules.
    pub fn new(seat_count: usize) -> Self {
        assert!((2..=8).contains(&seat_count), "Seat count must be 2-8");

        Self {
            seat_count,
            interactive_seat: SeatId::new(0),
            dealer_hand_size: 14,
            hand_size: 13,
            draw_order: DrawOrder::Random,
            claim_policy: ClaimPolicy::default(),
            turn_delay: Duration::ZERO,
            max_prompt_retries: 10,
        }
    }

    /// The four-seat table as played from the terminal, with a two second
    /// pause between turns.
    pub fn classic() -> Self {
        Self::new(4).with_turn_delay(Duration::from_secs(2))
    }

    #[must_use]
    pub fn with_interactive_seat(mut self, seat: SeatId) -> Self {
        assert!(seat.index() < self.seat_count, "Interactive seat out of range");
        self.interactive_seat = seat;
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, dealer: usize, others: usize) -> Self {
        self.dealer_hand_size = dealer;
        self.hand_size = others;
        assert!(
            self.tiles_dealt() <= Deck::TOTAL_COUNT,
            "Deal needs more tiles than the deck holds"
        );
        self
    }

    #[must_use]
    pub fn with_draw_order(mut self, order: DrawOrder) -> Self {
        self.draw_order = order;
        self
    }

    #[must_use]
    pub fn with_claim_policy(mut self, policy: ClaimPolicy) -> Self {
        self.claim_policy = policy;
        self
    }

    #[must_use]
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    #[must_use]
    pub fn with_max_prompt_retries(mut self, retries: u32) -> Self {
        assert!(retries > 0, "At least one prompt attempt is required");
        self.max_prompt_retries = retries;
        self
    }

    /// Total tiles leaving the wall during the deal.
    #[must_use]
    pub fn tiles_dealt(&self) -> usize {
        self.dealer_hand_size + self.hand_size * (self.seat_count - 1)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
