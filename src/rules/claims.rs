//! Peng and Chi: claiming another seat's discard.
//!
//! Eligibility checks and claim application are pure functions over a
//! borrowed `Hand`. Application returns the new hand together with the set
//! the claim formed, leaving the caller to store both.
//!
//! ## Rules
//!
//! - **Peng**: the hand holds the discarded tile exactly twice. A hand
//!   holding three copies is not eligible.
//! - **Chi**: ranked tiles only. For a discard of rank *n* the hand must
//!   hold both *n-1* and *n+1* of the same suit; runs with the discard at
//!   either end are not offered. At most one option results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::error::{GameError, TableResult};
use crate::core::seat::SeatId;
use crate::tiles::{join_tiles, Hand, Tile};

/// Two hand tiles that complete a run with a discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChiOption {
    pub low: Tile,
    pub high: Tile,
}

impl fmt::Display for ChiOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.low, self.high)
    }
}

/// Chi options for one discard. Only the inside run is offered, so there
/// is never more than one.
pub type ChiOptions = SmallVec<[ChiOption; 1]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    Chi,
    Peng,
}

/// A claimed set of three tiles.
///
/// Peng sets are the claimed tile three times. Chi sets are ordered
/// `[discard, low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: [Tile; 3],
    /// The seat whose discard was claimed.
    pub from: SeatId,
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tiles(&self.tiles))
    }
}

/// A seat's claimed sets, kept in separate Chi and Peng lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Melds {
    /// Completed Chi sets, in claim order.
    pub chi: Vec<Meld>,
    /// Peng sets, in claim order.
    pub peng: Vec<Meld>,
}

impl Melds {
    pub fn push(&mut self, meld: Meld) {
        match meld.kind {
            MeldKind::Chi => self.chi.push(meld),
            MeldKind::Peng => self.peng.push(meld),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chi.is_empty() && self.peng.is_empty()
    }

    /// Number of claimed sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chi.len() + self.peng.len()
    }

    /// Tiles the sets took from hand: two per set. The claimed discard
    /// stays on the discard pile.
    #[must_use]
    pub fn hand_tile_count(&self) -> usize {
        2 * self.len()
    }
}

/// Result of applying a claim: the hand after surrendering tiles, and the
/// set they formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub hand: Hand,
    pub meld: Meld,
}

/// Whether `hand` may Peng `tile`.
///
/// ```
/// use mahjong_table::rules::can_peng;
/// use mahjong_table::tiles::{Hand, Tile};
///
/// let hand = Hand::from_tiles([Tile::Wan(5), Tile::Wan(5), Tile::Bing(2)]);
/// assert!(can_peng(&hand, Tile::Wan(5)));
/// assert!(!can_peng(&hand, Tile::Bing(2)));
/// ```
#[must_use]
pub fn can_peng(hand: &Hand, tile: Tile) -> bool {
    hand.count(tile) == 2
}

/// Chi options `hand` has for `tile`.
#[must_use]
pub fn find_chi_options(hand: &Hand, tile: Tile) -> ChiOptions {
    let mut options = ChiOptions::new();

    if let (Some(low), Some(high)) = (tile.offset(-1), tile.offset(1)) {
        if hand.contains(low) && hand.contains(high) {
            options.push(ChiOption { low, high });
        }
    }

    options
}

/// Whether `hand` may Chi `tile`.
#[must_use]
pub fn can_chi(hand: &Hand, tile: Tile) -> bool {
    !find_chi_options(hand, tile).is_empty()
}

/// Peng `tile`, discarded by `from`.
///
/// # Errors
///
/// `GameError::IneligibleClaim` if `can_peng` does not hold.
pub fn apply_peng(hand: &Hand, tile: Tile, from: SeatId) -> TableResult<ClaimOutcome> {
    if !can_peng(hand, tile) {
        return Err(GameError::IneligibleClaim { tile });
    }

    let mut hand = hand.clone();
    hand.remove(tile);
    hand.remove(tile);

    Ok(ClaimOutcome {
        hand,
        meld: Meld {
            kind: MeldKind::Peng,
            tiles: [tile; 3],
            from,
        },
    })
}

/// Chi `tile`, discarded by `from`, using the hand tiles in `option`.
///
/// # Errors
///
/// `GameError::IneligibleClaim` if `option` is not one of
/// `find_chi_options(hand, tile)`.
pub fn apply_chi(
    hand: &Hand,
    tile: Tile,
    option: ChiOption,
    from: SeatId,
) -> TableResult<ClaimOutcome> {
    if !find_chi_options(hand, tile).contains(&option) {
        return Err(GameError::IneligibleClaim { tile });
    }

    let mut hand = hand.clone();
    hand.remove(option.low);
    hand.remove(option.high);

    Ok(ClaimOutcome {
        hand,
        meld: Meld {
            kind: MeldKind::Chi,
            tiles: [tile, option.low, option.high],
            from,
        },
    })
}
