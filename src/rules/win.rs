//! Win detection over a single hand.
//!
//! Two shapes win:
//! - Four triplets and a pair: the triplets (floor(count / 3) per tile) add
//!   up to at least four, and some tile is held at least twice.
//! - Seven pairs: the pairs (floor(count / 2) per tile) add up to at least
//!   seven. A tile held four times counts as two pairs.
//!
//! Only the tiles in hand are examined. Hand size is not validated and
//! claimed sets are not counted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tiles::Hand;

/// The shape a winning hand was recognised as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinShape {
    FourTriplets,
    SevenPairs,
}

impl WinShape {
    /// Phrase used in the congratulation line.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            WinShape::FourTriplets => "4 sets of three and 1 pair",
            WinShape::SevenPairs => "7 pairs",
        }
    }
}

impl fmt::Display for WinShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Check a hand for a winning shape. Four triplets is tested first.
///
/// ```
/// use mahjong_table::rules::{check_win, WinShape};
/// use mahjong_table::tiles::{Hand, Tile};
///
/// let pairs = Hand::from_tiles((1..=7).flat_map(|r| [Tile::Wan(r), Tile::Wan(r)]));
/// assert_eq!(check_win(&pairs), Some(WinShape::SevenPairs));
/// ```
#[must_use]
pub fn check_win(hand: &Hand) -> Option<WinShape> {
    let counts = hand.counts();

    let triplets: usize = counts.values().filter(|&&c| c >= 3).map(|c| c / 3).sum();
    let has_pair = counts.values().any(|&c| c >= 2);
    if triplets >= 4 && has_pair {
        return Some(WinShape::FourTriplets);
    }

    let pairs: usize = counts.values().map(|c| c / 2).sum();
    if pairs >= 7 {
        return Some(WinShape::SevenPairs);
    }

    None
}

/// Whether the hand wins with any shape.
#[must_use]
pub fn is_win(hand: &Hand) -> bool {
    check_win(hand).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Honor, Tile};

    fn hand_of(groups: &[(Tile, usize)]) -> Hand {
        Hand::from_tiles(groups.iter().flat_map(|&(t, n)| std::iter::repeat(t).take(n)))
    }

    #[test]
    fn test_four_triplets_and_pair() {
        let hand = hand_of(&[
            (Tile::Wan(1), 3),
            (Tile::Wan(2), 3),
            (Tile::Wan(3), 3),
            (Tile::Wan(4), 3),
            (Tile::Bing(9), 2),
        ]);
        assert_eq!(check_win(&hand), Some(WinShape::FourTriplets));
    }

    #[test]
    fn test_four_triplets_alone_count_as_pair() {
        // A triplet tile also satisfies "held at least twice".
        let hand = hand_of(&[
            (Tile::Wan(1), 3),
            (Tile::Tiao(2), 3),
            (Tile::Bing(3), 3),
            (Tile::Wind(Honor::East), 3),
            (Tile::Wan(9), 1),
        ]);
        assert_eq!(check_win(&hand), Some(WinShape::FourTriplets));
    }

    #[test]
    fn test_three_triplets_not_enough() {
        let hand = hand_of(&[
            (Tile::Wan(1), 3),
            (Tile::Wan(2), 3),
            (Tile::Wan(3), 3),
            (Tile::Bing(9), 2),
            (Tile::Tiao(5), 1),
            (Tile::Tiao(6), 1),
            (Tile::Tiao(7), 1),
        ]);
        assert_eq!(check_win(&hand), None);
    }

    #[test]
    fn test_seven_distinct_pairs() {
        let hand = hand_of(&[
            (Tile::Wan(1), 2),
            (Tile::Wan(5), 2),
            (Tile::Tiao(2), 2),
            (Tile::Tiao(8), 2),
            (Tile::Bing(3), 2),
            (Tile::Wind(Honor::Red), 2),
            (Tile::Wind(Honor::North), 2),
        ]);
        assert_eq!(hand.len(), 14);
        assert_eq!(check_win(&hand), Some(WinShape::SevenPairs));
    }

    #[test]
    fn test_quad_counts_as_two_pairs() {
        let hand = hand_of(&[
            (Tile::Bing(4), 4),
            (Tile::Wan(1), 2),
            (Tile::Wan(2), 2),
            (Tile::Wan(3), 2),
            (Tile::Tiao(4), 2),
            (Tile::Tiao(5), 2),
        ]);
        assert_eq!(check_win(&hand), Some(WinShape::SevenPairs));
    }

    #[test]
    fn test_six_pairs_not_enough() {
        let hand = hand_of(&[
            (Tile::Wan(1), 2),
            (Tile::Wan(2), 2),
            (Tile::Wan(3), 2),
            (Tile::Tiao(4), 2),
            (Tile::Tiao(5), 2),
            (Tile::Tiao(6), 2),
            (Tile::Bing(1), 1),
            (Tile::Bing(9), 1),
        ]);
        assert!(!is_win(&hand));
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(check_win(&Hand::new()), None);
    }

    #[test]
    fn test_description() {
        assert_eq!(WinShape::FourTriplets.to_string(), "4 sets of three and 1 pair");
        assert_eq!(WinShape::SevenPairs.to_string(), "7 pairs");
    }
}
