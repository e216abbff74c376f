//! Hands and the canonical display order.
//!
//! A `Hand` is an unordered multiset of tiles. Insertion order is kept so
//! that honor tiles, which have no rank to sort by, display in the order
//! they were received.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::tile::{Suit, Tile};

/// Display group: honors, then `tiao`, `wan`, `bing`.
fn display_group(tile: &Tile) -> u8 {
    match tile.suit() {
        Suit::Wind => 0,
        Suit::Tiao => 1,
        Suit::Wan => 2,
        Suit::Bing => 3,
    }
}

/// Sort tiles into canonical display order.
///
/// Honors come first in their original relative order, then `tiao`, `wan`
/// and `bing`, each ascending by rank. The sort is stable, so applying it
/// twice yields the same sequence.
///
/// ```
/// use mahjong_table::tiles::{sort_tiles, Honor, Tile};
///
/// let sorted = sort_tiles(&[Tile::Bing(2), Tile::Wind(Honor::Red), Tile::Tiao(9), Tile::Wind(Honor::East)]);
/// assert_eq!(sorted, vec![Tile::Wind(Honor::Red), Tile::Wind(Honor::East), Tile::Tiao(9), Tile::Bing(2)]);
/// ```
#[must_use]
pub fn sort_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sorted.sort_by_key(|t| (display_group(t), t.rank().unwrap_or(0)));
    sorted
}

/// Join tiles the way status lines show them: `"wan 1 | wan 2"`.
#[must_use]
pub fn join_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// A multiset of tiles held by one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from tiles in the given order.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove one copy of `tile`. Returns false if the hand holds none.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of copies of `tile` held.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Copies held of each distinct tile.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Tile, usize> {
        let mut counts = FxHashMap::default();
        for &tile in &self.tiles {
            *counts.entry(tile).or_insert(0) += 1;
        }
        counts
    }

    /// The tiles in canonical display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Tile> {
        sort_tiles(&self.tiles)
    }

    /// Distinct tiles in canonical display order.
    #[must_use]
    pub fn distinct_sorted(&self) -> Vec<Tile> {
        let mut distinct = self.sorted();
        let mut seen = FxHashSet::default();
        distinct.retain(|&t| seen.insert(t));
        distinct
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tiles(&self.sorted()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Honor;

    #[test]
    fn test_sort_group_order() {
        let tiles = [
            Tile::Bing(1),
            Tile::Wan(3),
            Tile::Tiao(5),
            Tile::Wind(Honor::West),
            Tile::Wan(1),
            Tile::Tiao(2),
        ];

        assert_eq!(
            sort_tiles(&tiles),
            vec![
                Tile::Wind(Honor::West),
                Tile::Tiao(2),
                Tile::Tiao(5),
                Tile::Wan(1),
                Tile::Wan(3),
                Tile::Bing(1),
            ]
        );
    }

    #[test]
    fn test_sort_keeps_honor_order() {
        let tiles = [
            Tile::Wind(Honor::Green),
            Tile::Wind(Honor::East),
            Tile::Wind(Honor::Green),
            Tile::Wind(Honor::South),
        ];
        assert_eq!(sort_tiles(&tiles), tiles.to_vec());
    }

    #[test]
    fn test_sort_idempotent() {
        let tiles = [Tile::Wan(9), Tile::Wind(Honor::Red), Tile::Bing(4), Tile::Tiao(1), Tile::Wan(2)];
        let once = sort_tiles(&tiles);
        assert_eq!(sort_tiles(&once), once);
    }

    #[test]
    fn test_join_tiles() {
        assert_eq!(join_tiles(&[Tile::Wan(1), Tile::Wind(Honor::East)]), "wan 1 | wind east");
        assert_eq!(join_tiles(&[]), "");
    }

    #[test]
    fn test_hand_add_remove_count() {
        let mut hand = Hand::from_tiles([Tile::Wan(5), Tile::Wan(5), Tile::Bing(2)]);

        assert_eq!(hand.count(Tile::Wan(5)), 2);
        assert!(hand.remove(Tile::Wan(5)));
        assert_eq!(hand.count(Tile::Wan(5)), 1);
        assert!(!hand.remove(Tile::Tiao(1)));

        hand.add(Tile::Tiao(1));
        assert_eq!(hand.len(), 3);
        assert!(hand.contains(Tile::Tiao(1)));
    }

    #[test]
    fn test_hand_counts() {
        let hand = Hand::from_tiles([Tile::Wan(1), Tile::Wan(1), Tile::Wan(1), Tile::Bing(9)]);
        let counts = hand.counts();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Tile::Wan(1)], 3);
        assert_eq!(counts[&Tile::Bing(9)], 1);
    }

    #[test]
    fn test_distinct_sorted() {
        let hand = Hand::from_tiles([Tile::Bing(3), Tile::Wan(2), Tile::Bing(3), Tile::Wan(2)]);
        assert_eq!(hand.distinct_sorted(), vec![Tile::Wan(2), Tile::Bing(3)]);

        let red = Tile::Wind(Honor::Red);
        let east = Tile::Wind(Honor::East);
        let hand = Hand::from_tiles([red, east, red]);
        assert_eq!(hand.distinct_sorted(), vec![red, east]);
    }

    #[test]
    fn test_hand_display_is_sorted() {
        let hand = Hand::from_tiles([Tile::Bing(2), Tile::Tiao(8)]);
        assert_eq!(hand.to_string(), "tiao 8 | bing 2");
    }
}
