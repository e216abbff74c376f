//! Tile values.
//!
//! A tile is a suit plus a rank. The `wind` suit holds six honor tiles with
//! no rank; `bing`, `tiao` and `wan` are ranked 1-9. Tiles carry no
//! identity beyond their value, so duplicates are indistinguishable.
//!
//! The textual form is the one players type at the prompt:
//!
//! ```
//! use mahjong_table::tiles::{Honor, Tile};
//!
//! let tile: Tile = "wan 5".parse().unwrap();
//! assert_eq!(tile, Tile::Wan(5));
//! assert_eq!(Tile::Wind(Honor::Red).to_string(), "wind red");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::GameError;

/// Tile suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Wind,
    Bing,
    Tiao,
    Wan,
}

impl Suit {
    /// All suits in wall-building order.
    pub const ALL: [Suit; 4] = [Suit::Wind, Suit::Bing, Suit::Tiao, Suit::Wan];

    /// Name as it appears in a tile's textual form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Wind => "wind",
            Suit::Bing => "bing",
            Suit::Tiao => "tiao",
            Suit::Wan => "wan",
        }
    }

    /// Whether tiles of this suit carry a rank.
    #[must_use]
    pub const fn is_ranked(self) -> bool {
        !matches!(self, Suit::Wind)
    }
}

/// Honor tiles of the `wind` suit: four directions and two dragons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Honor {
    East,
    South,
    West,
    North,
    Red,
    Green,
}

impl Honor {
    pub const ALL: [Honor; 6] = [
        Honor::East,
        Honor::South,
        Honor::West,
        Honor::North,
        Honor::Red,
        Honor::Green,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Honor::East => "east",
            Honor::South => "south",
            Honor::West => "west",
            Honor::North => "north",
            Honor::Red => "red",
            Honor::Green => "green",
        }
    }
}

/// A mahjong tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wind(Honor),
    Bing(u8),
    Tiao(u8),
    Wan(u8),
}

impl Tile {
    /// Number of distinct tile values (6 honors + 3 suits x 9 ranks).
    pub const DISTINCT_COUNT: usize = 33;

    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// Create a ranked tile. Returns `None` for honors or out-of-range ranks.
    #[must_use]
    pub fn ranked(suit: Suit, rank: u8) -> Option<Self> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return None;
        }
        match suit {
            Suit::Wind => None,
            Suit::Bing => Some(Tile::Bing(rank)),
            Suit::Tiao => Some(Tile::Tiao(rank)),
            Suit::Wan => Some(Tile::Wan(rank)),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Wind(_) => Suit::Wind,
            Tile::Bing(_) => Suit::Bing,
            Tile::Tiao(_) => Suit::Tiao,
            Tile::Wan(_) => Suit::Wan,
        }
    }

    /// Rank 1-9, or `None` for honor tiles.
    #[must_use]
    pub fn rank(&self) -> Option<u8> {
        match self {
            Tile::Wind(_) => None,
            Tile::Bing(r) | Tile::Tiao(r) | Tile::Wan(r) => Some(*r),
        }
    }

    #[must_use]
    pub fn is_honor(&self) -> bool {
        matches!(self, Tile::Wind(_))
    }

    /// The tile `offset` ranks away in the same suit, if it exists.
    ///
    /// ```
    /// use mahjong_table::tiles::Tile;
    ///
    /// assert_eq!(Tile::Tiao(4).offset(-1), Some(Tile::Tiao(3)));
    /// assert_eq!(Tile::Tiao(9).offset(1), None);
    /// ```
    #[must_use]
    pub fn offset(&self, offset: i8) -> Option<Tile> {
        let rank = i16::from(self.rank()?) + i16::from(offset);
        let rank = u8::try_from(rank).ok()?;
        Tile::ranked(self.suit(), rank)
    }

    /// Every distinct tile value in wall-building order: honors, then
    /// `bing`, `tiao` and `wan` 1-9.
    pub fn all() -> impl Iterator<Item = Tile> {
        let honors = Honor::ALL.into_iter().map(Tile::Wind);
        let ranked = [Suit::Bing, Suit::Tiao, Suit::Wan]
            .into_iter()
            .flat_map(|suit| {
                (Self::MIN_RANK..=Self::MAX_RANK).filter_map(move |rank| Tile::ranked(suit, rank))
            });
        honors.chain(ranked)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Wind(honor) => write!(f, "wind {}", honor.name()),
            Tile::Bing(r) | Tile::Tiao(r) | Tile::Wan(r) => {
                write!(f, "{} {}", self.suit().name(), r)
            }
        }
    }
}

impl FromStr for Tile {
    type Err = GameError;

    /// Parse the exact textual form. `"wan 05"` and `"Wan 5"` are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = || GameError::ParseTile {
            input: input.to_string(),
        };

        let (suit, value) = input.split_once(' ').ok_or_else(err)?;
        let tile = match suit {
            "wind" => Honor::ALL
                .into_iter()
                .find(|h| h.name() == value)
                .map(Tile::Wind),
            _ => {
                let suit = Suit::ALL
                    .into_iter()
                    .filter(|s| s.is_ranked())
                    .find(|s| s.name() == suit)
                    .ok_or_else(err)?;
                value.parse::<u8>().ok().and_then(|r| Tile::ranked(suit, r))
            }
        }
        .ok_or_else(err)?;

        // Rejects non-canonical spellings such as leading zeros or "+5".
        if tile.to_string() != input {
            return Err(err());
        }
        Ok(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_creation() {
        assert_eq!(Tile::ranked(Suit::Wan, 1), Some(Tile::Wan(1)));
        assert_eq!(Tile::ranked(Suit::Bing, 9), Some(Tile::Bing(9)));
        assert_eq!(Tile::ranked(Suit::Wan, 0), None);
        assert_eq!(Tile::ranked(Suit::Wan, 10), None);
        assert_eq!(Tile::ranked(Suit::Wind, 1), None);
    }

    #[test]
    fn test_suit_and_rank() {
        assert_eq!(Tile::Tiao(3).suit(), Suit::Tiao);
        assert_eq!(Tile::Tiao(3).rank(), Some(3));
        assert_eq!(Tile::Wind(Honor::North).suit(), Suit::Wind);
        assert_eq!(Tile::Wind(Honor::North).rank(), None);
        assert!(Tile::Wind(Honor::Green).is_honor());
        assert!(!Tile::Bing(2).is_honor());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Tile::Wan(5).offset(1), Some(Tile::Wan(6)));
        assert_eq!(Tile::Wan(1).offset(-1), None);
        assert_eq!(Tile::Wind(Honor::East).offset(1), None);
    }

    #[test]
    fn test_all_distinct_tiles() {
        let all: Vec<_> = Tile::all().collect();
        assert_eq!(all.len(), Tile::DISTINCT_COUNT);
        assert_eq!(all[0], Tile::Wind(Honor::East));
        assert_eq!(all[6], Tile::Bing(1));
        assert_eq!(all[15], Tile::Tiao(1));
        assert_eq!(all[32], Tile::Wan(9));

        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), Tile::DISTINCT_COUNT);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::Bing(7).to_string(), "bing 7");
        assert_eq!(Tile::Wind(Honor::East).to_string(), "wind east");
    }

    #[test]
    fn test_parse_every_tile() {
        for tile in Tile::all() {
            assert_eq!(tile.to_string().parse::<Tile>().unwrap(), tile);
        }
    }

    #[test]
    fn test_parse_rejects_inexact_names() {
        for input in ["", "wan", "wan 0", "wan 10", "wan 05", "Wan 5", "wan  5", "wind up", "wind 1", "bing +5", " tiao 3"] {
            assert!(
                matches!(input.parse::<Tile>(), Err(GameError::ParseTile { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_tile_serde() {
        let tile = Tile::Wind(Honor::Red);
        let json = serde_json::to_string(&tile).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, back);
    }
}
