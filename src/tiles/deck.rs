//! The wall: every tile not yet dealt or drawn.
//!
//! A fresh deck holds four copies of each of the 33 distinct tiles. It is
//! only ever drained; discards never return to it.

use crate::core::config::DrawOrder;
use crate::core::error::{GameError, TableResult};
use crate::core::rng::GameRng;

use super::tile::Tile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    tiles: Vec<Tile>,
    drawn: usize,
}

impl Deck {
    /// Copies of each distinct tile.
    pub const COPIES: usize = 4;

    /// Tiles in a full deck: 33 x 4.
    pub const TOTAL_COUNT: usize = Tile::DISTINCT_COUNT * Self::COPIES;

    /// A full deck in canonical order: the distinct tiles repeated four times.
    #[must_use]
    pub fn new() -> Self {
        let tiles = (0..Self::COPIES).flat_map(|_| Tile::all()).collect();
        Self { tiles, drawn: 0 }
    }

    /// A full deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        rng.shuffle(&mut deck.tiles);
        deck
    }

    /// A deck holding exactly these tiles. With `DrawOrder::Top` the last
    /// tile is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles, drawn: 0 }
    }

    /// Remove and return one tile.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` when no tiles remain.
    pub fn draw(&mut self, order: DrawOrder, rng: &mut GameRng) -> TableResult<Tile> {
        if self.tiles.is_empty() {
            return Err(GameError::WallExhausted { draws: self.drawn });
        }

        let tile = match order {
            DrawOrder::Random => {
                let index = rng.gen_index(self.tiles.len());
                self.tiles.remove(index)
            }
            DrawOrder::Top => self.tiles.pop().ok_or(GameError::WallExhausted { draws: self.drawn })?,
        };
        self.drawn += 1;
        Ok(tile)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles removed since the deck was built.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
