//! Tile system: tile values, the wall, and hands.
//!
//! ## Key Types
//!
//! - `Tile`: Value-typed tile (`wind east`, `bing 5`, ...)
//! - `Deck`: The 132-tile wall, drained by draws
//! - `Hand`: Multiset of tiles with canonical display order

pub mod deck;
pub mod hand;
pub mod tile;

pub use deck::Deck;
pub use hand::{join_tiles, sort_tiles, Hand};
pub use tile::{Honor, Suit, Tile};
