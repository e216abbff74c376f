//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats are 0-based internally and shown
//! 1-based to the player ("Player 1" is seat 0).
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier at a table of up to 255 seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The number players see for this seat (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all seat IDs at a table of `seat_count` seats.
    ///
    /// ```
    /// use mahjong_table::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], SeatId::new(3));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use mahjong_table::core::{SeatId, SeatMap};
///
/// let mut sizes: SeatMap<usize> = SeatMap::new(4, |_| 13);
/// sizes[SeatId::new(0)] = 14;
/// assert_eq!(sizes[SeatId::new(0)], 14);
/// assert_eq!(sizes[SeatId::new(1)], 13);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        let s3 = SeatId::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.number(), 4);
        assert_eq!(format!("{}", s0), "Player 1");
        assert_eq!(format!("{}", s3), "Player 4");
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(4, |s| s.index() * 10);

        assert_eq!(map[SeatId::new(0)], 0);
        assert_eq!(map[SeatId::new(3)], 30);
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<Vec<u8>> = SeatMap::with_default(2);

        map[SeatId::new(1)].push(7);

        assert!(map[SeatId::new(0)].is_empty());
        assert_eq!(map[SeatId::new(1)], vec![7]);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<i32> = SeatMap::with_value(3, 5);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], (SeatId::new(2), &5));
        assert_eq!(map.values().sum::<i32>(), 15);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(2, |s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<i32> = SeatMap::with_value(0, 0);
    }
}
