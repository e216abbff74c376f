//! Seat rotation and claim seating rules.
//!
//! Turn order cycles through seats modulo the table size. Which discarders
//! a seat may Chi from, and where rotation resumes after a claim, are
//! computed relative to the seats involved rather than fixed indices, so
//! the same rules hold at any table size.

use crate::core::config::{ChiSource, ClaimPolicy, ResumeRule};
use crate::core::seat::SeatId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seating {
    seat_count: usize,
}

impl Seating {
    #[must_use]
    pub fn new(seat_count: usize) -> Self {
        assert!((1..=255).contains(&seat_count), "Seat count must be 1-255");
        Self { seat_count }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    /// The seat that plays after `seat`.
    #[must_use]
    pub fn next(&self, seat: SeatId) -> SeatId {
        SeatId::new(((seat.index() + 1) % self.seat_count) as u8)
    }

    /// The seat that plays before `seat`.
    #[must_use]
    pub fn previous(&self, seat: SeatId) -> SeatId {
        SeatId::new(((seat.index() + self.seat_count - 1) % self.seat_count) as u8)
    }

    /// Every seat in play order starting at `first`.
    pub fn rotation_from(&self, first: SeatId) -> impl Iterator<Item = SeatId> + '_ {
        std::iter::successors(Some(first), move |&s| Some(self.next(s))).take(self.seat_count)
    }

    /// Whether `claimer` may Chi a tile discarded by `discarder`.
    #[must_use]
    pub fn may_chi(&self, policy: &ClaimPolicy, claimer: SeatId, discarder: SeatId) -> bool {
        if claimer == discarder {
            return false;
        }
        match policy.chi_from {
            ChiSource::PrecedingSeat => self.previous(claimer) == discarder,
            ChiSource::AnySeat => true,
        }
    }

    /// The seat whose successor plays once the claimer has discarded.
    #[must_use]
    pub fn resume_after(&self, policy: &ClaimPolicy, claimer: SeatId, discarder: SeatId) -> SeatId {
        match policy.resume {
            ResumeRule::AfterClaimer => claimer,
            ResumeRule::AfterDiscarder => discarder,
        }
    }
}
