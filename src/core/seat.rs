//! Seat identification and per-seat data storage.
//!
//! A match always has exactly two seats. `SeatId` is a type-safe index
//! and `SeatMap` stores one value per seat with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two match seats.
///
/// Seat indices are 0-based: the first seat is `SeatId::FIRST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// The first seat.
    pub const FIRST: SeatId = SeatId(0);

    /// The second seat.
    pub const SECOND: SeatId = SeatId(1);

    /// Create a seat ID. Panics on an index other than 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "A match has exactly two seats");
        Self(id)
    }

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in the match.
    ///
    /// ```
    /// use bistro_duel::core::SeatId;
    ///
    /// assert_eq!(SeatId::FIRST.opponent(), SeatId::SECOND);
    /// assert_eq!(SeatId::SECOND.opponent(), SeatId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seat IDs in order.
    pub fn both() -> impl Iterator<Item = SeatId> {
        [SeatId::FIRST, SeatId::SECOND].into_iter()
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a fixed two-element array, indexed by `SeatId`.
///
/// ## Example
///
/// ```
/// use bistro_duel::core::{SeatId, SeatMap};
///
/// let mut stars: SeatMap<u8> = SeatMap::with_value(0);
/// stars[SeatId::FIRST] = 3;
/// assert_eq!(stars[SeatId::FIRST], 3);
/// assert_eq!(stars[SeatId::SECOND], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(SeatId) -> T) -> Self {
        Self {
            data: [factory(SeatId::FIRST), factory(SeatId::SECOND)],
        }
    }

    /// Create a map from two explicit values.
    #[must_use]
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Iterate over `(SeatId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Map each entry to a new value, preserving seat order.
    pub fn map<U>(&self, mut f: impl FnMut(SeatId, &T) -> U) -> SeatMap<U> {
        SeatMap {
            data: [
                f(SeatId::FIRST, &self.data[0]),
                f(SeatId::SECOND, &self.data[1]),
            ],
        }
    }
}

impl<T: Clone> SeatMap<T> {
    /// Create a map with both entries set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            data: [value.clone(), value],
        }
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }
}
