//! The six hex directions.

use std::fmt;

use crate::coord::AxialCoord;

/// One of the six directions out of a hex cell, clockwise from north-east.
///
/// Rows grow towards the north, so `NE`/`NW` point at the next row and
/// `SE`/`SW` at the previous one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    NE = 0,
    E = 1,
    SE = 2,
    SW = 3,
    W = 4,
    NW = 5,
}

impl HexDirection {
    /// All directions in index order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NE,
        HexDirection::E,
        HexDirection::SE,
        HexDirection::SW,
        HexDirection::W,
        HexDirection::NW,
    ];

    /// Direction from its index in `0..6`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 6, "invalid hex direction index {index}");
        Self::ALL[index]
    }

    /// Index of this direction in `0..6`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 3) % 6]
    }

    /// The next direction clockwise.
    #[inline]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % 6]
    }

    /// The next direction counter-clockwise.
    #[inline]
    pub const fn previous(self) -> Self {
        Self::ALL[(self as usize + 5) % 6]
    }

    /// Axial step taken when moving one cell in this direction.
    #[inline]
    pub const fn offset(self) -> AxialCoord {
        match self {
            Self::NE => AxialCoord::new(0, 1),
            Self::E => AxialCoord::new(1, 0),
            Self::SE => AxialCoord::new(1, -1),
            Self::SW => AxialCoord::new(0, -1),
            Self::W => AxialCoord::new(-1, 0),
            Self::NW => AxialCoord::new(-1, 1),
        }
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in HexDirection::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
        assert_eq!(HexDirection::W.opposite(), HexDirection::E);
    }

    #[test]
    fn next_and_previous_cycle() {
        assert_eq!(HexDirection::NW.next(), HexDirection::NE);
        assert_eq!(HexDirection::NE.previous(), HexDirection::NW);
        for dir in HexDirection::ALL {
            assert_eq!(dir.next().previous(), dir);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for dir in HexDirection::ALL {
            assert_eq!(dir.offset() + dir.opposite().offset(), AxialCoord::ZERO);
        }
    }

    #[test]
    fn index_round_trip() {
        for (i, dir) in HexDirection::ALL.into_iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(HexDirection::from_index(i), dir);
        }
    }

    #[test]
    #[should_panic(expected = "invalid hex direction index")]
    fn from_index_rejects_out_of_range() {
        let _ = HexDirection::from_index(6);
    }
}
