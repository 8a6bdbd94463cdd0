//! Axial hex coordinates: [`AxialCoord`].
//!
//! A hex position is a cube triple `(x, y, z)` with `x + y + z == 0`. Only `x`
//! and `z` are stored; `y` is always derived, so the invariant cannot be broken
//! by construction.

use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::HexDirection;
use crate::metrics::{INNER_RADIUS, OUTER_RADIUS};

// ---------------------------------------------------------------------------
// AxialCoord
// ---------------------------------------------------------------------------

/// An axial hex coordinate. `y` is derived as `-x - z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    x: i32,
    z: i32,
}

impl AxialCoord {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a coordinate from its `x` and `z` components.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Create a coordinate from a full cube triple.
    ///
    /// # Panics
    ///
    /// Panics if `x + y + z != 0`.
    #[inline]
    pub fn from_xyz(x: i32, y: i32, z: i32) -> Self {
        assert!(
            x + y + z == 0,
            "malformed hex coordinate ({x}, {y}, {z}): components must sum to zero"
        );
        Self { x, z }
    }

    /// Convert a row-staggered offset position (`col`, `row`) to axial.
    ///
    /// Odd rows are shifted half a cell to the right, so every second row the
    /// axial `x` drifts back by one: `x = col - floor(row / 2)`.
    #[inline]
    pub const fn from_offset(col: i32, row: i32) -> Self {
        Self {
            x: col - row.div_euclid(2),
            z: row,
        }
    }

    /// Convert back to row-staggered offset `(col, row)`.
    #[inline]
    pub const fn to_offset(self) -> (i32, i32) {
        (self.x + self.z.div_euclid(2), self.z)
    }

    /// Coordinate of the cell containing a world-plane position.
    ///
    /// `px` runs along the rows and `pz` across them, in the same units as
    /// [`OUTER_RADIUS`]. Rounding errors are resolved by re-deriving the
    /// component that was rounded the furthest.
    pub fn from_position(px: f32, pz: f32) -> Self {
        let mut x = px / (INNER_RADIUS * 2.0);
        let mut y = -x;

        let offset = pz / (OUTER_RADIUS * 3.0);
        x -= offset;
        y -= offset;

        let mut ix = x.round() as i32;
        let iy = y.round() as i32;
        let mut iz = (-x - y).round() as i32;

        if ix + iy + iz != 0 {
            let dx = (x - ix as f32).abs();
            let dy = (y - iy as f32).abs();
            let dz = (-x - y - iz as f32).abs();

            if dx > dy && dx > dz {
                ix = -iy - iz;
            } else if dz > dy {
                iz = -ix - iy;
            }
        }

        Self { x: ix, z: iz }
    }

    /// The `x` component.
    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// The derived `y` component.
    #[inline]
    pub const fn y(self) -> i32 {
        -self.x - self.z
    }

    /// The `z` component.
    #[inline]
    pub const fn z(self) -> i32 {
        self.z
    }

    /// Number of hex steps between `self` and `other`.
    #[inline]
    pub fn distance_to(self, other: AxialCoord) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y().abs_diff(other.y());
        let dz = self.z.abs_diff(other.z);
        (dx + dy + dz) / 2
    }

    /// The adjacent coordinate in direction `dir`.
    #[inline]
    pub fn neighbor(self, dir: HexDirection) -> Self {
        self + dir.offset()
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl PartialOrd for AxialCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AxialCoord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl Add for AxialCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for AxialCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::center_of;
    use proptest::prelude::*;

    #[test]
    fn y_is_derived() {
        let c = AxialCoord::new(3, -5);
        assert_eq!(c.y(), 2);
        assert_eq!(c.x() + c.y() + c.z(), 0);
    }

    #[test]
    fn from_xyz_accepts_valid_triple() {
        let c = AxialCoord::from_xyz(1, -3, 2);
        assert_eq!(c, AxialCoord::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "must sum to zero")]
    fn from_xyz_rejects_malformed_triple() {
        let _ = AxialCoord::from_xyz(1, 1, 1);
    }

    #[test]
    fn offset_conversion() {
        assert_eq!(AxialCoord::from_offset(0, 0), AxialCoord::new(0, 0));
        assert_eq!(AxialCoord::from_offset(4, 1), AxialCoord::new(4, 1));
        assert_eq!(AxialCoord::from_offset(4, 4), AxialCoord::new(2, 4));
        assert_eq!(AxialCoord::from_offset(0, 5), AxialCoord::new(-2, 5));
        // Floor division for negative rows.
        assert_eq!(AxialCoord::from_offset(0, -1), AxialCoord::new(1, -1));
    }

    #[test]
    fn offset_round_trip() {
        for row in -4..6 {
            for col in -3..7 {
                let c = AxialCoord::from_offset(col, row);
                assert_eq!(c.to_offset(), (col, row));
            }
        }
    }

    #[test]
    fn distance_examples() {
        let a = AxialCoord::from_offset(0, 0);
        let b = AxialCoord::from_offset(4, 4);
        assert_eq!(a.distance_to(b), 6);
        assert_eq!(AxialCoord::ZERO.distance_to(AxialCoord::new(3, 0)), 3);
        assert_eq!(AxialCoord::ZERO.distance_to(AxialCoord::new(2, -2)), 2);
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let c = AxialCoord::new(2, -1);
        for dir in HexDirection::ALL {
            assert_eq!(c.distance_to(c.neighbor(dir)), 1);
        }
    }

    #[test]
    fn display_shows_cube_triple() {
        assert_eq!(AxialCoord::new(1, 2).to_string(), "(1, -3, 2)");
    }

    #[test]
    fn position_of_cell_centers() {
        for row in 0..6 {
            for col in 0..6 {
                let (px, pz) = center_of(col, row);
                assert_eq!(
                    AxialCoord::from_position(px, pz),
                    AxialCoord::from_offset(col, row),
                    "center of ({col}, {row})"
                );
            }
        }
    }

    #[test]
    fn position_near_center_rounds_to_cell() {
        let (px, pz) = center_of(3, 2);
        let c = AxialCoord::from_position(px + INNER_RADIUS * 0.5, pz - OUTER_RADIUS * 0.3);
        assert_eq!(c, AxialCoord::from_offset(3, 2));
    }

    proptest! {
        #[test]
        fn cube_invariant_holds(x in -1000i32..1000, z in -1000i32..1000) {
            let c = AxialCoord::new(x, z);
            prop_assert_eq!(c.x() + c.y() + c.z(), 0);
            let o = AxialCoord::from_offset(x, z);
            prop_assert_eq!(o.x() + o.y() + o.z(), 0);
        }

        #[test]
        fn distance_is_symmetric(
            ax in -500i32..500, az in -500i32..500,
            bx in -500i32..500, bz in -500i32..500,
        ) {
            let a = AxialCoord::new(ax, az);
            let b = AxialCoord::new(bx, bz);
            prop_assert_eq!(a.distance_to(a), 0);
            prop_assert_eq!(a.distance_to(b), b.distance_to(a));
        }

        #[test]
        fn distance_obeys_triangle_inequality(
            ax in -200i32..200, az in -200i32..200,
            bx in -200i32..200, bz in -200i32..200,
            cx in -200i32..200, cz in -200i32..200,
        ) {
            let a = AxialCoord::new(ax, az);
            let b = AxialCoord::new(bx, bz);
            let c = AxialCoord::new(cx, cz);
            prop_assert!(a.distance_to(c) <= a.distance_to(b) + b.distance_to(c));
        }
    }
}
