//! Grid coordinates and per-axis bounds.
//!
//! Coordinates are 1-based: the value `0` on any axis of a [`Position`]
//! means "undefined" and never names a real cell. In a [`Limits`] vector the
//! same value means the axis is unbounded.

use std::fmt;
use std::ops::Index;

/// A cell of a `D`-dimensional board.
///
/// Every coordinate must be at least 1 for the position to be placeable;
/// see [`inside_space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position<const D: usize>(pub [u32; D]);

impl<const D: usize> Position<D> {
    /// Create a position from its coordinates.
    pub const fn new(coords: [u32; D]) -> Self {
        Self(coords)
    }

    /// Number of axes.
    pub const fn ndim(&self) -> usize {
        D
    }

    /// The raw coordinates.
    pub fn coords(&self) -> &[u32; D] {
        &self.0
    }

    /// Whether every coordinate is non-zero.
    pub fn is_defined(&self) -> bool {
        self.0.iter().all(|&c| c != 0)
    }
}

impl<const D: usize> From<[u32; D]> for Position<D> {
    fn from(coords: [u32; D]) -> Self {
        Self(coords)
    }
}

impl<const D: usize> Index<usize> for Position<D> {
    type Output = u32;

    fn index(&self, axis: usize) -> &u32 {
        &self.0[axis]
    }
}

impl<const D: usize> fmt::Display for Position<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, c) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// Per-axis maximum coordinate of a board, fixed at construction.
///
/// A bound of `0` leaves the axis unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limits<const D: usize>([u32; D]);

impl<const D: usize> Limits<D> {
    /// Create limits from per-axis maxima (`0` = unbounded).
    pub const fn new(bounds: [u32; D]) -> Self {
        Self(bounds)
    }

    /// Limits with every axis unbounded.
    pub const fn unbounded() -> Self {
        Self([0; D])
    }

    /// The raw per-axis bounds.
    pub fn bounds(&self) -> &[u32; D] {
        &self.0
    }

    /// Maximum coordinate on `axis`, or `None` if the axis is unbounded
    /// or does not exist.
    pub fn bound(&self, axis: usize) -> Option<u32> {
        self.0.get(axis).copied().filter(|&b| b != 0)
    }

    /// Whether every axis has a finite bound.
    pub fn is_bounded(&self) -> bool {
        self.0.iter().all(|&b| b != 0)
    }

    /// Total number of placeable cells, or `None` if some axis is
    /// unbounded or the product overflows `u64`.
    pub fn cell_count(&self) -> Option<u64> {
        if !self.is_bounded() {
            return None;
        }
        self.0
            .iter()
            .try_fold(1u64, |acc, &b| acc.checked_mul(u64::from(b)))
    }

    /// Whether `position` names a cell inside these limits.
    pub fn contains(&self, position: &Position<D>) -> bool {
        inside_space(position, self)
    }
}

impl<const D: usize> Default for Limits<D> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<const D: usize> From<[u32; D]> for Limits<D> {
    fn from(bounds: [u32; D]) -> Self {
        Self(bounds)
    }
}

impl<const D: usize> From<Position<D>> for Limits<D> {
    fn from(position: Position<D>) -> Self {
        Self(position.0)
    }
}

impl<const D: usize> fmt::Display for Limits<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (axis, b) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, " x ")?;
            }
            match b {
                0 => write!(f, "inf")?,
                b => write!(f, "{b}")?,
            }
        }
        write!(f, "]")
    }
}

/// True iff every coordinate of `point` is at least 1 and no greater than
/// the matching bound (bounds of `0` are unbounded).
pub fn inside_space<const D: usize>(point: &Position<D>, bound: &Limits<D>) -> bool {
    point
        .0
        .iter()
        .zip(bound.0.iter())
        .all(|(&p, &b)| p != 0 && (b == 0 || p <= b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_space_respects_bounds() {
        let limits = Limits::new([4, 4]);
        assert!(inside_space(&Position::new([1, 1]), &limits));
        assert!(inside_space(&Position::new([4, 4]), &limits));
        assert!(!inside_space(&Position::new([5, 1]), &limits));
        assert!(!inside_space(&Position::new([1, 5]), &limits));
    }

    #[test]
    fn zero_coordinate_is_never_inside() {
        assert!(!inside_space(&Position::new([0, 2]), &Limits::new([4, 4])));
        assert!(!inside_space(&Position::new([2, 0]), &Limits::unbounded()));
    }

    #[test]
    fn zero_bound_leaves_axis_open() {
        let limits = Limits::new([0, 3]);
        assert!(limits.contains(&Position::new([1_000_000, 3])));
        assert!(!limits.contains(&Position::new([1_000_000, 4])));
        assert_eq!(limits.bound(0), None);
        assert_eq!(limits.bound(1), Some(3));
        assert_eq!(limits.bound(2), None);
    }

    #[test]
    fn cell_count_only_for_fully_bounded() {
        assert_eq!(Limits::new([4, 4]).cell_count(), Some(16));
        assert_eq!(Limits::new([4, 0]).cell_count(), None);
        assert_eq!(Limits::new([u32::MAX, u32::MAX, u32::MAX]).cell_count(), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new([3, 2]).to_string(), "(3, 2)");
        assert_eq!(Limits::new([8, 0]).to_string(), "[8 x inf]");
    }

    #[test]
    fn defined_positions() {
        assert!(Position::new([1, 2, 3]).is_defined());
        assert!(!Position::new([1, 0, 3]).is_defined());
        assert_eq!(Position::new([7, 9])[1], 9);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn inside_space_matches_axiswise_definition(
                point in proptest::array::uniform3(0u32..12),
                bound in proptest::array::uniform3(0u32..10),
            ) {
                let expected = (0..3).all(|a| point[a] >= 1 && (bound[a] == 0 || point[a] <= bound[a]));
                prop_assert_eq!(inside_space(&Position::new(point), &Limits::new(bound)), expected);
            }

            #[test]
            fn unbounded_accepts_every_defined_position(
                point in proptest::array::uniform2(1u32..u32::MAX),
            ) {
                prop_assert!(Limits::<2>::unbounded().contains(&Position::new(point)));
            }
        }
    }
}
