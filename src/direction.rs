use strum::{Display, EnumString, VariantArray};

use crate::location::Location;

/// A cardinal direction on a rectangular board.
///
/// The declaration order is clockwise starting from north and doubles as the index of a
/// connector in [`Connectors`](crate::Connectors); rotating a tile is an index rotation over it.
#[derive(Copy, Clone, VariantArray, EnumString, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Toward row 0.
    #[strum(to_string = "north", serialize = "up")]
    North,
    /// Toward the last column.
    #[strum(to_string = "east", serialize = "right")]
    East,
    /// Toward the last row.
    #[strum(to_string = "south", serialize = "down")]
    South,
    /// Toward column 0.
    #[strum(to_string = "west", serialize = "left")]
    West,
}

impl Direction {
    /// Directions which, upon stepping from one location to another, cause the destination to be indexed higher
    /// than the origin in column-major order. Candidate edges are only ever enumerated along these.
    pub(crate) const FORWARD_VARIANTS: &'static [Self] = &[Self::South, Self::East];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps around to a huge coordinate, which no board contains.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The direction a connector facing `self` faces after one clockwise quarter turn.
    pub fn clockwise(&self) -> Self {
        Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
    }

    /// Determine the direction from `a` to `b`, or [`None`] if the two are not orthogonally adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
