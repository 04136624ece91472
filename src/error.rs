//! Error types surfaced while configuring and generating a game.

use thiserror::Error;

use crate::location::Location;

/// Reasons a [`GameBuilder`](crate::builder::GameBuilder) may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// The board must be at least one cell wide and one cell tall.
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The starting power station was placed outside the board.
    #[error("power source {0:?} lies outside the board")]
    PowerSourceOutOfBounds(Location),
}

/// Broken invariants hit while growing the spanning tree. These indicate a bug rather than bad input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum GenerationError {
    /// A cell was looked up in the disjoint set without having been registered first.
    #[error("cell {0:?} was never registered with the disjoint set")]
    UnregisteredCell(Location),
}

/// Reasons [`GameBuilder::build`](crate::builder::GameBuilder::build) may fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    /// The builder was configured with at least one [`BuilderInvalidReason`].
    #[error("invalid configuration: {0:?}")]
    Invalid(Vec<BuilderInvalidReason>),
    /// Maze generation broke an internal invariant.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
