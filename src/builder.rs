use std::num::NonZero;

use crate::error::{BuildError, BuilderInvalidReason};
use crate::game::Game;
use crate::location::Location;

/// Configuration for a new [`Game`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a setter records a [`BuilderInvalidReason`], later setters do nothing and [`build`](Self::build) fails.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    // width, height
    dims: (usize, usize),
    power_source: Location,
    seed: u64,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::with_dims(8, 8)
    }
}

impl GameBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    ///
    /// The power station starts in the top left corner and the seed is 0.
    /// A zero dimension leaves the builder in a [`ZeroDimension`](BuilderInvalidReason::ZeroDimension) invalid state.
    pub fn with_dims(width: usize, height: usize) -> Self {
        let mut invalid_reasons = Vec::new();
        if width == 0 || height == 0 {
            invalid_reasons.push(BuilderInvalidReason::ZeroDimension { width, height });
        }

        Self {
            dims: (width, height),
            power_source: Location(0, 0),
            seed: 0,
            invalid_reasons,
        }
    }

    /// Seed the random stream that weighs edges and scrambles tiles.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.seed = seed;
        self
    }

    /// Place the power station at `location` on every board this game generates.
    ///
    /// May cause the builder to enter a [`PowerSourceOutOfBounds`](BuilderInvalidReason::PowerSourceOutOfBounds)
    /// invalid state if `location` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn power_source(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0 || location.1 >= self.dims.1 {
            self.invalid_reasons.push(BuilderInvalidReason::PowerSourceOutOfBounds(location));
            return self;
        }

        self.power_source = location;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Generate the first board and start a [`Game`] on it, with power already propagated.
    pub fn build(&self) -> Result<Game, BuildError> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError::Invalid(self.invalid_reasons.clone()));
        }

        let (Some(width), Some(height)) = (NonZero::new(self.dims.0), NonZero::new(self.dims.1)) else {
            return Err(BuildError::Invalid(vec![BuilderInvalidReason::ZeroDimension {
                width: self.dims.0,
                height: self.dims.1,
            }]));
        };

        Ok(Game::new((width, height), self.power_source, self.seed)?)
    }
}
