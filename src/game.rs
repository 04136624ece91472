use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::board::Board;
use crate::direction::Direction;
use crate::error::GenerationError;
use crate::location::{Dimension, Location};
use crate::maze;
use crate::power::{self, Reach};

/// One episode of play: a [`Board`] plus the win flag and counters shown to the player.
///
/// Every mutating operation finishes its own propagation pass before returning, so the powered state read back from
/// [`board`](Self::board) is always current.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    dims: (Dimension, Dimension),
    // where the station starts on every regenerated board
    origin: Location,
    rng: ChaCha8Rng,
    reach: Reach,
    won: bool,
    elapsed: u64,
    moves: u64,
}

impl Game {
    pub(crate) fn new(dims: (Dimension, Dimension), origin: Location, seed: u64) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = maze::generate(dims, origin, &mut rng)?;

        let mut ret = Self {
            board,
            dims,
            origin,
            rng,
            reach: Reach::default(),
            won: false,
            elapsed: 0,
            moves: 0,
        };
        ret.refresh();
        Ok(ret)
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tiles reached by the latest propagation pass.
    pub fn reach(&self) -> &Reach {
        &self.reach
    }

    /// Whether every tile has been powered at some point this episode. Once set, this stays set until regeneration.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Ticks counted this episode before it was won.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Rotations made this episode.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Rotate the tile at (`col`, `row`) a quarter turn clockwise and recompute power.
    ///
    /// Coordinates off the board are ignored: nothing changes, nothing is recomputed, and `false` is returned.
    pub fn rotate_cell(&mut self, col: usize, row: usize) -> bool {
        if !self.board.rotate(Location(col, row)) {
            return false;
        }

        self.moves += 1;
        self.refresh();
        true
    }

    /// Move the power station one tile toward `direction` and recompute power.
    ///
    /// The move only happens along a wire joined on both ends; otherwise nothing changes and `false` is returned.
    pub fn move_power_station(&mut self, direction: Direction) -> bool {
        if !self.board.relocate_power_source(direction) {
            return false;
        }

        self.refresh();
        true
    }

    /// Throw the board away and generate a new one of the same size, clearing the win flag and both counters.
    ///
    /// With a `seed`, the new board is reproducible from that seed alone. Without one, generation continues the
    /// random stream this game was built with.
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<(), GenerationError> {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        self.board = maze::generate(self.dims, self.origin, &mut self.rng)?;
        self.won = false;
        self.elapsed = 0;
        self.moves = 0;
        self.refresh();
        Ok(())
    }

    /// Count one elapsed-time signal, unless the game is already won.
    pub fn tick(&mut self) {
        if !self.won {
            self.elapsed += 1;
        }
    }

    fn refresh(&mut self) {
        self.reach = power::propagate(&mut self.board);
        if !self.won && self.reach.covers(&self.board) {
            info!(moves = self.moves, elapsed = self.elapsed, "every tile is powered");
            self.won = true;
        }
    }
}
