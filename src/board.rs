use std::fmt::{Display, Formatter};

use ndarray::Array2;
use tracing::debug;

use crate::cell::Cell;
use crate::direction::Direction;
use crate::location::{Dimension, Location};

/// A rectangular grid of wired tiles with exactly one power source.
///
/// Boards are produced by a [`GameBuilder`](crate::builder::GameBuilder) and mutated through the owning
/// [`Game`](crate::Game), which re-runs propagation after every change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    // indexed [row, col]
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) power_source: Location,
}

impl Board {
    pub(crate) fn new(dims: (Dimension, Dimension), mut cells: Array2<Cell>, power_source: Location) -> Self {
        if let Some(cell) = cells.get_mut(power_source.as_index()) {
            cell.power_source = true;
        }

        Self {
            cells,
            dims,
            power_source,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// Total number of tiles.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// The tile at `location`, if it is on the board.
    pub fn get(&self, location: Location) -> Option<&Cell> {
        self.cells.get(location.as_index())
    }

    /// Every tile alongside its location, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Location, &Cell)> + '_ {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), cell))
    }

    /// Where the power station currently sits.
    pub fn power_source(&self) -> Location {
        self.power_source
    }

    /// The location one step from `location` toward `direction`, if that is still on the board.
    pub fn neighbor(&self, location: Location, direction: Direction) -> Option<Location> {
        Some(direction.attempt_from(location)).filter(|other| other.within(self.dims))
    }

    /// The neighbor toward `direction`, provided both tiles carry a wire facing the other.
    pub fn linked(&self, location: Location, direction: Direction) -> Option<Location> {
        let here = self.get(location)?;
        let other = self.neighbor(location, direction)?;
        let there = self.get(other)?;

        (here.connects(direction) && there.connects(direction.invert())).then_some(other)
    }

    /// Turn the tile at `location` a quarter turn clockwise. Returns `false` if `location` is off the board.
    pub(crate) fn rotate(&mut self, location: Location) -> bool {
        match self.cells.get_mut(location.as_index()) {
            Some(cell) => {
                cell.rotate();
                true
            }
            None => false,
        }
    }

    /// Move the power station one step toward `direction`, but only along a wire joined on both ends.
    /// Returns whether it moved.
    pub(crate) fn relocate_power_source(&mut self, direction: Direction) -> bool {
        let Some(target) = self.linked(self.power_source, direction) else {
            debug!(from = ?self.power_source, %direction, "power station cannot move");
            return false;
        };

        self.cells[self.power_source.as_index()].power_source = false;
        self.cells[target.as_index()].power_source = true;
        self.power_source = target;
        true
    }

    /// Draw the power state of every tile: `@` for the station, `#` for powered tiles, `.` otherwise.
    pub fn power_map(&self) -> String {
        self.render(|cell| {
            if cell.power_source {
                '@'
            } else if cell.powered {
                '#'
            } else {
                '.'
            }
        })
    }

    fn render(&self, glyph: impl Fn(&Cell) -> char) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(glyph(cell));
            }
            out.push('\n');
        }

        out
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(|cell| cell.connectors.glyph()))
    }
}
