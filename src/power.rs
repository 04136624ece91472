//! Breadth-first spread of power from the station across joined wires.

use std::collections::{HashSet, VecDeque};

use strum::VariantArray;
use tracing::trace;

use crate::board::Board;
use crate::direction::Direction;
use crate::location::Location;

/// The tiles one propagation pass reached, power station included.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reach {
    reached: HashSet<Location>,
}

impl Reach {
    /// Number of tiles reached.
    pub fn len(&self) -> usize {
        self.reached.len()
    }

    /// Whether nothing was reached. Never true for a pass over a real board, which always reaches its station.
    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }

    /// Whether `location` was reached.
    pub fn contains(&self, location: Location) -> bool {
        self.reached.contains(&location)
    }

    /// Whether every tile of `board` was reached.
    pub fn covers(&self, board: &Board) -> bool {
        self.len() == board.cell_count()
    }
}

/// Recompute which tiles are powered from scratch.
///
/// Every tile but the station goes dark first; power then spreads outward one tile at a time along any side
/// where both neighbors carry a wire facing each other.
pub(crate) fn propagate(board: &mut Board) -> Reach {
    for cell in board.cells.iter_mut() {
        if !cell.power_source {
            cell.powered = false;
        }
    }

    let source = board.power_source;
    let mut reached = HashSet::with_capacity(board.cell_count());
    let mut queue = VecDeque::from([source]);
    reached.insert(source);

    while let Some(location) = queue.pop_front() {
        for dir in Direction::VARIANTS {
            let Some(next) = board.linked(location, *dir) else {
                continue;
            };
            if reached.insert(next) {
                board.cells[next.as_index()].powered = true;
                queue.push_back(next);
            }
        }
    }

    trace!(reached = reached.len(), total = board.cell_count(), "power propagated");
    Reach { reached }
}
