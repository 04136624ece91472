use std::ops::{Index, IndexMut};

use strum::VariantArray;

use crate::direction::Direction;

/// The four wire stubs of a tile, indexed by [`Direction`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Connectors([bool; 4]);

impl Connectors {
    /// Connectors facing every direction in `directions`.
    pub fn facing(directions: &[Direction]) -> Self {
        let mut ret = Self::default();
        for dir in directions {
            ret[*dir] = true;
        }
        ret
    }

    /// Turn every connector a quarter turn clockwise: what faced north now faces east, and so on.
    pub fn rotate(&mut self) {
        self.0.rotate_right(1);
    }

    /// The directions which carry a connector, in clockwise order from north.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::VARIANTS.iter().copied().filter(move |dir| self[*dir])
    }

    /// Bitmask of these connectors with north as bit 0, east bit 1, south bit 2 and west bit 3.
    pub fn bits(&self) -> u8 {
        self.directions().fold(0, |acc, dir| acc | (1u8 << dir.index()))
    }

    /// Number of connectors present.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }

    /// The box-drawing glyph for this arrangement of wires.
    pub fn glyph(&self) -> char {
        const GLYPHS: [char; 16] = [
            ' ', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
        ];
        GLYPHS[self.bits() as usize]
    }
}

impl Index<Direction> for Connectors {
    type Output = bool;

    fn index(&self, index: Direction) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl IndexMut<Direction> for Connectors {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

/// One tile on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cell {
    pub(crate) connectors: Connectors,
    pub(crate) power_source: bool,
    // only ever written by a propagation pass
    pub(crate) powered: bool,
}

impl Cell {
    /// The wires on this tile.
    pub fn connectors(&self) -> Connectors {
        self.connectors
    }

    /// Whether this tile has a wire facing `direction`.
    pub fn connects(&self, direction: Direction) -> bool {
        self.connectors[direction]
    }

    /// Whether this tile holds the power station.
    pub fn is_power_source(&self) -> bool {
        self.power_source
    }

    /// Whether the most recent propagation pass reached this tile.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub(crate) fn rotate(&mut self) {
        self.connectors.rotate();
    }
}
