//! JavaScript bindings for a browser front end, which owns drawing and input.

use std::str::FromStr;

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::builder::GameBuilder;
use crate::direction::Direction;
use crate::game::Game;

/// A [`Game`] handle for JavaScript.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a game on a freshly generated `width` by `height` board.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64) -> Result<WasmGame, JsError> {
        let inner = GameBuilder::with_dims(width, height)
            .seed(seed)
            .build()
            .map_err(|err| JsError::new(&err.to_string()))?;

        Ok(Self { inner })
    }

    /// See [`Game::rotate_cell`].
    #[wasm_bindgen(js_name = rotateCell)]
    pub fn rotate_cell(&mut self, col: usize, row: usize) -> bool {
        self.inner.rotate_cell(col, row)
    }

    /// See [`Game::move_power_station`]. `direction` is one of `north`, `east`, `south`, `west` (or `up`, `right`,
    /// `down`, `left`); anything else is ignored.
    #[wasm_bindgen(js_name = movePowerStation)]
    pub fn move_power_station(&mut self, direction: &str) -> bool {
        Direction::from_str(direction).is_ok_and(|dir| self.inner.move_power_station(dir))
    }

    /// See [`Game::regenerate`].
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<(), JsError> {
        self.inner.regenerate(seed).map_err(|err| JsError::new(&err.to_string()))
    }

    /// See [`Game::tick`].
    pub fn tick(&mut self) {
        self.inner.tick();
    }

    /// Whether the game has been won.
    #[wasm_bindgen(getter)]
    pub fn won(&self) -> bool {
        self.inner.won()
    }

    /// Ticks counted before the win.
    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> u64 {
        self.inner.elapsed()
    }

    /// Rotations made this episode.
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u64 {
        self.inner.moves()
    }

    /// Number of columns.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.inner.board().width()
    }

    /// Number of rows.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.inner.board().height()
    }

    /// Row-major connector bitmasks, see [`Connectors::bits`](crate::Connectors::bits).
    pub fn connectors(&self) -> Uint8Array {
        let bits: Vec<u8> = self.inner.board().cells().map(|(_, cell)| cell.connectors().bits()).collect();
        Uint8Array::from(bits.as_slice())
    }

    /// Row-major power state: 2 for the station, 1 for powered tiles, 0 otherwise.
    pub fn power(&self) -> Uint8Array {
        let states: Vec<u8> = self.inner.board().cells()
            .map(|(_, cell)| match (cell.is_power_source(), cell.is_powered()) {
                (true, _) => 2,
                (false, true) => 1,
                (false, false) => 0,
            })
            .collect();
        Uint8Array::from(states.as_slice())
    }
}
