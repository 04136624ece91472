#![warn(missing_docs)]

//! # `lightwire`
//!
//! The engine behind a wire-rotation puzzle in the style of "Light 'Em All" or "Net": a rectangular board of tiles,
//! each carrying up to four wire stubs, must be rotated until power from a single station reaches every tile.
//! Begin by configuring a [`GameBuilder`](builder::GameBuilder), then drive the resulting [`Game`] with
//! [`rotate_cell`](Game::rotate_cell), [`move_power_station`](Game::move_power_station),
//! [`regenerate`](Game::regenerate) and [`tick`](Game::tick).
//! Drawing tiles and translating clicks or keys into those calls is left to the front end;
//! with the `wasm` feature, [`WasmGame`](wasm::WasmGame) exposes the same operations to JavaScript.
//!
//! # Internals
//! Boards are generated so that exactly one wiring connects everything:
//!
//! 1. Every pair of orthogonally adjacent tiles becomes a candidate edge with a random weight in `0..width * height`.
//! 2. Kruskal's algorithm keeps the cheapest edges that do not close a cycle, tracked with a union-find over locations.
//! Ties keep enumeration order and the union-find neither compresses paths nor balances by rank, so a seed fully
//! determines the maze.
//! 3. Each kept edge lays a wire on both of its tiles, facing each other.
//! 4. Every tile is then turned a random number of quarter turns.
//!
//! After every move, power is recomputed from scratch by a breadth-first search from the station that only crosses a
//! side when both tiles carry a wire facing each other. The game is won the first time that search reaches every
//! tile, and stays won until the next board is generated.

pub use board::Board;
pub use builder::GameBuilder;
pub use cell::{Cell, Connectors};
pub use direction::Direction;
pub use error::{BuildError, BuilderInvalidReason, GenerationError};
pub use game::Game;
pub use location::Location;
pub use power::Reach;

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod direction;
pub(crate) mod disjoint;
pub mod error;
pub(crate) mod game;
pub(crate) mod location;
pub(crate) mod maze;
pub(crate) mod power;
pub mod builder;
#[cfg(feature = "wasm")]
pub mod wasm;
