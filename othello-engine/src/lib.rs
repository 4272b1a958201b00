//! `othello-engine` is a small, safe Othello rules engine for UIs and game servers.
//!
//! The crate is organized in three layers:
//!
//!  - [`Cell`], [`Player`] and [`Location`] are the vocabulary types.
//!  - [`Grid`] owns the 8x8 cell matrix and implements the raw board dynamics:
//!    the eight-direction legality scan, capture collection and the counting scans.
//!  - [`Engine`] is the stateful game: it tracks whose turn it is, applies moves
//!    atomically, skips players with no legal move and re-derives the
//!    [`BoardState`] (score, phase, winner) after every mutation.
//!
//! All fallible operations return [`EngineError`]; a rejected operation never
//! modifies the engine.

pub mod test_utils;

mod cell;
mod engine;
mod error;
mod grid;
mod location;
mod state;
mod utils;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use location::*;
pub use state::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
