//! Implements the stateful Othello game.
//!
//! [`Engine`] owns the board, the turn indicator, the derived [`BoardState`]
//! and the move history. Every mutation goes through [`Engine::seed_position`],
//! [`Engine::seed_position_raw`] or [`Engine::make_move`], each of which either
//! succeeds completely or leaves the engine untouched.

use crate::error::EngineError;
use crate::state::{BoardState, Phase, Score, Winner};
use crate::{Cell, Grid, Location, Player};
use std::fmt;
use tracing::{debug, instrument, warn};

/// A single game of Othello, driven one move at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    grid: Grid,
    current_player: Player,
    history: Vec<Grid>,
    state: BoardState,
}

impl Default for Engine {
    /// Gets a game at the standard opening with black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Start a game from the standard opening position with black to move.
    pub fn new() -> Self {
        let grid = Grid::starting();
        Self {
            grid,
            current_player: Player::default(),
            history: Vec::new(),
            state: BoardState::derive(&grid, false),
        }
    }

    /// Start a game from a custom position with black to move.
    pub fn with_position<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.seed_position(rows)?;
        Ok(engine)
    }

    /// Replace the board with a copy of `rows`.
    ///
    /// The player to move and the history are kept, so a caller can seed a
    /// position in the middle of a session. The phase returns to
    /// [`Phase::NotStarted`] unless the seeded board is full.
    #[instrument(level = "debug", skip(self, rows))]
    pub fn seed_position<R: AsRef<[Cell]>>(&mut self, rows: &[R]) -> Result<(), EngineError> {
        let grid = Grid::from_rows(rows).map_err(|err| {
            warn!(error = %err, "rejected seed position");
            err
        })?;
        self.install(grid);
        Ok(())
    }

    /// Like [`Engine::seed_position`], but from numeric cell codes
    /// (0 empty, 1 black, 2 white). Any other value is rejected.
    #[instrument(level = "debug", skip(self, rows))]
    pub fn seed_position_raw<R: AsRef<[u8]>>(&mut self, rows: &[R]) -> Result<(), EngineError> {
        let grid = Grid::from_raw_rows(rows).map_err(|err| {
            warn!(error = %err, "rejected raw seed position");
            err
        })?;
        self.install(grid);
        Ok(())
    }

    fn install(&mut self, grid: Grid) {
        self.grid = grid;
        self.state = BoardState::derive(&self.grid, false);
        debug!(score = %self.state.score, phase = %self.state.phase, "position seeded");
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Grid {
        &self.grid
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The snapshot derived after the last mutation.
    #[inline]
    pub fn state(&self) -> BoardState {
        self.state
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.state.score
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The winner, once the game is [`Phase::Finished`].
    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    /// Board snapshots after each applied move, oldest first.
    #[inline]
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Returns whether the player to move may play at `(row, col)`.
    pub fn is_valid_move(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        let loc = Location::new(row, col)?;
        Ok(self.grid.is_legal(loc, self.current_player))
    }

    /// All legal moves for the player to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Location> {
        self.grid.legal_moves(self.current_player)
    }

    /// Play at `(row, col)` as the player to move.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let loc = Location::new(row, col).map_err(|err| {
            warn!(error = %err, "rejected move");
            err
        })?;
        self.play(loc)
    }

    /// Play at `loc` as the player to move.
    ///
    /// Places the piece, flips every captured run, records the board in the
    /// history and hands the turn to the opponent. If the opponent then has no
    /// legal move, the turn passes straight back.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, loc: Location) -> Result<(), EngineError> {
        let player = self.current_player;
        if !self.grid.is_legal(loc, player) {
            warn!(%player, "rejected illegal move");
            return Err(EngineError::IllegalMove {
                row: loc.row(),
                col: loc.col(),
            });
        }

        let flips = self.grid.place(loc, player);
        debug!(%player, flipped = flips.len(), "move applied");

        self.history.push(self.grid);
        self.current_player = !player;
        self.state = BoardState::derive(&self.grid, true);

        if self.legal_moves().is_empty() {
            debug!(passing = %self.current_player, "no legal moves, turn passes");
            self.current_player = player;

            // Neither side can move on a non-full board. The phase is derived
            // from fullness alone, so this stays InProgress.
            if !self.state.is_finished() && self.legal_moves().is_empty() {
                debug!(score = %self.state.score, "neither player can move");
            }
        }

        Ok(())
    }

    /// Returns true if no empty space remains.
    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Count each player's pieces on the current board.
    pub fn calculate_score(&self) -> Score {
        self.grid.score()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        write!(f, "{} ({})", self.state.score, self.state.phase)?;
        match self.state.winner {
            Some(Winner::Draw) => write!(f, ", draw"),
            Some(winner) => write!(f, ", {} wins", winner),
            None => write!(f, ", {} to move", self.current_player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(moves: Vec<Location>) -> Vec<(usize, usize)> {
        moves.into_iter().map(Location::to_coords).collect()
    }

    #[test]
    fn initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.board(), &Grid::starting());
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.score(), Score { black: 2, white: 2 });
        assert!(engine.history().is_empty());
        assert_eq!(
            coords(engine.legal_moves()),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
    }

    #[test]
    fn apply_move() {
        let mut engine = Engine::new();
        engine.make_move(2, 3).unwrap();

        assert_eq!(engine.board().get(2, 3), Some(Cell::Black));
        assert_eq!(engine.board().get(3, 3), Some(Cell::Black));
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.phase(), Phase::InProgress);
        assert_eq!(engine.score(), Score { black: 4, white: 1 });
        assert_eq!(engine.history(), &[*engine.board()]);
    }

    #[test]
    fn is_valid_move_bounds() {
        let engine = Engine::new();
        assert_eq!(engine.is_valid_move(2, 3), Ok(true));
        assert_eq!(engine.is_valid_move(0, 0), Ok(false));
        assert_eq!(
            engine.is_valid_move(8, 0),
            Err(EngineError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            engine.is_valid_move(0, 100),
            Err(EngineError::OutOfBounds { row: 0, col: 100 })
        );
    }

    #[test]
    fn rejected_moves_do_not_mutate() {
        let mut engine = Engine::new();
        let before = engine.clone();

        assert_eq!(
            engine.make_move(0, 0),
            Err(EngineError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(
            engine.make_move(3, 3),
            Err(EngineError::IllegalMove { row: 3, col: 3 })
        );
        assert_eq!(
            engine.make_move(9, 9),
            Err(EngineError::OutOfBounds { row: 9, col: 9 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn seed_keeps_turn_and_history() {
        let mut engine = Engine::new();
        engine.make_move(2, 3).unwrap();
        engine.seed_position(Grid::starting().rows()).unwrap();

        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(engine.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn rejected_seed_does_not_mutate() {
        let mut engine = Engine::new();
        engine.make_move(2, 3).unwrap();
        let before = engine.clone();

        let short = vec![vec![Cell::Empty; 8]; 7];
        assert_eq!(
            engine.seed_position(&short),
            Err(EngineError::InvalidDimensions { rows: 7, cols: 8 })
        );
        let bad_value = [[3u8; 8]; 8];
        assert_eq!(
            engine.seed_position_raw(&bad_value),
            Err(EngineError::InvalidCell {
                row: 0,
                col: 0,
                value: 3
            })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn winner_clears_after_reseed() {
        let mut engine = Engine::with_position(&[[Cell::Black; 8]; 8]).unwrap();
        assert_eq!(engine.winner(), Some(Winner::Black));

        engine.seed_position(Grid::starting().rows()).unwrap();
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn display() {
        let mut engine = Engine::new();
        assert!(engine
            .to_string()
            .ends_with("Black 2 - 2 White (not started), Black to move"));
        engine.make_move(2, 3).unwrap();
        assert!(engine
            .to_string()
            .ends_with("Black 4 - 1 White (in progress), White to move"));
    }
}
