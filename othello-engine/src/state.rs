//! Derived game state: score, phase and winner.

use crate::{Grid, Player};
use std::fmt;

/// Piece counts for each player. Empty spaces count toward neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Total number of pieces on the board.
    #[inline]
    pub fn total(self) -> usize {
        self.black + self.white
    }

    /// The count for one player.
    #[inline]
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No move has been applied since construction or the last seed.
    NotStarted,
    InProgress,
    /// The board has no empty spaces left.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => f.write_str("not started"),
            Phase::InProgress => f.write_str("in progress"),
            Phase::Finished => f.write_str("finished"),
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Winner::Black,
            Player::White => Winner::White,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => f.write_str("Black"),
            Winner::White => f.write_str("White"),
            Winner::Draw => f.write_str("Draw"),
        }
    }
}

/// An immutable snapshot of everything derived from a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub score: Score,
    pub phase: Phase,
    /// Only set when `phase` is [`Phase::Finished`].
    pub winner: Option<Winner>,
}

impl BoardState {
    /// Recompute score, phase and winner from scratch.
    ///
    /// `move_applied` distinguishes a board reached by playing a move from one
    /// that was just constructed or seeded.
    pub fn derive(grid: &Grid, move_applied: bool) -> Self {
        let score = grid.score();

        if grid.is_full() {
            let winner = match score.black.cmp(&score.white) {
                std::cmp::Ordering::Greater => Winner::Black,
                std::cmp::Ordering::Less => Winner::White,
                std::cmp::Ordering::Equal => Winner::Draw,
            };
            return Self {
                score,
                phase: Phase::Finished,
                winner: Some(winner),
            };
        }

        let phase = if move_applied {
            Phase::InProgress
        } else {
            Phase::NotStarted
        };
        Self {
            score,
            phase,
            winner: None,
        }
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        self.phase == Phase::Finished
    }
}
