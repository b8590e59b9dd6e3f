//! Tic-Tac-Toe abstractions.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    X,

    /// Moves second.
    O,
}

impl Player {
    /// Return the other player.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),

    /// Board is full and nobody completed a line.
    Draw,
}

/// Result of a single [`TicTacToe::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Move was not accepted and nothing changed.
    Ignored,

    /// Mark was placed, the given player moves next.
    Next(Player),

    /// Mark was placed and ended the game.
    Finished(Outcome),
}

/// 3x3 board, cells are indexed row by row from the top left one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicTacToe {
    board: [Option<Player>; 9],
    current: Player,
    outcome: Option<Outcome>,
}

impl TicTacToe {
    /// Amount of cells on the board.
    pub const CELLS: usize = 9;

    /// Rows, columns and diagonals.
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    /// Return an empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; Self::CELLS],
            current: Player::X,
            outcome: None,
        }
    }

    /// Place current player's mark at `index`.
    ///
    /// Ignored if the game is over, `index` is off the board or the cell is
    /// already taken.
    pub fn play(&mut self, index: usize) -> Move {
        if self.outcome.is_some() || index >= Self::CELLS || self.board[index].is_some() {
            log::trace!("ignoring tic-tac-toe move at {}", index);
            return Move::Ignored;
        }

        self.board[index] = Some(self.current);

        if let Some(winner) = self.winner() {
            log::info!("player {} wins", winner);
            let outcome = Outcome::Winner(winner);
            self.outcome = Some(outcome);
            Move::Finished(outcome)
        } else if self.board.iter().all(Option::is_some) {
            log::info!("tic-tac-toe ends in a draw");
            self.outcome = Some(Outcome::Draw);
            Move::Finished(Outcome::Draw)
        } else {
            self.current = self.current.other();
            Move::Next(self.current)
        }
    }

    fn winner(&self) -> Option<Player> {
        Self::LINES.iter().find_map(|line| {
            let marks = line.iter().map(|&i| self.board[i]);
            if marks.clone().all_equal() {
                self.board[line[0]]
            } else {
                None
            }
        })
    }

    /// Clear the board, X moves first again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Return mark at `index`, if any.
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.board.get(index).copied().flatten()
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// How the game ended, or none while it's still going.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Text for the status line.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(Outcome::Winner(player)) => format!("Player {} wins!", player),
            Some(Outcome::Draw) => String::from("It's a draw"),
            None => format!("Player {}'s turn", self.current),
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
