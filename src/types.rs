//! Core domain types for the engine.

use crate::error::PlaceError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// An N-by-N board snapshot.
///
/// Squares are stored in row-major order (index = `row * size + col`).
/// A board is immutable once constructed: [`Board::place`] returns a new
/// board, so every snapshot held in a history remains independently
/// readable after later moves are played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Side length of the board.
    size: usize,
    /// Squares in row-major order, always exactly `size * size` entries.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. A zero-sized board has no squares to
    /// play, so this is a constructor misuse rather than a runtime error.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Converts row/column coordinates to a flat index.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Gets the square at the given flat position.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice, in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Places a player's mark at the given position, returning the
    /// resulting board. The input board is not modified.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfBounds`] if `pos` is not a board position.
    /// - [`PlaceError::SquareOccupied`] if the square is not empty.
    /// - [`PlaceError::GameOver`] if the board already has a winner. The
    ///   caller is expected to pre-filter such moves, but the engine
    ///   re-validates rather than trust it.
    #[instrument(skip(self))]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, PlaceError> {
        if pos >= self.squares.len() {
            return Err(PlaceError::OutOfBounds(pos));
        }
        if self.squares[pos] != Square::Empty {
            return Err(PlaceError::SquareOccupied(pos));
        }
        if crate::rules::check_winner(self).is_some() {
            return Err(PlaceError::GameOver);
        }

        let mut next = self.clone();
        next.squares[pos] = Square::Occupied(player);
        Ok(next)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.squares[self.index(row, col)] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
                result.push_str(&vec!["-"; self.size].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

/// Derived status of a board position.
///
/// Never stored: computed on demand from the board so it cannot
/// desynchronize from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if no further moves can be played.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
