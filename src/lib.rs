//! N-by-N tic-tac-toe engine with branchable move-history navigation.
//!
//! The engine is split into two layers:
//!
//! - **[`Board`]**: an immutable snapshot of an N-by-N grid of squares,
//!   with win detection over rows, columns, and both diagonals.
//! - **[`GameHistory`]**: an append/truncate list of board snapshots plus
//!   a cursor. Whose turn it is, the winner, and the navigable checkpoint
//!   list are all derived from the history, never stored separately.
//!
//! Jumping back to an earlier checkpoint and playing a new move discards
//! the previously explored future (branch-and-discard, not a redo stack).
//!
//! Rendering and input wiring are the caller's concern: the engine hands
//! out the squares, the current player, the winner, and the checkpoint
//! labels, and accepts flat cell indices and checkpoint numbers.
//!
//! # Example
//!
//! ```
//! use takeback::{GameHistory, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameHistory::new(3);
//! game.play_move(0)?; // X
//! game.play_move(4)?; // O
//! game.play_move(1)?; // X
//!
//! // Rewind to the position after X's first move; O is to move again.
//! game.jump_to(1)?;
//! assert_eq!(game.current_player(), Player::O);
//!
//! // Playing from here discards the old future.
//! game.play_move(8)?;
//! assert_eq!(game.checkpoints().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod history;
mod invariants;
mod rules;
mod types;

// Crate-level exports - errors
pub use error::{JumpError, PlaceError};

// Crate-level exports - history and checkpoints
pub use history::{Checkpoint, GameHistory};

// Crate-level exports - invariant framework
pub use invariants::{
    CursorBoundsInvariant, EmptyStartInvariant, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleStepInvariant,
};

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, valid_moves};

// Crate-level exports - core types
pub use types::{Board, GameStatus, Player, Square};
