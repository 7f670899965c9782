//! Board snapshot history with checkpoint navigation.

use crate::error::{JumpError, PlaceError};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A navigable point in the move history, as shown in a history menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Checkpoint {
    /// Move number this checkpoint addresses, 0 being game start.
    pub move_number: usize,
    /// Human-readable label.
    pub label: String,
}

/// Branchable history of board snapshots with a movable cursor.
///
/// The snapshot at index 0 is always the empty board; every later
/// snapshot adds exactly one mark to its predecessor. The player to
/// move, the winner, and the checkpoint list are derived from
/// `(history, cursor)` on demand rather than stored, so they cannot
/// desynchronize from the recorded moves.
///
/// Playing a move while the cursor sits before the last snapshot
/// discards everything past the cursor before appending (branch-and-
/// discard). Jumping only moves the cursor.
///
/// A history is owned by a single game session. Callers sharing one
/// instance across clients must serialize `play_move`/`jump_to` calls
/// externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameHistory {
    /// Creates a history holding a single empty board of the given side
    /// length, with the cursor at game start.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero, matching [`Board::new`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        debug!(size, "Creating game history");
        Self {
            history: vec![Board::new(size)],
            current_move: 0,
        }
    }

    /// Side length of the boards in this history.
    pub fn size(&self) -> usize {
        self.history[0].size()
    }

    /// The snapshot the cursor points at.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.history
    }

    /// The cursor: which move number is currently active.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Player to move at the cursor: X on even move numbers, O on odd.
    pub fn current_player(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Applies the current player's mark at `pos`.
    ///
    /// On success the history is truncated to the cursor (discarding any
    /// previously explored future), the new snapshot is appended, and the
    /// cursor moves to it.
    ///
    /// # Errors
    ///
    /// Propagates [`PlaceError`] from [`Board::place`] unchanged, leaving
    /// the history and cursor untouched.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_move(&mut self, pos: usize) -> Result<(), PlaceError> {
        let next = match self.current_board().place(pos, self.current_player()) {
            Ok(board) => board,
            Err(error) => {
                warn!(%error, pos, "Rejecting move");
                return Err(error);
            }
        };

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future checkpoints");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );
        Ok(())
    }

    /// Moves the cursor to the given move number without altering the
    /// recorded snapshots. Forward navigation stays possible until the
    /// next [`GameHistory::play_move`] truncates.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_number` is not a
    /// recorded checkpoint; the cursor is left unmodified.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number >= self.history.len() {
            warn!(move_number, len = self.history.len(), "Rejecting jump");
            return Err(JumpError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_number, "Jumping to checkpoint");
        self.current_move = move_number;
        Ok(())
    }

    /// The visitable checkpoints, one per snapshot, labeled for a
    /// history menu. Purely derived; no side effects.
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        (0..self.history.len())
            .map(|move_number| Checkpoint {
                move_number,
                label: checkpoint_label(move_number),
            })
            .collect()
    }

    /// Winner on the current board, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if rules::is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.current_player(),
            }
        }
    }
}

fn checkpoint_label(move_number: usize) -> String {
    if move_number == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{move_number}")
    }
}
