//! Game rules for the engine.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so snapshots stay plain data
//! and evaluation can be tested on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::Board;
use tracing::instrument;

/// Returns the flat indices of all empty squares, in board order.
///
/// Callers use this to pre-filter input before submitting a move; the
/// engine re-validates regardless.
#[instrument(skip(board))]
pub fn valid_moves(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| square.player().is_none())
        .map(|(pos, _)| pos)
        .collect()
}
