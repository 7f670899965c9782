//! Win detection over an N-by-N board.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// A line is any full row, any full column, the main diagonal, or the
/// anti-diagonal, each exactly `size` squares long. Returns the player
/// occupying the first complete line, scanning rows, then columns, then
/// the two diagonals; `None` if no line is complete. A full board with
/// no complete line is a draw, which is detected separately.
///
/// Degenerate sizes need no special cases: on a 1-by-1 board the single
/// square is its own row, column, and both diagonals, so any mark wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size();

    for row in 0..n {
        if let Some(winner) = line_owner(board, (0..n).map(|col| board.index(row, col))) {
            return Some(winner);
        }
    }

    for col in 0..n {
        if let Some(winner) = line_owner(board, (0..n).map(|row| board.index(row, col))) {
            return Some(winner);
        }
    }

    if let Some(winner) = line_owner(board, (0..n).map(|i| board.index(i, i))) {
        return Some(winner);
    }

    line_owner(board, (0..n).map(|i| board.index(n - 1 - i, i)))
}

/// Returns the player owning every square of the line, if the line is
/// complete: all squares non-empty and holding the same mark.
fn line_owner(board: &Board, line: impl Iterator<Item = usize>) -> Option<Player> {
    let mut owner = None;
    for pos in line {
        match board.get(pos).and_then(Square::player) {
            Some(player) => match owner {
                None => owner = Some(player),
                Some(o) if o == player => {}
                Some(_) => return None,
            },
            None => return None,
        }
    }
    owner
}
