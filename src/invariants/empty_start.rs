//! Empty start invariant: the root snapshot is always the empty board.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Square;

/// Invariant: `history[0]` is the all-empty board of the configured size.
///
/// Truncation never removes the root (`play_move` keeps at least the
/// cursor's prefix, and the cursor can never go below 0), so game start
/// stays reachable from any position.
pub struct EmptyStartInvariant;

impl Invariant<GameHistory> for EmptyStartInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some(root) = history.snapshots().first() else {
            return false;
        };

        root.squares().len() == root.size() * root.size()
            && root.squares().iter().all(|square| *square == Square::Empty)
    }

    fn description() -> &'static str {
        "Root snapshot is the empty board"
    }
}
