//! Single step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::{Player, Square};

/// Invariant: every snapshot differs from its predecessor in exactly one
/// square, which was empty and now holds the mark of the player whose
/// turn it was at that move (X on even move numbers, O on odd).
///
/// This ties alternation to history length: turn order cannot drift from
/// the recorded snapshots because it is derived from them.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        for (n, pair) in history.snapshots().windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            if before.squares().len() != after.squares().len() {
                return false;
            }

            let mover = if n % 2 == 0 { Player::X } else { Player::O };
            let mut placed = 0;
            for (b, a) in before.squares().iter().zip(after.squares()) {
                match (b, a) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(player)) if *player == mover => placed += 1,
                    _ => return false,
                }
            }
            if placed != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark of the alternating player"
    }
}
