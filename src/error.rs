//! Error types for move application and history navigation.
//!
//! Every failing operation is atomic: it reports an error and leaves the
//! board and history exactly as they were.

/// Error that can occur when placing a mark on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The position is outside the board.
    #[display("Position {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// Error that can occur when jumping to a history checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move number is not a recorded checkpoint.
    #[display("Move number {} is out of range (history holds {} checkpoints)", requested, len)]
    OutOfRange {
        /// The move number that was requested.
        requested: usize,
        /// Number of checkpoints currently recorded.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
