//! Tests for board construction, move application, and rule evaluation.

use takeback::{Board, PlaceError, Player, check_winner, is_draw, is_full, valid_moves};

fn board_with(size: usize, marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new(size);
    for (pos, player) in marks {
        board = board.place(*pos, *player).expect("valid move");
    }
    board
}

#[test]
fn test_place_never_mutates_input() {
    let board = Board::new(3);
    let after = board.place(4, Player::X).expect("valid move");

    assert!(board.squares().iter().all(|s| s.player().is_none()));
    assert_eq!(after.get(4).and_then(|s| s.player()), Some(Player::X));
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let board = Board::new(2);
    assert_eq!(board.place(4, Player::X), Err(PlaceError::OutOfBounds(4)));
}

#[test]
fn test_place_rejects_occupied_square() {
    let board = board_with(3, &[(4, Player::X)]);
    assert_eq!(board.place(4, Player::O), Err(PlaceError::SquareOccupied(4)));
}

#[test]
fn test_place_rejects_finished_game() {
    // X owns the top row of a 3x3
    let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
    assert_eq!(board.place(5, Player::O), Err(PlaceError::GameOver));
}

#[test]
fn test_no_winner_with_at_most_one_mark() {
    for size in 2..=6 {
        let board = Board::new(size);
        assert_eq!(check_winner(&board), None, "empty {size}x{size}");

        let board = board.place(size - 1, Player::O).expect("valid move");
        assert_eq!(check_winner(&board), None, "single mark on {size}x{size}");
    }
}

#[test]
fn test_row_win_on_large_board() {
    let marks: Vec<_> = (0..5).map(|col| (2 * 5 + col, Player::O)).collect();
    let board = board_with(5, &marks);
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_column_win_on_large_board() {
    let marks: Vec<_> = (0..5).map(|row| (row * 5 + 3, Player::X)).collect();
    let board = board_with(5, &marks);
    assert_eq!(check_winner(&board), Some(Player::X));
}

#[test]
fn test_diagonal_wins() {
    let main: Vec<_> = (0..4).map(|i| (i * 4 + i, Player::X)).collect();
    assert_eq!(check_winner(&board_with(4, &main)), Some(Player::X));

    let anti: Vec<_> = (0..4).map(|i| ((4 - 1 - i) * 4 + i, Player::O)).collect();
    assert_eq!(check_winner(&board_with(4, &anti)), Some(Player::O));
}

#[test]
fn test_one_cell_gap_is_no_win() {
    let board = board_with(4, &[(0, Player::X), (5, Player::X), (15, Player::X)]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_single_square_board() {
    let board = Board::new(1);
    assert_eq!(check_winner(&board), None);

    let board = board.place(0, Player::X).expect("valid move");
    assert_eq!(check_winner(&board), Some(Player::X));
    assert!(is_full(&board));
    assert!(!is_draw(&board));
}

#[test]
fn test_two_square_board_diagonals() {
    // Anti-diagonal of a 2x2: positions 1 and 2
    let board = board_with(2, &[(1, Player::O), (2, Player::O)]);
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_full_board_without_winner_is_draw() {
    // X O X / O X X / O X O
    let board = board_with(
        3,
        &[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ],
    );

    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_valid_moves_lists_empty_squares() {
    let board = board_with(2, &[(0, Player::X), (3, Player::O)]);
    assert_eq!(valid_moves(&board), vec![1, 2]);
}
