//! Tests for board text rendering.

use memory_pairs::{Board, MemoryGame, RewardScheme};

fn game() -> MemoryGame {
    let board = Board::from_rows(vec![vec![1, 2], vec![2, 1]]).expect("valid layout");
    MemoryGame::from_board(board, RewardScheme::default())
}

#[test]
fn test_hidden_board_layout() {
    let expected = "\
+----+----+
| ?? | ?? |
+----+----+
| ?? | ?? |
+----+----+

Score: 0  Moves: 0";
    assert_eq!(game().render(false), expected);
}

#[test]
fn test_matched_cells_show_labels() {
    let mut game = game();
    game.make_move("0 0 1 1");

    let text = game.render(false);
    assert!(text.contains("|[ 1]| ?? |"));
    assert!(text.contains("| ?? |[ 1]|"));
    assert!(text.ends_with("Score: 1  Moves: 1"));
}

#[test]
fn test_debug_reveal_shows_everything() {
    let text = game().render(true);
    assert!(text.contains("|[ 1]|[ 2]|"));
    assert!(text.contains("|[ 2]|[ 1]|"));
    assert!(!text.contains("??"));
}

#[test]
fn test_game_over_notice() {
    let mut game = game();
    game.make_move("0 0 1 1");
    game.make_move("0 1 1 0");

    let text = game.render(false);
    assert!(text.ends_with("Score: 2  Moves: 2\nGAME OVER! All tiles matched."));
}

#[test]
fn test_wide_labels_widen_cells() {
    let rows: Vec<Vec<u32>> = (0..16)
        .map(|r| (0..16).map(|c| ((r * 16 + c) / 2 + 1) as u32).collect())
        .collect();
    let board = Board::from_rows(rows).expect("valid layout");
    let game = MemoryGame::from_board(board, RewardScheme::default());

    let text = game.render(true);
    assert!(text.starts_with("+-----+"));
    assert!(text.contains("[128]"));
    assert!(game.render(false).contains("| ??? |"));
}
