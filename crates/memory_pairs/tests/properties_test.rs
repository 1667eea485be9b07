//! Property tests for board generation, move totality, and rendering.

use memory_pairs::{Board, MemoryGame, MoveResult, Position, SeededRng};
use proptest::prelude::*;

/// Action strings biased toward well-formed moves, with noise mixed in.
fn action_strategy(size: usize) -> impl Strategy<Value = String> {
    let coord = -1i64..(size as i64 + 1);
    prop_oneof![
        4 => (coord.clone(), coord.clone(), coord.clone(), coord)
            .prop_map(|(a, b, c, d)| format!("{a} {b} {c} {d}")),
        1 => "[ 0-9a-z-]{0,12}",
    ]
}

proptest! {
    #[test]
    fn every_label_appears_exactly_twice(half in 1usize..=8, seed in any::<u64>()) {
        let size = half * 2;
        let board = Board::generate(size, &mut SeededRng::new(seed)).unwrap();

        let mut counts = vec![0u32; size * size / 2 + 1];
        for row in board.rows() {
            for label in row {
                prop_assert!(label >= 1 && (label as usize) <= size * size / 2);
                counts[label as usize] += 1;
            }
        }
        prop_assert!(counts[1..].iter().all(|&c| c == 2));
    }

    #[test]
    fn moves_are_total_and_keep_shown_count_even(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(4), 0..64),
    ) {
        let mut game = MemoryGame::new(4, &mut SeededRng::new(seed)).unwrap();
        for action in &actions {
            let before = game.shown().count();
            let outcome = game.make_move(action);
            let after = game.shown().count();

            prop_assert_eq!(after % 2, 0);
            match outcome.result() {
                MoveResult::Matching => {
                    prop_assert_eq!(after, before + 2);
                }
                MoveResult::GameOver if outcome.is_accepted() => {
                    prop_assert_eq!(after, 16);
                }
                _ => {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }

    #[test]
    fn rendering_hides_face_down_cells(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(4), 0..32),
    ) {
        let mut game = MemoryGame::new(4, &mut SeededRng::new(seed)).unwrap();
        for action in &actions {
            game.make_move(action);
        }

        let text = game.render(false);
        prop_assert_eq!(&text, &game.render(false));

        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with('|')).collect();
        prop_assert_eq!(rows.len(), 4);
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.trim_matches('|').split('|').collect();
            prop_assert_eq!(cells.len(), 4);
            for (c, cell) in cells.iter().enumerate() {
                let pos = Position::new(r, c);
                if game.shown().is_shown(pos) {
                    let label = game.board().get(pos).unwrap();
                    prop_assert_eq!(cell.to_string(), format!("[{:>2}]", label));
                } else {
                    prop_assert_eq!(*cell, " ?? ");
                }
            }
        }
    }
}
