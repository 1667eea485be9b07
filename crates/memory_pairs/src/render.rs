//! Text rendering of a game for humans and agents.

use crate::board::Position;
use crate::game::MemoryGame;
use std::fmt::Write;

/// Glyph repeated to fill a face-down cell.
pub const HIDDEN_GLYPH: char = '?';

/// Renders the board as bordered fixed-width text.
///
/// Face-up cells show as `[NN]`; face-down cells show as ` ?? ` unless
/// `debug_reveal` is set, which prints every label as if face-up.
pub fn render(game: &MemoryGame, debug_reveal: bool) -> String {
    let board = game.board();
    let size = board.size();
    let width = label_width(board.max_label());

    let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(size));
    let hidden = format!(" {} |", HIDDEN_GLYPH.to_string().repeat(width));

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for (row, labels) in board.rows().iter().enumerate() {
        out.push('|');
        for (col, label) in labels.iter().enumerate() {
            if debug_reveal || game.shown().is_shown(Position::new(row, col)) {
                let _ = write!(out, "[{:>width$}]|", label);
            } else {
                out.push_str(&hidden);
            }
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }

    let _ = write!(out, "\nScore: {}  Moves: {}", game.score(), game.moves_made());
    if game.is_over() {
        out.push_str("\nGAME OVER! All tiles matched.");
    }
    out
}

fn label_width(max_label: u32) -> usize {
    max_label.to_string().len().max(2)
}
