//! Terminal-oriented Unicode board renderer.
//!
//! Used by the binaries and in test failure messages; White is drawn at the
//! bottom with rank 8 printed first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position, BOARD_SIZE};
use crate::game_state::piece::Piece;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        let rank = char::from(b'1' + row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.piece_at(Position::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(&piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn standard_board_renders_black_on_top() {
        let text = render_board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
