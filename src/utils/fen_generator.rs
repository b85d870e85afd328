use crate::game_state::board::Board;
use crate::game_state::chess_rules::{CastlingWing, KINGSIDE, KING_START_COL, QUEENSIDE};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::piece::Piece;

/// Serializes a board plus turn information. The halfmove clock is not
/// tracked by the engine and is always written as `0`.
pub fn generate_fen(board: &Board, side_to_move: Color, fullmove_number: u16) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = board
        .en_passant_target()
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} 0 {}",
        generate_board_field(board),
        side,
        generate_castling_field(board),
        en_passant,
        fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8 {
            if let Some(piece) = board.piece_at(Position::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(&piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(piece: &Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for (color, wing, ch) in [
        (Color::White, KINGSIDE, 'K'),
        (Color::White, QUEENSIDE, 'Q'),
        (Color::Black, KINGSIDE, 'k'),
        (Color::Black, QUEENSIDE, 'q'),
    ] {
        if has_castling_right(board, color, &wing) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn has_castling_right(board: &Board, color: Color, wing: &CastlingWing) -> bool {
    let home = color.home_row();
    let unmoved = |col: i8, kind: PieceKind| {
        matches!(
            board.piece_at(Position::new(home, col)),
            Some(p) if p.color == color && p.kind == kind && !p.has_moved
        )
    };
    unmoved(KING_START_COL, PieceKind::King) && unmoved(wing.rook_from_col, PieceKind::Rook)
}
