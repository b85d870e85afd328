//! FEN-to-Board parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. The board tracks
//! castling eligibility through per-piece has-moved flags, so the castling
//! field is folded into those flags: a king or rook counts as unmoved only
//! when it stands on its home square and a matching right is listed. The
//! halfmove clock is validated but not kept.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE, KING_START_COL, QUEENSIDE};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::piece::Piece;
use crate::utils::algebraic::algebraic_to_position;

/// Everything a FEN string describes that the engine keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub side_to_move: Color,
    pub fullmove_number: u16,
}

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

pub fn parse_fen(fen: &str) -> ChessResult<FenPosition> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    let mut board = parse_board(board_part, &rights)?;
    board.set_en_passant_target(parse_en_passant_square(en_passant_part, &board, side_to_move)?);

    board.validate_kings()?;
    if board.is_king_in_check(side_to_move.opposite()) {
        return Err(ChessErrors::InvalidPosition(format!(
            "{} is in check but it is {side_to_move}'s turn",
            side_to_move.opposite()
        )));
    }

    Ok(FenPosition {
        board,
        side_to_move,
        fullmove_number,
    })
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, rights: &CastlingRights) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            let position = Position::new(row, col);
            let mut piece = Piece::new(color, kind, position);
            piece.has_moved = !starts_unmoved(&piece, rights);
            board.place(piece)?;
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn starts_unmoved(piece: &Piece, rights: &CastlingRights) -> bool {
    let color = piece.color;
    let home = color.home_row();
    let kingside = rights.kingside[color.index()];
    let queenside = rights.queenside[color.index()];
    match piece.kind {
        PieceKind::Pawn => piece.position.row == color.pawn_start_row(),
        PieceKind::King => {
            (kingside || queenside) && piece.position == Position::new(home, KING_START_COL)
        }
        PieceKind::Rook => {
            (kingside && piece.position == Position::new(home, KINGSIDE.rook_from_col))
                || (queenside && piece.position == Position::new(home, QUEENSIDE.rook_from_col))
        }
        PieceKind::Queen | PieceKind::Bishop | PieceKind::Knight => true,
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.kingside[Color::White.index()] = true,
            'Q' => rights.queenside[Color::White.index()] = true,
            'k' => rights.kingside[Color::Black.index()] = true,
            'q' => rights.queenside[Color::Black.index()] = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target must sit directly behind an enemy pawn that could just have
/// double-stepped.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> ChessResult<Option<Position>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_position(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en passant square: {en_passant_part}")))?;
    let pusher = side_to_move.opposite();
    let pawn_sq = target.offset(pusher.pawn_direction(), 0);
    let expected_row = pusher.pawn_start_row() + pusher.pawn_direction();

    let pawn_behind = matches!(
        board.piece_at(pawn_sq),
        Some(p) if p.kind == PieceKind::Pawn && p.color == pusher
    );
    if target.row != expected_row || !pawn_behind {
        return Err(invalid(&format!(
            "en passant square {en_passant_part} has no double-stepped pawn"
        )));
    }

    Ok(Some(target))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
