//! Chess piece movement rules
//!
//! Movement patterns only: how far and in which direction each piece may
//! travel, path blocking, and no capturing of your own pieces. Check,
//! castling, promotion and en passant are not modelled.
//! Pure functions over a [`BoardGrid`] snapshot.

use super::board_state::BoardGrid;
use crate::game::components::{PieceColor, PieceType};

fn color_at(grid: &BoardGrid, pos: (u8, u8)) -> Option<Option<PieceColor>> {
    grid[pos.1 as usize][pos.0 as usize]
        .as_ref()
        .map(|piece| piece.color())
}

fn is_empty(grid: &BoardGrid, pos: (u8, u8)) -> bool {
    grid[pos.1 as usize][pos.0 as usize].is_none()
}

/// Check if a move follows the movement pattern of `piece_type`
pub fn is_valid_move(
    piece_type: PieceType,
    piece_color: PieceColor,
    from: (u8, u8),
    to: (u8, u8),
    grid: &BoardGrid,
) -> bool {
    if from == to {
        return false;
    }

    if to.0 > 7 || to.1 > 7 || from.0 > 7 || from.1 > 7 {
        return false;
    }

    if let Some(Some(target_color)) = color_at(grid, to) {
        if target_color == piece_color {
            return false;
        }
    }

    match piece_type {
        PieceType::Pawn => is_valid_pawn_move(from, to, piece_color, grid),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(from, to, grid),
        PieceType::Rook => is_valid_rook_move(from, to, grid),
        PieceType::Queen => is_valid_queen_move(from, to, grid),
        PieceType::King => is_valid_king_move(from, to),
    }
}

/// All destinations reachable by the piece on `position`
pub fn get_possible_moves(
    piece_type: PieceType,
    piece_color: PieceColor,
    position: (u8, u8),
    grid: &BoardGrid,
) -> Vec<(u8, u8)> {
    let mut moves = Vec::new();

    for x in 0..8 {
        for y in 0..8 {
            let to = (x, y);
            if is_valid_move(piece_type, piece_color, position, to, grid) {
                moves.push(to);
            }
        }
    }

    moves
}

fn is_valid_pawn_move(from: (u8, u8), to: (u8, u8), color: PieceColor, grid: &BoardGrid) -> bool {
    let (direction, start_rank) = match color {
        PieceColor::White => (1i8, 1u8),
        PieceColor::Black => (-1i8, 6u8),
    };

    let dx = to.0 as i8 - from.0 as i8;
    let dy = to.1 as i8 - from.1 as i8;

    if dx == 0 && dy == direction {
        return is_empty(grid, to);
    }

    // Double step only from the pawn's home rank
    if dx == 0 && dy == 2 * direction && from.1 == start_rank {
        let intermediate = (from.0, (from.1 as i8 + direction) as u8);
        return is_empty(grid, intermediate) && is_empty(grid, to);
    }

    if dx.abs() == 1 && dy == direction {
        return !is_empty(grid, to);
    }

    false
}

fn is_valid_knight_move(from: (u8, u8), to: (u8, u8)) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).abs();
    let dy = (to.1 as i8 - from.1 as i8).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

fn is_valid_bishop_move(from: (u8, u8), to: (u8, u8), grid: &BoardGrid) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).abs();
    let dy = (to.1 as i8 - from.1 as i8).abs();

    if dx != dy {
        return false;
    }

    is_path_clear(from, to, grid)
}

fn is_valid_rook_move(from: (u8, u8), to: (u8, u8), grid: &BoardGrid) -> bool {
    if from.0 != to.0 && from.1 != to.1 {
        return false;
    }

    is_path_clear(from, to, grid)
}

fn is_valid_queen_move(from: (u8, u8), to: (u8, u8), grid: &BoardGrid) -> bool {
    is_valid_rook_move(from, to, grid) || is_valid_bishop_move(from, to, grid)
}

fn is_valid_king_move(from: (u8, u8), to: (u8, u8)) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).abs();
    let dy = (to.1 as i8 - from.1 as i8).abs();

    dx <= 1 && dy <= 1
}

fn is_path_clear(from: (u8, u8), to: (u8, u8), grid: &BoardGrid) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).signum();
    let dy = (to.1 as i8 - from.1 as i8).signum();

    let mut x = from.0 as i8 + dx;
    let mut y = from.1 as i8 + dy;

    while (x, y) != (to.0 as i8, to.1 as i8) {
        if !is_empty(grid, (x as u8, y as u8)) {
            return false;
        }
        x += dx;
        y += dy;
    }

    true
}
