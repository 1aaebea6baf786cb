//! Material values and piece-square tables.
//!
//! Tables are laid out from White's side of the board: index 0 is a1,
//! index 63 is h8. White reads them by raw square index, Black by the
//! vertically mirrored index (`sq ^ 56`).

use chess::Piece;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 350;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 10_000;

pub fn material_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

#[inline]
pub fn mirror(sq: usize) -> usize {
    sq ^ 56
}

#[rustfmt::skip]
pub const PAWN_TABLE: [i32; 64] = [
     0,  5,  5,  5,  5,  5,  5,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 15, 15, 15, 15, 10,  5,
    10, 15, 20, 20, 20, 20, 15, 10,
    10, 15, 20, 25, 25, 20, 15, 10,
    15, 20, 30, 35, 35, 30, 20, 15,
    20, 30, 35, 40, 40, 35, 30, 20,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  5,  5,  5,  5,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  5,  5,  0,  0, -5,
    -5,  0,  0,  5,  5,  0,  0, -5,
    -5,  0,  0,  5,  5,  0,  0, -5,
    -5,  0,  0,  5,  5,  0,  0, -5,
     5,  0,  0,  5,  5,  0,  0,  5,
     0,  0,  5, 10, 10,  5,  0,  0,
];

#[rustfmt::skip]
pub const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// Middlegame king: stay home, prefer the castled corners.
#[rustfmt::skip]
pub const KING_MIDDLEGAME_TABLE: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Endgame king: walk toward the middle.
#[rustfmt::skip]
pub const KING_ENDGAME_TABLE: [i32; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -20,  20,  30,  30,  20, -20, -30,
    -50, -40, -30, -20, -20, -30, -40, -50,
    -50, -40, -30, -20, -20, -30, -40, -50,
];

/// Non-king tables by piece. King lookups go through the phase blend in
/// the evaluator instead.
pub fn table(piece: Piece) -> Option<&'static [i32; 64]> {
    match piece {
        Piece::Pawn => Some(&PAWN_TABLE),
        Piece::Knight => Some(&KNIGHT_TABLE),
        Piece::Bishop => Some(&BISHOP_TABLE),
        Piece::Rook => Some(&ROOK_TABLE),
        Piece::Queen => Some(&QUEEN_TABLE),
        Piece::King => None,
    }
}
