//! Static position evaluation.
//!
//! Returns a White-positive centipawn score as a weighted sum of material
//! and positional features. The game phase is carried as an integer in
//! `0..=24` (24 = full opening material) so every term stays in integer
//! arithmetic; the three top-level weight profiles switch on coarse phase
//! thresholds while a few sub-features scale continuously by `phase/24`.
//!
//! Features whose raw computation depends on whose turn it is (mobility,
//! tactical scans, attack/defense strength) are evaluated once per color
//! and differenced White-minus-Black. The off-move side is reached through
//! a null-move copy, so the position handed in is never mutated.

use chess::{BitBoard, Board, Color, MoveGen, Piece, Square, EMPTY};

use crate::position::{is_attacked_on, Position};
use crate::search::pst;
use crate::search::pst::material_value;
use crate::search::INFINITY;

const TOTAL_PHASE: i32 = 24;

const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

const KEY_SQUARES: [Square; 12] = [
    // center
    Square::D4,
    Square::E4,
    Square::D5,
    Square::E5,
    // extended center
    Square::C3,
    Square::F3,
    Square::C6,
    Square::F6,
    // development squares
    Square::D3,
    Square::E3,
    Square::D6,
    Square::E6,
];

/// Remaining non-pawn material mapped to `0..=24`; 24 is the full
/// starting set (queens count 4, rooks 2, minors 1), promotions clamp.
pub fn game_phase(board: &Board) -> i32 {
    let count = |piece: Piece| board.pieces(piece).popcnt() as i32;
    let phase = count(Piece::Knight) + count(Piece::Bishop)
        + 2 * count(Piece::Rook)
        + 4 * count(Piece::Queen);
    phase.clamp(0, TOTAL_PHASE)
}

#[inline]
fn rel_rank(color: Color, rank: usize) -> usize {
    match color {
        Color::White => rank,
        Color::Black => 7 - rank,
    }
}

#[inline]
fn manhattan(a: Square, b: Square) -> i32 {
    let df = a.get_file().to_index() as i32 - b.get_file().to_index() as i32;
    let dr = a.get_rank().to_index() as i32 - b.get_rank().to_index() as i32;
    df.abs() + dr.abs()
}

#[inline]
fn central(sq: Square) -> bool {
    let file = sq.get_file().to_index();
    let rank = sq.get_rank().to_index();
    (2..=5).contains(&file) && (2..=5).contains(&rank)
}

/// A board with `color` to move, or None when the side to move is in
/// check and the turn cannot be handed over.
fn side_board(board: &Board, color: Color) -> Option<Board> {
    if board.side_to_move() == color {
        Some(*board)
    } else {
        board.null_move()
    }
}

/// Attack set of `piece` standing on `sq`, against the given occupancy.
fn piece_attacks(piece: Piece, sq: Square, color: Color, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => chess::get_pawn_attacks(sq, color, !EMPTY),
        Piece::Knight => chess::get_knight_moves(sq),
        Piece::Bishop => chess::get_bishop_moves(sq, occupied),
        Piece::Rook => chess::get_rook_moves(sq, occupied),
        Piece::Queen => chess::get_bishop_moves(sq, occupied) | chess::get_rook_moves(sq, occupied),
        Piece::King => chess::get_king_moves(sq),
    }
}

/// Squares strictly ahead of `sq` (from `color`'s point of view) on its
/// own and adjacent files. A pawn with no enemy pawn in this cone is
/// passed.
fn passer_cone(color: Color, sq: Square) -> BitBoard {
    let rank = sq.get_rank().to_index();
    let ahead = match color {
        Color::White => !0u64 << (8 * (rank + 1)),
        Color::Black => (1u64 << (8 * rank)) - 1,
    };
    let file = sq.get_file();
    let files = chess::get_file(file) | chess::get_adjacent_files(file);
    files & BitBoard(ahead)
}

fn is_passed(board: &Board, color: Color, sq: Square) -> bool {
    let enemy_pawns = *board.pieces(Piece::Pawn) & *board.color_combined(!color);
    enemy_pawns & passer_cone(color, sq) == EMPTY
}

// ---- material + piece-square tables ----

pub fn material_and_pst(board: &Board, phase: i32) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        let own = *board.color_combined(color);
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            let value = material_value(piece);
            for sq in *board.pieces(piece) & own {
                let idx = match color {
                    Color::White => sq.to_index(),
                    Color::Black => pst::mirror(sq.to_index()),
                };
                let positional = match pst::table(piece) {
                    Some(table) => table[idx],
                    // The king blends its middlegame and endgame tables
                    // by phase.
                    None => {
                        (pst::KING_MIDDLEGAME_TABLE[idx] * phase
                            + pst::KING_ENDGAME_TABLE[idx] * (TOTAL_PHASE - phase))
                            / TOTAL_PHASE
                    }
                };
                score += sign * (value + positional);
            }
        }
    }
    score
}

// ---- mobility ----

fn mobility_for(board: &Board, color: Color) -> i32 {
    let Some(b) = side_board(board, color) else {
        return 0;
    };
    let mut total = 0;
    for mv in MoveGen::new_legal(&b) {
        let Some(piece) = b.piece_on(mv.get_source()) else {
            continue;
        };
        total += match piece {
            Piece::Pawn => 10,
            Piece::Knight => 25,
            Piece::Bishop => 30,
            Piece::Rook => 40,
            Piece::Queen => 50,
            Piece::King => 0,
        };
        if central(mv.get_dest()) {
            total += 10;
        }
        if b.piece_on(mv.get_dest()).is_some() {
            // Knights get less credit for standing on capture squares.
            total += if piece == Piece::Knight { 10 } else { 20 };
        }
    }
    total
}

fn mobility(board: &Board) -> i32 {
    mobility_for(board, Color::White) - mobility_for(board, Color::Black)
}

// ---- king safety ----

fn king_safety_for(board: &Board, color: Color) -> i32 {
    let king = board.king_square(color);
    let kfile = king.get_file().to_index() as i32;
    let krank = king.get_rank().to_index() as i32;
    let own_pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);

    let mut open_penalty = 0;
    for f in kfile - 1..=kfile + 1 {
        if !(0..8).contains(&f) {
            continue;
        }
        let file_bb = chess::get_file(chess::File::from_index(f as usize));
        if own_pawns & file_bb == EMPTY {
            open_penalty += 500;
        }
    }

    let mut shield_bonus = 0;
    let shield_rank = krank + if color == Color::White { 1 } else { -1 };
    if (0..8).contains(&shield_rank) {
        for f in kfile - 1..=kfile + 1 {
            if !(0..8).contains(&f) {
                continue;
            }
            let sq = Square::make_square(
                chess::Rank::from_index(shield_rank as usize),
                chess::File::from_index(f as usize),
            );
            if own_pawns & BitBoard::from_square(sq) != EMPTY {
                shield_bonus += 300;
            }
        }
    }

    shield_bonus - open_penalty
}

fn king_safety(board: &Board) -> i32 {
    king_safety_for(board, Color::White) - king_safety_for(board, Color::Black)
}

// ---- pawn structure ----

fn pawn_structure_for(board: &Board, color: Color, phase: i32) -> i32 {
    let own_pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);

    let mut file_counts = [0i32; 8];
    for sq in own_pawns {
        file_counts[sq.get_file().to_index()] += 1;
    }

    let doubled: i32 = file_counts
        .iter()
        .filter(|&&c| c > 1)
        .map(|&c| (c - 1) * 30)
        .sum();

    let mut isolated = 0;
    for f in 0..8usize {
        if file_counts[f] == 0 {
            continue;
        }
        let left = if f > 0 { file_counts[f - 1] } else { 0 };
        let right = if f < 7 { file_counts[f + 1] } else { 0 };
        if left + right == 0 {
            isolated += 25 * file_counts[f];
        }
    }

    let mut passed = 0;
    for sq in own_pawns {
        if is_passed(board, color, sq) {
            let advanced = rel_rank(color, sq.get_rank().to_index()) as i32 - 1;
            passed += (50 + advanced * 10) * phase / TOTAL_PHASE;
        }
    }

    passed - doubled - isolated
}

fn pawn_structure(board: &Board, phase: i32) -> i32 {
    pawn_structure_for(board, Color::White, phase) - pawn_structure_for(board, Color::Black, phase)
}

// ---- center control ----

fn center_control(board: &Board) -> i32 {
    let mut score = 0;
    let mut white_control = 0;
    let mut black_control = 0;

    for sq in CENTER_SQUARES {
        if is_attacked_on(board, Color::White, sq) {
            white_control += 1;
        }
        if is_attacked_on(board, Color::Black, sq) {
            black_control += 1;
        }
        match board.color_on(sq) {
            Some(Color::White) => score += 1000,
            Some(Color::Black) => score -= 1000,
            None => {}
        }
    }

    score += (white_control - black_control) * 20;
    if white_control < 2 {
        score -= 100;
    }
    if black_control < 2 {
        score += 100;
    }
    score
}

// ---- development ----

fn minor_sits_on(board: &Board, piece: Piece, color: Color, sq: Square) -> bool {
    board.piece_on(sq) == Some(piece) && board.color_on(sq) == Some(color)
}

fn development(board: &Board, fullmove: u32) -> i32 {
    if fullmove > 15 {
        return 0;
    }

    let mut white_undeveloped = 0;
    for sq in [Square::B1, Square::G1] {
        if minor_sits_on(board, Piece::Knight, Color::White, sq) {
            white_undeveloped += 30;
        }
    }
    for sq in [Square::C1, Square::F1] {
        if minor_sits_on(board, Piece::Bishop, Color::White, sq) {
            white_undeveloped += 45;
        }
    }
    if fullmove > 8 && minor_sits_on(board, Piece::Queen, Color::White, Square::D1) {
        white_undeveloped += 20;
    }

    let mut black_undeveloped = 0;
    for sq in [Square::B8, Square::G8] {
        if minor_sits_on(board, Piece::Knight, Color::Black, sq) {
            black_undeveloped += 30;
        }
    }
    for sq in [Square::C8, Square::F8] {
        if minor_sits_on(board, Piece::Bishop, Color::Black, sq) {
            black_undeveloped += 45;
        }
    }
    if fullmove > 5 && minor_sits_on(board, Piece::Queen, Color::Black, Square::D8) {
        black_undeveloped += 20;
    }

    let mut score = black_undeveloped - white_undeveloped;

    for sq in CENTER_SQUARES {
        if board.piece_on(sq) == Some(Piece::Pawn) {
            score += match board.color_on(sq) {
                Some(Color::White) => 35,
                Some(Color::Black) => -35,
                None => 0,
            };
        }
    }

    score
}

// ---- castling ----

fn has_castling_rights(board: &Board, color: Color) -> bool {
    let rights = board.castle_rights(color);
    rights.has_kingside() || rights.has_queenside()
}

fn castling(board: &Board) -> i32 {
    let mut score = 0;

    let white_king = board.king_square(Color::White);
    if white_king == Square::G1 || white_king == Square::C1 {
        score += 1000;
    } else if has_castling_rights(board, Color::White) && white_king == Square::E1 {
        score -= 3000;
    }

    let black_king = board.king_square(Color::Black);
    if black_king == Square::G8 || black_king == Square::C8 {
        score -= 1000;
    } else if has_castling_rights(board, Color::Black) && black_king == Square::E8 {
        score += 3000;
    }

    score
}

// ---- piece activation ----

fn piece_activation_for(board: &Board, color: Color) -> i32 {
    let (bishops, knights, rooks, queen) = match color {
        Color::White => (
            [Square::C1, Square::F1],
            [Square::B1, Square::G1],
            [Square::A1, Square::H1],
            Square::D1,
        ),
        Color::Black => (
            [Square::C8, Square::F8],
            [Square::B8, Square::G8],
            [Square::A8, Square::H8],
            Square::D8,
        ),
    };

    let mut score = 0;
    for sq in bishops {
        if !minor_sits_on(board, Piece::Bishop, color, sq) {
            score += 50;
        }
    }
    for sq in knights {
        if !minor_sits_on(board, Piece::Knight, color, sq) {
            score += 45;
        }
    }
    for sq in rooks {
        if !minor_sits_on(board, Piece::Rook, color, sq) {
            score += 40;
        }
    }
    if !minor_sits_on(board, Piece::Queen, color, queen) {
        score += 35;
    }
    score
}

fn piece_activation(board: &Board) -> i32 {
    piece_activation_for(board, Color::White) - piece_activation_for(board, Color::Black)
}

// ---- pawn advances ----

fn pawn_advances_for(board: &Board, color: Color) -> i32 {
    let own_pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);
    let start_rank = match color {
        Color::White => 1usize,
        Color::Black => 6usize,
    };
    let at = |rank: usize, file: usize| {
        Square::make_square(chess::Rank::from_index(rank), chess::File::from_index(file))
    };

    let mut score = 0;

    // Central pawns: reward leaving the starting square, more for
    // actually standing in the middle of the board.
    for file in [3usize, 4] {
        if own_pawns & BitBoard::from_square(at(start_rank, file)) == EMPTY {
            score += 30;
            for rank in [3usize, 4] {
                if own_pawns & BitBoard::from_square(at(rank, file)) != EMPTY {
                    score += 50;
                }
            }
        }
    }

    // Flank pawns: a token bonus only, to keep play in the center.
    for file in [0usize, 1, 2, 5, 6, 7] {
        if own_pawns & BitBoard::from_square(at(start_rank, file)) == EMPTY {
            score += 10;
        }
    }

    score
}

fn pawn_advances(board: &Board) -> i32 {
    pawn_advances_for(board, Color::White) - pawn_advances_for(board, Color::Black)
}

// ---- key-square control ----

fn key_squares(board: &Board) -> i32 {
    let mut score = 0;
    for sq in KEY_SQUARES {
        if is_attacked_on(board, Color::White, sq) {
            score += 15;
            if board.color_on(sq) == Some(Color::White) {
                score += 25;
            }
        }
        if is_attacked_on(board, Color::Black, sq) {
            score -= 15;
            if board.color_on(sq) == Some(Color::Black) {
                score -= 25;
            }
        }
    }
    score
}

// ---- tactical threats & patterns ----

fn tactical_threats_for(board: &Board, color: Color) -> i32 {
    let Some(b) = side_board(board, color) else {
        return 0;
    };
    let mut score = 0;

    for mv in MoveGen::new_legal(&b) {
        let from = mv.get_source();
        let to = mv.get_dest();
        let piece = b.piece_on(from);

        // Winning a bigger piece with a smaller one is profit even
        // before any search confirms it.
        if let (Some(attacker), Some(victim)) = (piece, b.piece_on(to)) {
            let gain = material_value(victim);
            let cost = material_value(attacker);
            if gain > cost {
                score += gain - cost;
            }
        }

        let next = b.make_move_new(mv);
        if let Some(landed) = next.piece_on(to) {
            let attacks = piece_attacks(landed, to, color, *next.combined());
            let enemy = *next.color_combined(!color);

            let mut big_targets = 0;
            for target in attacks & enemy {
                if next
                    .piece_on(target)
                    .is_some_and(|p| material_value(p) >= 300)
                {
                    big_targets += 1;
                }
            }
            if big_targets >= 2 {
                score += 1500;
            }

            if next.checkers().popcnt() > 0 {
                score += 200;
            }

            // Slider landing with a pin against the enemy king.
            if matches!(landed, Piece::Bishop | Piece::Rook | Piece::Queen)
                && attacks & *next.pinned() & enemy != EMPTY
            {
                score += 1000;
            }
        }

        if mv.get_promotion().is_some() {
            score += 1000;
        }
    }

    score
}

fn tactical_threats(board: &Board) -> i32 {
    tactical_threats_for(board, Color::White) - tactical_threats_for(board, Color::Black)
}

fn tactical_patterns_for(board: &Board, color: Color) -> i32 {
    let Some(b) = side_board(board, color) else {
        return 0;
    };
    let mut score = 0;

    for mv in MoveGen::new_legal(&b) {
        let to = mv.get_dest();
        if let (Some(attacker), Some(victim)) = (b.piece_on(mv.get_source()), b.piece_on(to)) {
            if material_value(victim) > material_value(attacker) {
                score += 50;
            }
        }

        let next = b.make_move_new(mv);
        if next.checkers().popcnt() > 0 {
            score += 50;
        }
        if next.status() == chess::BoardStatus::Ongoing {
            if let Some(landed) = next.piece_on(to) {
                if piece_attacks(landed, to, color, *next.combined()).popcnt() >= 2 {
                    score += 20;
                }
            }
        }
    }

    score
}

fn tactical_patterns(board: &Board) -> i32 {
    tactical_patterns_for(board, Color::White) - tactical_patterns_for(board, Color::Black)
}

// ---- passed pawns (endgame) ----

fn passed_pawns_endgame_for(board: &Board, color: Color) -> i32 {
    let own_pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);
    let own_king = board.king_square(color);
    let enemy_king = board.king_square(!color);
    let mut score = 0;

    for sq in own_pawns {
        if !is_passed(board, color, sq) {
            continue;
        }
        let rel = rel_rank(color, sq.get_rank().to_index()) as i32;
        let advanced = rel - 1;
        let mut value = 20 * (advanced + 1);

        // Sixth or seventh rank: promotion is around the corner.
        if rel >= 5 {
            value *= 2;
        }

        value += (7 - manhattan(own_king, sq)) * 10;

        let promotion_rank = match color {
            Color::White => 7usize,
            Color::Black => 0usize,
        };
        let promotion_sq =
            Square::make_square(chess::Rank::from_index(promotion_rank), sq.get_file());
        let tempo = if board.side_to_move() == color { 0 } else { 1 };
        // The enemy king is outside the square of the pawn: it can run
        // but it cannot arrive.
        if manhattan(enemy_king, promotion_sq) > (7 - rel) + tempo {
            value *= 3;
        }

        score += value;
    }

    score
}

fn passed_pawns_endgame(board: &Board) -> i32 {
    passed_pawns_endgame_for(board, Color::White) - passed_pawns_endgame_for(board, Color::Black)
}

// ---- rooks on open files / 7th rank ----

fn rook_files_for(board: &Board, color: Color) -> i32 {
    let rooks = *board.pieces(Piece::Rook) & *board.color_combined(color);
    let all_pawns = *board.pieces(Piece::Pawn);
    let own_pawns = all_pawns & *board.color_combined(color);
    let mut score = 0;

    for sq in rooks {
        let file_bb = chess::get_file(sq.get_file());
        if all_pawns & file_bb == EMPTY {
            score += 100;
        } else if own_pawns & file_bb == EMPTY {
            score += 50;
        }
        if rel_rank(color, sq.get_rank().to_index()) == 6 {
            score += 100;
        }
    }
    score
}

fn rook_files(board: &Board) -> i32 {
    rook_files_for(board, Color::White) - rook_files_for(board, Color::Black)
}

// ---- endgame king activity ----

fn king_activity(board: &Board) -> i32 {
    let mut score = 0;

    for (color, sign) in [(Color::White, 1), (Color::Black, -1)] {
        let king = board.king_square(color);
        let center_distance = CENTER_SQUARES
            .iter()
            .map(|&c| manhattan(king, c))
            .min()
            .unwrap_or(7);
        score += sign * (7 - center_distance) * 20;

        // A king glued to its back ranks is not doing endgame work.
        if rel_rank(color, king.get_rank().to_index()) <= 1 {
            score -= sign * 100;
        }
    }

    score
}

// ---- queen trade ----

fn queen_trade(board: &Board, material: i32) -> i32 {
    let queens = *board.pieces(Piece::Queen);
    let white_queens = queens & *board.color_combined(Color::White);
    let black_queens = queens & *board.color_combined(Color::Black);
    if white_queens == EMPTY || black_queens == EMPTY {
        return 0;
    }
    if material > 200 {
        500
    } else if material < -200 {
        -500
    } else {
        0
    }
}

// ---- attack / defense strength ----

fn attack_strength_for(board: &Board, color: Color) -> i32 {
    let own = *board.color_combined(color);
    let mut score = 0;

    for sq in own {
        score += match board.piece_on(sq) {
            Some(Piece::Queen) => 5000,
            Some(Piece::Rook) => 4000,
            Some(Piece::Bishop) => 3500,
            Some(Piece::Knight) => 3000,
            _ => 2000,
        };
    }

    for sq in *board.color_combined(!color) {
        if is_attacked_on(board, color, sq) {
            if let Some(piece) = board.piece_on(sq) {
                score += material_value(piece) / 5;
            }
        }
    }

    score
}

fn attack_strength(board: &Board) -> i32 {
    attack_strength_for(board, Color::White) - attack_strength_for(board, Color::Black)
}

fn defense_strength_for(board: &Board, color: Color) -> i32 {
    let own = *board.color_combined(color);
    let mut score = 0;

    for sq in own {
        score += match board.piece_on(sq) {
            Some(Piece::Pawn) => 1000,
            Some(Piece::Knight) => 1500,
            Some(Piece::Rook) => 2000,
            Some(Piece::Queen) => 2500,
            Some(Piece::King) => 3000,
            _ => 1750,
        };
    }

    let king = board.king_square(color);
    let file = king.get_file().to_index() as i32;
    let rank = rel_rank(color, king.get_rank().to_index()) as i32;
    score -= (file - 3).abs() + (rank - 3).abs();

    score
}

fn defense_strength(board: &Board) -> i32 {
    defense_strength_for(board, Color::White) - defense_strength_for(board, Color::Black)
}

// ---- crude endgame material advantage ----

fn endgame_advantage(board: &Board) -> i32 {
    let total_pieces = board.combined().popcnt();
    let white_pawns = (*board.pieces(Piece::Pawn) & *board.color_combined(Color::White)).popcnt();
    let black_pawns = (*board.pieces(Piece::Pawn) & *board.color_combined(Color::Black)).popcnt();

    let mut score = 0;
    if white_pawns == 1 && total_pieces <= 4 {
        score += 100;
    }
    if black_pawns == 1 && total_pieces <= 4 {
        score -= 100;
    }
    score
}

/// Weight applied in tenths, so the blend table stays readable next to
/// its fractional weights.
#[inline]
fn w(term: i32, tenths: i32) -> i32 {
    term * tenths / 10
}

/// Evaluate `pos` from White's point of view, in centipawns.
pub fn evaluate(pos: &Position) -> i32 {
    if pos.is_checkmate() {
        // The side to move is the one who got mated.
        return match pos.side_to_move() {
            Color::White => -INFINITY,
            Color::Black => INFINITY,
        };
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return 0;
    }

    let board = pos.board();
    let fullmove = pos.fullmove_number();
    let phase = game_phase(board);
    let material = material_and_pst(board, phase);

    if phase >= 17 {
        // Opening: develop, castle, fight for the center.
        material
            + w(mobility(board), 8)
            + w(development(board, fullmove), 25)
            + w(king_safety(board), 20)
            + w(center_control(board), 20)
            + w(pawn_structure(board, phase), 7)
            + w(castling(board), 20)
            + w(piece_activation(board), 25)
            + w(pawn_advances(board), 15)
            + w(key_squares(board), 18)
            + w(queen_trade(board, material), 1)
            + w(attack_strength(board), 7)
            + w(defense_strength(board), 12)
    } else if phase >= 8 {
        // Middlegame: tactics and king safety dominate.
        material
            + w(mobility(board), 20)
            + w(tactical_threats(board), 18)
            + w(king_safety(board), 20)
            + w(pawn_structure(board, phase), 12)
            + w(center_control(board), 15)
            + w(tactical_patterns(board), 15)
            + w(key_squares(board), 12)
            + w(rook_files(board), 15)
            + w(attack_strength(board), 10)
            + w(defense_strength(board), 13)
            + w(queen_trade(board, material), 5)
    } else {
        // Endgame: kings walk, passers run.
        material
            + w(mobility(board), 18)
            + w(king_activity(board), 30)
            + w(pawn_structure(board, phase), 25)
            + w(rook_files(board), 18)
            + w(endgame_advantage(board), 20)
            + w(passed_pawns_endgame(board), 30)
            + w(attack_strength(board), 8)
            + w(defense_strength(board), 13)
            + w(pawn_advances(board), 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_balanced() {
        let pos = Position::new();
        assert_eq!(evaluate(&pos), 0, "starting position should be level");
    }

    #[test]
    fn phase_spans_opening_to_endgame() {
        let start = Position::new();
        assert_eq!(game_phase(start.board()), 24);

        let bare = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(game_phase(bare.board()), 0);

        let rook_ending = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(game_phase(rook_ending.board()), 2);
    }

    #[test]
    fn material_edge_shows_up() {
        // White is a clean rook up in a sparse position.
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 40").unwrap();
        assert!(
            evaluate(&pos) > 300,
            "a rook up should evaluate clearly positive"
        );
    }

    #[test]
    fn passed_pawn_cone_detection() {
        let pos = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_passed(pos.board(), Color::White, Square::D5));

        let blocked = Position::from_fen("4k3/4p3/8/3P4/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(!is_passed(blocked.board(), Color::White, Square::D5));
    }
}
