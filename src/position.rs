//! Stateful wrapper around the `chess` crate's copy-make board.
//!
//! The search wants push/pop semantics, repetition counts and a fullmove
//! counter, none of which `chess::Board` carries. `Position`
//! keeps a stack of board snapshots plus the Zobrist history of everything
//! played or searched so far, so a search can walk the tree destructively
//! and still hand the caller back a bit-identical position.

use chess::{
    BitBoard, Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square, EMPTY,
};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveParseError {
    #[error("unreadable move notation `{0}`")]
    Notation(String),
    #[error("move `{0}` is not legal here")]
    Illegal(String),
}

#[derive(Debug, Error)]
#[error("invalid FEN `{0}`")]
pub struct FenError(String);

#[derive(Clone, Copy)]
struct Frame {
    board: Board,
    fullmove: u32,
}

/// A chess position with push/pop history.
#[derive(Clone)]
pub struct Position {
    board: Board,
    undo: Vec<Frame>,
    hashes: Vec<u64>,
    fullmove: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default(), 1)
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_str(fen).map_err(|_| FenError(fen.to_string()))?;
        // The chess crate drops the clocks; recover the fullmove counter
        // from the sixth FEN field when one is present.
        let fullmove = fen
            .split_whitespace()
            .nth(5)
            .and_then(|f| f.parse().ok())
            .unwrap_or(1);
        Ok(Self::from_board(board, fullmove))
    }

    fn from_board(board: Board, fullmove: u32) -> Self {
        Self {
            board,
            undo: Vec::with_capacity(128),
            hashes: vec![board.get_hash()],
            fullmove,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove
    }

    #[inline]
    pub fn zobrist(&self) -> u64 {
        self.board.get_hash()
    }

    /// Placement, side to move, castling and en-passant. The move
    /// counters are deliberately excluded so transpositions reached by
    /// different move orders share an identity.
    pub fn fingerprint(&self) -> String {
        let fen = self.board.to_string();
        fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    pub fn push(&mut self, mv: ChessMove) {
        self.undo.push(Frame {
            board: self.board,
            fullmove: self.fullmove,
        });
        if self.board.side_to_move() == Color::Black {
            self.fullmove += 1;
        }
        self.board = self.board.make_move_new(mv);
        self.hashes.push(self.board.get_hash());
    }

    /// Hand the move to the opponent. Only valid when the side to move is
    /// not in check; returns false (and does nothing) otherwise.
    pub fn push_null(&mut self) -> bool {
        match self.board.null_move() {
            Some(next) => {
                self.undo.push(Frame {
                    board: self.board,
                    fullmove: self.fullmove,
                });
                if self.board.side_to_move() == Color::Black {
                    self.fullmove += 1;
                }
                self.board = next;
                self.hashes.push(self.board.get_hash());
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self) {
        let frame = self.undo.pop().expect("pop without matching push");
        self.board = frame.board;
        self.fullmove = frame.fullmove;
        self.hashes.pop();
    }

    /// How many times the current position has occurred, counting this one.
    pub fn repetitions(&self) -> usize {
        let hash = self.board.get_hash();
        self.hashes.iter().filter(|&&h| h == hash).count()
    }

    // ---- per-move queries ----

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((piece, color))
    }

    pub fn is_capture(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_dest()).is_some() || self.is_en_passant(mv)
    }

    pub fn is_en_passant(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
            && self.board.piece_on(mv.get_dest()).is_none()
    }

    pub fn is_promotion(&self, mv: ChessMove) -> bool {
        mv.get_promotion().is_some()
    }

    pub fn gives_check(&self, mv: ChessMove) -> bool {
        self.board.make_move_new(mv).checkers().popcnt() > 0
    }

    // ---- position predicates ----

    pub fn in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// K vs K, lone-minor endings, and all-bishops-on-one-color endings.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = *b.pieces(Piece::Pawn) | *b.pieces(Piece::Rook) | *b.pieces(Piece::Queen);
        if heavy != EMPTY {
            return false;
        }
        let knights = *b.pieces(Piece::Knight);
        let bishops = *b.pieces(Piece::Bishop);
        let minors = (knights | bishops).popcnt();
        if minors <= 1 {
            return true;
        }
        if knights != EMPTY {
            return false;
        }
        let light = |sq: Square| (sq.get_file().to_index() + sq.get_rank().to_index()) % 2 == 0;
        let mut shades = bishops.map(light);
        let first = shades.next().unwrap();
        shades.all(|s| s == first)
    }

    pub fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing || self.is_insufficient_material()
    }

    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        let b = &self.board;
        let own = *b.color_combined(color);
        let pieces = *b.pieces(Piece::Knight)
            | *b.pieces(Piece::Bishop)
            | *b.pieces(Piece::Rook)
            | *b.pieces(Piece::Queen);
        own & pieces != EMPTY
    }

    pub fn has_castling_rights(&self, color: Color) -> bool {
        let rights = self.board.castle_rights(color);
        rights.has_kingside() || rights.has_queenside()
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.board.king_square(color)
    }

    // ---- attack queries ----

    /// All pieces of `color` attacking `sq` on the current occupancy.
    pub fn attackers(&self, color: Color, sq: Square) -> BitBoard {
        attackers_on(&self.board, color, sq)
    }

    pub fn is_attacked_by(&self, color: Color, sq: Square) -> bool {
        is_attacked_on(&self.board, color, sq)
    }

    // ---- notation ----

    /// Coordinate notation first (`e2e4`, `e7e8q`), SAN second (`Nf3`,
    /// `O-O`). The returned move is always legal in this position.
    pub fn parse_move(&self, text: &str) -> Result<ChessMove, MoveParseError> {
        parse_move_on(&self.board, text)
    }
}

/// All pieces of `color` attacking `sq` on `board`'s occupancy.
pub fn attackers_on(board: &Board, color: Color, sq: Square) -> BitBoard {
    let own = *board.color_combined(color);
    let occupied = *board.combined();

    let mut attackers = chess::get_knight_moves(sq) & *board.pieces(Piece::Knight);
    attackers |= chess::get_king_moves(sq) & *board.pieces(Piece::King);
    attackers |= chess::get_rook_moves(sq, occupied)
        & (*board.pieces(Piece::Rook) | *board.pieces(Piece::Queen));
    attackers |= chess::get_bishop_moves(sq, occupied)
        & (*board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen));
    // A pawn of `color` attacks sq exactly where a pawn of the other color
    // standing on sq would capture.
    attackers |= chess::get_pawn_attacks(sq, !color, own) & *board.pieces(Piece::Pawn);
    attackers & own
}

pub fn is_attacked_on(board: &Board, color: Color, sq: Square) -> bool {
    attackers_on(board, color, sq) != EMPTY
}

fn parse_move_on(board: &Board, text: &str) -> Result<ChessMove, MoveParseError> {
    if let Ok(mv) = ChessMove::from_str(text) {
        if board.legal(mv) {
            return Ok(mv);
        }
        // Coordinate parse succeeded but the move is off-position; fall
        // through in case the text was short SAN like "e4".
    }
    match ChessMove::from_san(board, text) {
        Ok(mv) if board.legal(mv) => Ok(mv),
        Ok(_) => Err(MoveParseError::Illegal(text.to_string())),
        Err(_) => Err(MoveParseError::Notation(text.to_string())),
    }
}
