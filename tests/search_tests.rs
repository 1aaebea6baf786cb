// Search driver tests: mating, forced moves, time boundaries and
// determinism of the iterative deepener.

use std::time::Duration;

use chess::{ChessMove, Square};
use outpost::position::Position;
use outpost::search::search::search;
use outpost::search::tt::TranspositionTable;

const LONG_BUDGET: Duration = Duration::from_secs(120);

#[test]
fn finds_back_rank_mate_in_one() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let mut tt = TranspositionTable::new(8);

    let best = search(&mut pos, &mut tt, 3, LONG_BUDGET);
    assert_eq!(
        best,
        Some(ChessMove::new(Square::E1, Square::E8, None)),
        "Re8# is the only mate on the board"
    );
}

#[test]
fn plays_the_only_legal_move() {
    // White king is checked by the h1 rook; a2 is the lone flight square.
    let mut pos = Position::from_fen("1r6/8/8/8/8/8/8/K6r w - - 0 1").unwrap();
    assert_eq!(pos.legal_moves().len(), 1);

    let mut tt = TranspositionTable::new(8);
    let best = search(&mut pos, &mut tt, 5, LONG_BUDGET);
    assert_eq!(best, Some(ChessMove::new(Square::A1, Square::A2, None)));
}

#[test]
fn returns_a_legal_move_and_restores_the_position() {
    let mut pos = Position::new();
    let fingerprint = pos.fingerprint();
    let mut tt = TranspositionTable::new(8);

    let best = search(&mut pos, &mut tt, 2, LONG_BUDGET).expect("startpos has moves");
    assert!(pos.is_legal(best), "search must return a legal move");
    assert_eq!(
        pos.fingerprint(),
        fingerprint,
        "search must leave the position untouched"
    );
}

#[test]
fn search_works_for_black_too() {
    // After 1.e4 Black should find something sane, not self-destruct.
    let mut pos = Position::from_fen(
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    )
    .unwrap();
    let mut tt = TranspositionTable::new(8);

    let best = search(&mut pos, &mut tt, 2, LONG_BUDGET).expect("black has moves");
    assert!(pos.is_legal(best));

    // Sanity: the reply should not hang the queen or king outright.
    pos.push(best);
    assert!(!pos.is_checkmate());
    pos.pop();
}

#[test]
fn zero_time_budget_completes_no_iteration() {
    let mut pos = Position::new();
    let mut tt = TranspositionTable::new(8);

    let best = search(&mut pos, &mut tt, 5, Duration::ZERO);
    assert_eq!(best, None, "no depth can complete inside a zero budget");
}

#[test]
fn terminal_position_yields_no_move() {
    let mut pos =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    assert!(pos.is_checkmate());

    let mut tt = TranspositionTable::new(8);
    assert_eq!(search(&mut pos, &mut tt, 3, LONG_BUDGET), None);
}

#[test]
fn search_is_deterministic_from_fresh_tables() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

    let mut pos1 = Position::from_fen(fen).unwrap();
    let mut tt1 = TranspositionTable::new(8);
    let first = search(&mut pos1, &mut tt1, 3, LONG_BUDGET);

    let mut pos2 = Position::from_fen(fen).unwrap();
    let mut tt2 = TranspositionTable::new(8);
    let second = search(&mut pos2, &mut tt2, 3, LONG_BUDGET);

    assert_eq!(first, second, "equal inputs and fresh tables, equal move");
    assert!(first.is_some());
}

#[test]
fn repeated_positions_score_as_dead_draws() {
    use outpost::search::context::SearchContext;
    use outpost::search::search::negamax;
    use outpost::search::INFINITY;

    let mut pos = Position::new();
    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let mv = pos.parse_move(text).unwrap();
        pos.push(mv);
    }
    assert_eq!(pos.repetitions(), 2);

    let mut tt = TranspositionTable::new(8);
    let mut ctx = SearchContext::new();
    let score = negamax(&mut pos, 3, -INFINITY, INFINITY, 1, &mut tt, &mut ctx);
    assert_eq!(score, 0, "a twice-seen position is scored as a draw");
}

#[test]
fn prefers_the_open_file_in_a_rook_endgame() {
    // Rook a1 against a kingside pawn formation: activating the rook
    // must not hang anything, and the search should keep the game going.
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut tt = TranspositionTable::new(8);

    let best = search(&mut pos, &mut tt, 3, LONG_BUDGET).expect("plenty of moves here");
    assert!(pos.is_legal(best));

    // The rook owns the only open files; the best move should use it.
    let is_rook_move = best.get_source() == Square::A1;
    assert!(
        is_rook_move,
        "expected rook activity, got {best}"
    );
}
