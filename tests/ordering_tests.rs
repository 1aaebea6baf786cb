// Move-orderer tests: the signals that matter most must visibly move
// candidates to the front of the list.

use chess::{ChessMove, Square};
use outpost::position::Position;
use outpost::search::context::SearchContext;
use outpost::search::ordering::order_moves;

#[test]
fn previous_best_move_goes_first() {
    let pos = Position::new();
    let ctx = SearchContext::new();
    let prev = ChessMove::new(Square::A2, Square::A3, None);

    let moves = order_moves(&pos, 3, Some(prev), &ctx);
    assert_eq!(
        moves[0], prev,
        "the hint from the previous iteration outranks everything"
    );
}

#[test]
fn ordering_is_a_permutation_of_legal_moves() {
    let pos = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    )
    .unwrap();
    let ctx = SearchContext::new();

    let mut ordered = order_moves(&pos, 2, None, &ctx);
    let mut legal = pos.legal_moves();
    assert_eq!(ordered.len(), legal.len());

    ordered.sort_by_key(|m| (m.get_source().to_index(), m.get_dest().to_index()));
    legal.sort_by_key(|m| (m.get_source().to_index(), m.get_dest().to_index()));
    assert_eq!(ordered, legal, "ordering must not invent or drop moves");
}

#[test]
fn promotions_lead_quiet_positions() {
    let pos = Position::from_fen("8/4P3/8/8/8/2k5/8/4K3 w - - 0 1").unwrap();
    let ctx = SearchContext::new();

    let moves = order_moves(&pos, 2, None, &ctx);
    assert!(
        moves[0].get_promotion().is_some(),
        "promotion should be tried before king shuffles"
    );
}

#[test]
fn winning_capture_leads_the_list() {
    // 1.e4 d5: taking on d5 is the clear front-runner.
    let pos = Position::from_fen(
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
    )
    .unwrap();
    let ctx = SearchContext::new();

    let moves = order_moves(&pos, 2, None, &ctx);
    assert_eq!(
        moves[0],
        ChessMove::new(Square::E4, Square::D5, None),
        "exd5 carries capture, center and pawn bonuses"
    );
}

#[test]
fn killer_move_jumps_the_quiet_queue() {
    let pos = Position::new();
    let mut ctx = SearchContext::new();
    let killer = ChessMove::new(Square::H2, Square::H3, None);
    ctx.update_killer(3, killer);

    let moves = order_moves(&pos, 3, None, &ctx);
    let killer_at = moves.iter().position(|&m| m == killer).unwrap();
    let other_pawn = moves
        .iter()
        .position(|&m| m == ChessMove::new(Square::A2, Square::A3, None))
        .unwrap();
    assert!(
        killer_at < other_pawn,
        "the killer should outrank an ordinary quiet pawn move"
    );

    // At a different depth the killer table does not apply.
    let other_depth = order_moves(&pos, 5, None, &ctx);
    assert_ne!(other_depth[0], killer);
}

#[test]
fn history_accumulates_and_biases_ordering() {
    let pos = Position::new();
    let mut ctx = SearchContext::new();
    let mv = ChessMove::new(Square::A2, Square::A3, None);

    // depth^2 growth
    ctx.update_history(mv, 4);
    assert_eq!(ctx.history(mv), 16);
    ctx.update_history(mv, 10);
    assert_eq!(ctx.history(mv), 116);

    // Pump it far enough and the rook-pawn push leads everything.
    ctx.update_history(mv, 100);
    let moves = order_moves(&pos, 2, None, &ctx);
    assert_eq!(moves[0], mv);
}

#[test]
fn ordering_is_deterministic() {
    let pos = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    )
    .unwrap();
    let ctx = SearchContext::new();

    let first = order_moves(&pos, 3, None, &ctx);
    let second = order_moves(&pos, 3, None, &ctx);
    assert_eq!(first, second, "stable sort keeps ties in generation order");
}
