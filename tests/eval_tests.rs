// Static evaluator tests: terminal values, balance, symmetry and the
// endgame passed-pawn terms.

use outpost::position::Position;
use outpost::search::eval::evaluate;
use outpost::search::INFINITY;

#[test]
fn checkmate_scores_full_sentinel_against_the_mated_side() {
    // Fool's mate: white to move and mated.
    let white_mated =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    assert!(white_mated.is_checkmate());
    assert_eq!(evaluate(&white_mated), -INFINITY);

    // Back-rank mate: black to move and mated.
    let black_mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(black_mated.is_checkmate());
    assert_eq!(evaluate(&black_mated), INFINITY);
}

#[test]
fn stalemate_and_dead_material_score_zero() {
    let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stalemate.is_stalemate());
    assert_eq!(evaluate(&stalemate), 0);

    let dead = Position::from_fen("4k3/8/8/8/8/8/8/4KB2 w - - 0 1").unwrap();
    assert!(dead.is_insufficient_material());
    assert_eq!(evaluate(&dead), 0);
}

#[test]
fn starting_position_is_level() {
    assert_eq!(evaluate(&Position::new()), 0);
}

#[test]
fn symmetric_middlegame_position_is_level() {
    // The position is its own color-mirror, so any imbalance here is an
    // evaluator asymmetry.
    let pos = Position::from_fen("r4rk1/pppq1ppp/2n2n2/3pp3/3PP3/2N2N2/PPPQ1PPP/R4RK1 w - - 0 20")
        .unwrap();
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn mirrored_endgames_negate() {
    let white_passer = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 40").unwrap();
    let black_passer = Position::from_fen("4k3/8/8/8/3p4/8/8/4K3 b - - 0 40").unwrap();
    assert_eq!(
        evaluate(&white_passer),
        -evaluate(&black_passer),
        "color-mirrored positions should negate"
    );
    assert!(
        evaluate(&white_passer) > 0,
        "the extra pawn must count for something"
    );
}

#[test]
fn advanced_passer_outscores_a_fresh_one() {
    let on_fifth = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 40").unwrap();
    let on_sixth = Position::from_fen("4k3/8/3P4/8/8/8/8/4K3 w - - 0 40").unwrap();
    assert!(
        evaluate(&on_sixth) > evaluate(&on_fifth),
        "a pawn one step from the seventh should be worth more"
    );
}

#[test]
fn material_advantage_dominates_sparse_endgames() {
    let rook_up = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 40").unwrap();
    assert!(evaluate(&rook_up) > 300);

    let rook_down = Position::from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 40").unwrap();
    assert!(evaluate(&rook_down) < -300);
}

#[test]
fn evaluation_is_pure() {
    let pos = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
        .unwrap();
    let fingerprint = pos.fingerprint();
    let first = evaluate(&pos);
    let second = evaluate(&pos);

    assert_eq!(first, second, "evaluation must be deterministic");
    assert_eq!(pos.fingerprint(), fingerprint, "evaluation must not mutate");
}
