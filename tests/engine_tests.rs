// Engine facade tests: move prediction contract, fallback behavior and
// Elo bookkeeping.

use std::time::Duration;

use outpost::engine::Engine;
use outpost::position::Position;

#[test]
fn predict_returns_a_legal_move_and_restores_the_position() {
    let mut engine = Engine::new();
    let mut pos = Position::new();
    let fingerprint = pos.fingerprint();

    let mv = engine
        .predict_move_with(&mut pos, 2, Duration::from_secs(120))
        .expect("startpos has legal moves");

    assert!(pos.is_legal(mv));
    assert_eq!(pos.fingerprint(), fingerprint);
}

#[test]
fn predict_with_one_second_budget_still_moves() {
    let mut engine = Engine::new();
    let mut pos = Position::new();

    let mv = engine
        .predict_move_with(&mut pos, 64, Duration::from_secs(1))
        .expect("some move must come back");
    assert!(pos.is_legal(mv));
}

#[test]
fn predict_with_zero_budget_falls_back_to_a_legal_move() {
    let mut engine = Engine::new();
    let mut pos = Position::new();

    let mv = engine
        .predict_move_with(&mut pos, 64, Duration::ZERO)
        .expect("fallback sampler covers a dead clock");
    assert!(pos.is_legal(mv));
}

#[test]
fn predict_on_a_finished_game_returns_none() {
    let mut engine = Engine::new();
    let mut pos =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    assert!(pos.is_checkmate());

    assert_eq!(
        engine.predict_move_with(&mut pos, 2, Duration::from_secs(1)),
        None
    );
}

#[test]
fn two_fresh_engines_agree_on_the_same_position() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

    let mut a = Engine::new();
    let mut pos_a = Position::from_fen(fen).unwrap();
    let move_a = a.predict_move_with(&mut pos_a, 3, Duration::from_secs(120));

    let mut b = Engine::new();
    let mut pos_b = Position::from_fen(fen).unwrap();
    let move_b = b.predict_move_with(&mut pos_b, 3, Duration::from_secs(120));

    assert_eq!(move_a, move_b, "fresh tables make prediction deterministic");
}

#[test]
fn elo_moves_sixteen_points_between_equals() {
    let mut winner = Engine::new();
    let mut loser = Engine::new();
    assert_eq!(winner.rating(), 1000.0);

    winner.record_result(&mut loser, 1.0);
    assert_eq!(winner.rating(), 1016.0);
    assert_eq!(loser.rating(), 984.0);
}

#[test]
fn elo_draw_nudges_toward_the_underdog() {
    let mut strong = Engine::new();
    let mut weak = Engine::new();
    strong.record_result(&mut weak, 1.0); // 1016 vs 984

    strong.record_result(&mut weak, 0.5);
    assert_eq!(strong.rating(), 1015.0, "favorite bleeds a point on a draw");
    assert_eq!(weak.rating(), 985.0);
}

#[test]
fn elo_upset_swings_harder() {
    let mut strong = Engine::new();
    let mut weak = Engine::new();
    strong.record_result(&mut weak, 1.0); // 1016 vs 984

    strong.record_result(&mut weak, 0.0);
    assert_eq!(strong.rating(), 999.0);
    assert_eq!(weak.rating(), 1001.0);
}

#[test]
fn out_of_range_results_are_ignored() {
    let mut a = Engine::new();
    let mut b = Engine::new();
    a.record_result(&mut b, 1.5);
    assert_eq!(a.rating(), 1000.0);
    assert_eq!(b.rating(), 1000.0);
}
