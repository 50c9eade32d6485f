//! Tests for the match engine lifecycle and rules.

use ttt_match::{
    MatchEngine, MatchResult, MatchState, MemoryScoreStore, MoveOutcome, Outcome, Player,
    Position, RejectReason, Square,
};

fn engine() -> MatchEngine<MemoryScoreStore> {
    MatchEngine::new(MemoryScoreStore::new())
}

/// Plays a sequence of indices, asserting every move lands.
fn play_all(engine: &mut MatchEngine<MemoryScoreStore>, indices: &[usize]) -> MoveOutcome {
    let mut last = MoveOutcome::Placed;
    for &idx in indices {
        last = engine.attempt_move(idx).expect("index in range");
        assert!(
            !matches!(last, MoveOutcome::Rejected(_)),
            "move at {idx} unexpectedly rejected"
        );
    }
    last
}

#[test]
fn test_top_row_win_scenario() {
    // X plays 0, 1, 2; O plays 4, 5. X wins the top row.
    let mut eng = engine();
    let outcome = play_all(&mut eng, &[0, 4, 1, 5, 2]);

    assert_eq!(
        outcome,
        MoveOutcome::Ended(MatchResult::Won {
            winner: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        })
    );
    assert_eq!(eng.view().state, MatchState::Won);
    assert_eq!(eng.scores().get(Outcome::X), 1);
    assert_eq!(eng.scores().get(Outcome::O), 0);
}

#[test]
fn test_full_board_draw_scenario() {
    // X X O / O O X / X X O - fills with no line on the ninth move.
    let mut eng = engine();
    let outcome = play_all(&mut eng, &[0, 2, 1, 3, 5, 4, 6, 8, 7]);

    assert_eq!(outcome, MoveOutcome::Ended(MatchResult::Draw));
    assert_eq!(eng.view().state, MatchState::Draw);
    assert_eq!(eng.view().result, Some(MatchResult::Draw));
    assert_eq!(eng.scores().get(Outcome::Draw), 1);
}

#[test]
fn test_double_move_on_same_cell() {
    let mut eng = engine();
    assert_eq!(eng.attempt_move(0), Ok(MoveOutcome::Placed));

    // Second attempt on the same cell (now O's turn) is a no-op.
    assert_eq!(
        eng.attempt_move(0),
        Ok(MoveOutcome::Rejected(RejectReason::CellOccupied))
    );

    let view = eng.view();
    assert_eq!(view.board.get(Position::TopLeft), Square::Occupied(Player::X));
    // The rejected attempt did not consume O's turn.
    assert_eq!(view.current_player, Player::O);
}

#[test]
fn test_no_moves_accepted_after_win() {
    let mut eng = engine();
    play_all(&mut eng, &[0, 4, 1, 5, 2]);

    for idx in 0..9 {
        assert_eq!(
            eng.attempt_move(idx),
            Ok(MoveOutcome::Rejected(RejectReason::MatchNotActive)),
            "index {idx}"
        );
    }
    // Still exactly one win recorded.
    assert_eq!(eng.scores().get(Outcome::X), 1);
}

#[test]
fn test_out_of_range_index_rejected_fast() {
    let mut eng = engine();
    for idx in [9, 10, usize::MAX] {
        let err = eng.attempt_move(idx).expect_err("out of range");
        assert_eq!(err.index, idx);
    }
    // The board was never touched.
    assert!(
        eng.view()
            .board
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );
}

#[test]
fn test_restart_keeps_turn_after_terminal() {
    // O makes the terminal move, so O is still current after it.
    let mut eng = engine();
    play_all(&mut eng, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(eng.view().state, MatchState::Won);
    assert_eq!(eng.view().current_player, Player::O);

    eng.reset(true);
    assert_eq!(eng.view().state, MatchState::Active);
    assert_eq!(eng.view().current_player, Player::O);
    assert_eq!(eng.view().result, None);
}

#[test]
fn test_fresh_restart_returns_turn_to_x() {
    let mut eng = engine();
    play_all(&mut eng, &[0, 3, 1, 4, 8, 5]);

    eng.reset(false);
    let view = eng.view();
    assert_eq!(view.current_player, Player::X);
    assert_eq!(view.state, MatchState::Active);
    assert!(view.board.squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_scores_accumulate_across_matches() {
    let mut eng = engine();

    play_all(&mut eng, &[0, 4, 1, 5, 2]); // X wins
    eng.reset(false);
    play_all(&mut eng, &[0, 3, 1, 4, 8, 5]); // O wins
    eng.reset(false);
    play_all(&mut eng, &[0, 2, 1, 3, 5, 4, 6, 8, 7]); // draw

    let tally = eng.scores();
    assert_eq!(tally.get(Outcome::X), 1);
    assert_eq!(tally.get(Outcome::O), 1);
    assert_eq!(tally.get(Outcome::Draw), 1);
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let mut a = engine();
    let b = engine();
    a.attempt_move(4).expect("in range");
    assert!(b.view().board.is_empty(Position::Center));
    assert_eq!(b.view().current_player, Player::X);
}
