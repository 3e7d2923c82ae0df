//! Integration tests for statistics aggregation across sessions.

use rps_engine::core::{GameSettings, Hand, ScriptedHands};
use rps_engine::session::GameEngine;
use rps_engine::stats::GameStatistics;
use rps_engine::RoundOutcome;

fn scripted(hands: Vec<Hand>) -> GameEngine<ScriptedHands> {
    GameEngine::with_hand_source(ScriptedHands::new(hands))
}

#[test]
fn test_stats_accumulate_across_sessions() {
    let mut engine =
        scripted(vec![Hand::Scissors]).with_settings(GameSettings::new().with_winning_score(2));

    // Two sessions, two wins each.
    for _ in 0..2 {
        engine.play_round().unwrap();
        engine.play_round().unwrap();
        assert!(engine.session().is_over());
        engine.reset_session();
    }

    let stats = engine.statistics();
    assert_eq!(stats.total_rounds, 4);
    assert_eq!(stats.wins, 4);
    assert_eq!(stats.win_streak, 4);
    assert_eq!(stats.longest_streak, 4);
}

#[test]
fn test_each_round_fills_exactly_one_bucket() {
    let mut engine = scripted(vec![Hand::Scissors, Hand::Paper, Hand::Rock])
        .with_settings(GameSettings::new().with_winning_score(100));

    for expected_total in 1..=9u32 {
        let before = engine.statistics().clone();
        let report = engine.play_round().unwrap();
        let after = engine.statistics();

        assert_eq!(after.total_rounds, expected_total);
        assert_eq!(after.total_rounds, before.total_rounds + 1);

        let (dw, dl, dt) = (
            after.wins - before.wins,
            after.losses - before.losses,
            after.ties - before.ties,
        );
        assert_eq!(dw + dl + dt, 1);
        match report.outcome {
            RoundOutcome::Player => assert_eq!(dw, 1),
            RoundOutcome::Opponent => assert_eq!(dl, 1),
            RoundOutcome::Tie => assert_eq!(dt, 1),
        }
    }
}

#[test]
fn test_streak_survives_session_reset_but_not_a_loss() {
    let mut engine = scripted(vec![Hand::Scissors, Hand::Scissors, Hand::Paper])
        .with_settings(GameSettings::new().with_winning_score(100));

    engine.play_round().unwrap();
    engine.play_round().unwrap();
    assert_eq!(engine.statistics().win_streak, 2);

    // Resetting the session does not break the lifetime streak.
    engine.reset_session();
    assert_eq!(engine.statistics().win_streak, 2);

    // A loss does.
    engine.play_round().unwrap();
    assert_eq!(engine.statistics().win_streak, 0);
    assert_eq!(engine.statistics().longest_streak, 2);
}

#[test]
fn test_hand_usage_and_favorite_follow_player_choices() {
    let mut engine = scripted(vec![Hand::Rock]).with_settings(GameSettings::new().with_winning_score(100));

    engine.select_hand(Hand::Scissors);
    engine.play_round().unwrap();
    engine.play_round().unwrap();
    engine.select_hand(Hand::Paper);
    engine.play_round().unwrap();

    let stats = engine.statistics();
    assert_eq!(stats.hand_usage[Hand::Scissors], 2);
    assert_eq!(stats.hand_usage[Hand::Paper], 1);
    assert_eq!(stats.hand_usage[Hand::Rock], 0);
    assert_eq!(stats.favorite_hand, Hand::Scissors);
}

#[test]
fn test_clear_statistics_only() {
    let mut engine =
        scripted(vec![Hand::Scissors]).with_settings(GameSettings::new().with_winning_score(7));
    engine.play_round().unwrap();

    engine.clear_statistics();

    assert_eq!(*engine.statistics(), GameStatistics::default());
    // Settings and the live session are untouched.
    assert_eq!(engine.settings().winning_score, 7);
    assert_eq!(engine.session().player_score, 1);
}
