//! Tests for the interactive loop driven by scripted input.

use tictac::{PlayConfig, run};
use tictac_engine::GameEngine;

fn play(script: &str) -> (GameEngine, tictac::SessionStats, String) {
    let mut engine = GameEngine::new();
    let mut out = Vec::new();
    let stats = run(&mut engine, script.as_bytes(), &mut out, &PlayConfig::default()).unwrap();
    (engine, stats, String::from_utf8(out).unwrap())
}

#[test]
fn test_draw_then_new_game() {
    // X O X / X O O / O X X, then a fresh game
    let (engine, stats, out) = play("0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\nreset\n5\n");

    assert!(out.contains("Draw!"));
    assert_eq!(stats.finished, 1);
    assert_eq!(stats.accepted, 10);
    assert_eq!(engine.move_count(), 1);
    assert!(!engine.is_over());
}

#[test]
fn test_moves_after_win_are_rejected() {
    let (engine, stats, out) = play("1\n4\n5\n7\n9\n3\n");

    assert!(engine.is_over());
    assert!(out.contains("Player X wins (main diagonal)!"));
    assert!(out.contains("game is already over"));
    assert_eq!(stats.rejected, 1);
}

#[test]
fn test_help_text() {
    let (_, _, out) = play("help\n");
    assert!(out.contains("Commands: reset, help, quit"));
}
