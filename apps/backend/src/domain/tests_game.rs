//! Scenario tests for the game state machine.

use time::OffsetDateTime;

use crate::domain::game::{MSG_ALREADY_COMPLETED, MSG_CORRECT, MSG_TOO_HIGH, MSG_TOO_LOW};
use crate::domain::{FixedTarget, Game, GameId, GameStatus};

fn game_with_target(target: i32, max_attempts: u32) -> Game {
    Game::new(GameId::new(), 1, 100, max_attempts, &FixedTarget(target))
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[test]
fn new_game_starts_in_progress() {
    let game = game_with_target(42, 10);

    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_completed());
    assert_eq!(game.target_number(), 42);
    assert_eq!(game.max_attempts(), 10);
    assert_eq!(game.remaining_attempts(), 10);
    assert!(game.guesses().is_empty());
    assert_eq!(game.range_description(), "The number is between 1 and 100");
}

#[test]
fn low_and_high_hints() {
    let mut game = game_with_target(42, 10);

    let low = game.submit_guess(10, now());
    assert_eq!(low.message, MSG_TOO_LOW);
    assert!(!low.correct);
    assert!(!low.game_over);
    assert_eq!(low.remaining_attempts, 9);

    let high = game.submit_guess(90, now());
    assert_eq!(high.message, MSG_TOO_HIGH);
    assert!(!high.correct);
    assert!(!high.game_over);
    assert_eq!(high.remaining_attempts, 8);

    assert_eq!(game.status(), GameStatus::InProgress);
    let values: Vec<i32> = game.guesses().iter().map(|g| g.value).collect();
    assert_eq!(values, vec![10, 90]);
}

#[test]
fn correct_guess_wins() {
    let mut game = Game::new(GameId::new(), 1, 1, 5, &FixedTarget(1));

    let outcome = game.submit_guess(1, now());

    assert_eq!(outcome.message, MSG_CORRECT);
    assert!(outcome.correct);
    assert!(outcome.game_over);
    assert_eq!(outcome.remaining_attempts, 4);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.guesses().len(), 1);
}

#[test]
fn correct_guess_on_last_attempt_wins() {
    let mut game = game_with_target(7, 2);
    game.submit_guess(3, now());

    let outcome = game.submit_guess(7, now());

    assert!(outcome.correct);
    assert!(outcome.game_over);
    assert_eq!(outcome.remaining_attempts, 0);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn single_attempt_miss_loses_and_reveals_target() {
    let mut game = game_with_target(42, 1);

    let outcome = game.submit_guess(41, now());

    assert!(!outcome.correct);
    assert!(outcome.game_over);
    assert_eq!(outcome.remaining_attempts, 0);
    assert!(outcome.message.contains("42"));
    assert_eq!(outcome.message, "Game over! The number was 42");
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn exhausting_attempts_loses() {
    let mut game = game_with_target(50, 3);

    for value in [1, 2] {
        let outcome = game.submit_guess(value, now());
        assert!(!outcome.game_over);
    }
    let last = game.submit_guess(3, now());

    assert!(last.game_over);
    assert!(!last.correct);
    assert!(last.message.contains("50"));
    assert_eq!(game.guesses().len(), 3);
}

#[test]
fn guesses_after_completion_are_no_ops() {
    let mut game = game_with_target(42, 3);
    game.submit_guess(42, now());
    let remaining = game.remaining_attempts();
    let count = game.guesses().len();

    for value in [1, 42, 100] {
        let outcome = game.submit_guess(value, now());
        assert_eq!(outcome.message, MSG_ALREADY_COMPLETED);
        assert!(!outcome.correct);
        assert!(outcome.game_over);
        assert_eq!(outcome.remaining_attempts, remaining);
    }

    assert_eq!(game.remaining_attempts(), remaining);
    assert_eq!(game.guesses().len(), count);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn lost_game_stays_lost() {
    let mut game = game_with_target(42, 1);
    game.submit_guess(1, now());

    let outcome = game.submit_guess(42, now());

    assert_eq!(outcome.message, MSG_ALREADY_COMPLETED);
    assert!(!outcome.correct);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.remaining_attempts(), 0);
}

#[test]
fn zero_attempt_budget_ends_on_first_guess_without_underflow() {
    let mut game = game_with_target(42, 0);

    let outcome = game.submit_guess(1, now());

    assert!(outcome.game_over);
    assert_eq!(outcome.remaining_attempts, 0);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn guess_timestamps_are_recorded_in_order() {
    let mut game = game_with_target(42, 5);
    let first = now();
    let second = first + time::Duration::seconds(1);

    game.submit_guess(1, first);
    game.submit_guess(2, second);

    let stamps: Vec<OffsetDateTime> = game.guesses().iter().map(|g| g.at).collect();
    assert_eq!(stamps, vec![first, second]);
}

#[test]
fn game_id_round_trips_through_display() {
    let id = GameId::new();
    let parsed: GameId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<GameId>().is_err());
}
