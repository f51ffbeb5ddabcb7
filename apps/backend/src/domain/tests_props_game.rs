//! Property tests for the game state machine (pure domain).
//!
//! Contract:
//! - The target always lies in `[min, max]`
//! - Each non-terminal guess costs exactly one attempt
//! - Exactly one terminal transition happens per game
//! - After it, no guess changes any observable state

use proptest::prelude::*;
use time::OffsetDateTime;

use crate::domain::game::MSG_ALREADY_COMPLETED;
use crate::domain::test_prelude;
use crate::domain::{Game, GameId, GameStatus, RandomTarget};

fn range_strategy() -> impl Strategy<Value = (i32, i32)> {
    (-1_000i32..1_000, 0i32..500).prop_map(|(min, span)| (min, min + span))
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the drawn target is inside the requested range.
    #[test]
    fn prop_target_within_range(
        (min, max) in range_strategy(),
        seed in any::<u64>(),
    ) {
        let source = RandomTarget::seeded(seed);
        let game = Game::new(GameId::new(), min, max, 10, &source);

        prop_assert!(game.target_number() >= min);
        prop_assert!(game.target_number() <= max);
    }

    /// Property: remaining attempts fall by one per accepted guess and stop at
    /// the terminal transition; later guesses change nothing.
    #[test]
    fn prop_attempts_strictly_decrease_until_terminal(
        (min, max) in range_strategy(),
        seed in any::<u64>(),
        max_attempts in 1u32..20,
        guesses in prop::collection::vec(-1_100i32..1_600, 1..40),
    ) {
        let source = RandomTarget::seeded(seed);
        let mut game = Game::new(GameId::new(), min, max, max_attempts, &source);
        let mut terminal_transitions = 0;

        for value in guesses {
            let before_remaining = game.remaining_attempts();
            let before_count = game.guesses().len();
            let was_completed = game.is_completed();

            let outcome = game.submit_guess(value, OffsetDateTime::now_utc());

            if was_completed {
                prop_assert_eq!(outcome.message.as_str(), MSG_ALREADY_COMPLETED);
                prop_assert!(!outcome.correct);
                prop_assert!(outcome.game_over);
                prop_assert_eq!(game.remaining_attempts(), before_remaining);
                prop_assert_eq!(game.guesses().len(), before_count);
                prop_assert!(game.is_completed());
            } else {
                prop_assert_eq!(game.remaining_attempts(), before_remaining - 1);
                prop_assert_eq!(game.guesses().len(), before_count + 1);
                prop_assert_eq!(outcome.remaining_attempts, game.remaining_attempts());
                if game.is_completed() {
                    terminal_transitions += 1;
                }
            }

            prop_assert_eq!(outcome.game_over, game.is_completed());
        }

        prop_assert!(terminal_transitions <= 1);
        prop_assert!(game.guesses().len() as u32 <= max_attempts);
    }

    /// Property: N wrong guesses with a budget of N always lose and reveal
    /// the target.
    #[test]
    fn prop_all_wrong_guesses_lose(
        (min, max) in range_strategy(),
        seed in any::<u64>(),
        max_attempts in 1u32..15,
    ) {
        let source = RandomTarget::seeded(seed);
        let mut game = Game::new(GameId::new(), min, max, max_attempts, &source);
        let wrong = game.target_number().wrapping_add(1);

        let mut last = None;
        for _ in 0..max_attempts {
            last = Some(game.submit_guess(wrong, OffsetDateTime::now_utc()));
        }
        let last = last.expect("at least one guess");

        prop_assert!(last.game_over);
        prop_assert!(!last.correct);
        prop_assert_eq!(last.remaining_attempts, 0);
        prop_assert!(last.message.contains(&game.target_number().to_string()));
        prop_assert_eq!(game.status(), GameStatus::Lost);
    }
}
