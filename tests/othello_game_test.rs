//! Tests for the game runner, builder and random play properties.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use strictly_othello::{
    Color, FieldState, FirstMoveFound, GameBuilder, GameState, InvariantSet, Move,
    OthelloInvariants, Player, PlayerBuilder, PlayerState, RandomMove, SetupError, Strategy,
    Turn, OthelloError, execute_move, random_move,
};
use strum::IntoEnumIterator;

fn builder(black: Arc<dyn Strategy>, white: Arc<dyn Strategy>) -> GameBuilder {
    GameBuilder::new()
        .add_player(PlayerBuilder::new().with_name("Alice"), black)
        .unwrap()
        .add_player(
            PlayerBuilder::new().with_name("Bob").with_color(Color::White),
            white,
        )
        .unwrap()
}

#[derive(Debug)]
struct Sleeper;

impl Strategy for Sleeper {
    fn name(&self) -> &str {
        "sleeper"
    }

    fn compute_next_move(&self, player: &Player, _state: &GameState) -> Option<Move> {
        std::thread::sleep(Duration::from_millis(500));
        Some(Move::skip(player.color()))
    }
}

#[test]
fn test_first_move_strategies_play_to_end() {
    let mut game = builder(Arc::new(FirstMoveFound), Arc::new(FirstMoveFound))
        .with_board_size(6)
        .build(7)
        .unwrap();
    assert_eq!(game.id(), 7);

    let outcome = game.play_to_end().unwrap();
    let state = game.state();
    assert_eq!(state.outcome(), Some(outcome));
    assert!(state.players().iter().all(|p| state.player_state(p.name()).unwrap().is_final()));
    assert_eq!(state.consecutive_skips(), 2);
    assert!(OthelloInvariants::check_all(state).is_ok());
}

#[test]
fn test_first_move_games_are_deterministic() {
    let play = || {
        let mut game = builder(Arc::new(FirstMoveFound), Arc::new(FirstMoveFound))
            .with_board_size(6)
            .build(1)
            .unwrap();
        game.play_to_end().unwrap();
        game.history().to_vec()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_slow_strategy_gets_random_fallback() {
    let mut game = builder(Arc::new(Sleeper), Arc::new(FirstMoveFound))
        .with_board_size(4)
        .with_max_computation_time(Duration::from_millis(20))
        .with_fallback_seed(Some(5))
        .build(1)
        .unwrap();

    // The sleeper would skip illegally; the fallback places a token instead.
    let turn = game.make_move().unwrap();
    match turn {
        Turn::Played(mov) => assert!(!mov.is_skip()),
        other => panic!("expected a played move, got {:?}", other),
    }
    assert_eq!(game.state().board().count_tokens(Color::Black), 4);
}

#[test]
fn test_illegal_strategy_move_resigns_player() {
    #[derive(Debug)]
    struct AlwaysSkip;

    impl Strategy for AlwaysSkip {
        fn name(&self) -> &str {
            "always-skip"
        }

        fn compute_next_move(&self, player: &Player, _state: &GameState) -> Option<Move> {
            Some(Move::skip(player.color()))
        }
    }

    let mut game = builder(Arc::new(AlwaysSkip), Arc::new(FirstMoveFound))
        .with_board_size(4)
        .build(1)
        .unwrap();
    let turn = game.make_move().unwrap();
    assert!(matches!(
        turn,
        Turn::Resigned {
            reason: OthelloError::RuleViolation(_),
            ..
        }
    ));
    assert_eq!(game.state().state_of(Color::Black), PlayerState::Resigned);
    assert_eq!(game.state().state_of(Color::White), PlayerState::Won);
    assert!(game.is_finished());
}

#[test]
fn test_builder_requires_both_players() {
    let result = GameBuilder::new()
        .add_player(
            PlayerBuilder::new().with_name("Bob").with_color(Color::White),
            Arc::new(FirstMoveFound),
        )
        .unwrap()
        .build(1);
    assert_eq!(
        result.unwrap_err(),
        OthelloError::Configuration(SetupError::MissingPlayer(Color::Black))
    );
}

#[test]
fn test_builder_rejects_blank_names() {
    let result = GameBuilder::new()
        .add_player(PlayerBuilder::new().with_name("  "), Arc::new(FirstMoveFound))
        .unwrap()
        .add_player(
            PlayerBuilder::new().with_name("Bob").with_color(Color::White),
            Arc::new(FirstMoveFound),
        )
        .unwrap()
        .build(1);
    assert_eq!(
        result.unwrap_err(),
        OthelloError::Configuration(SetupError::BlankName)
    );
}

#[test]
fn test_seeded_random_games_are_reproducible() {
    let play = |seed: u64| {
        let mut game = builder(
            Arc::new(RandomMove::seeded(seed)),
            Arc::new(RandomMove::seeded(seed + 1)),
        )
        .with_board_size(6)
        .build(1)
        .unwrap();
        game.play_to_end().unwrap();
        game.history().to_vec()
    };
    assert_eq!(play(11), play(11));
}

/// Random legal games keep the partition, never empty a field again and
/// always end after two consecutive skips with a majority decision.
#[test]
fn test_random_games_preserve_invariants() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = [4, 6, 8][(seed % 3) as usize];
        let mut state = GameState::with_size(
            size,
            Player::new("B".to_string(), Color::Black),
            Player::new("W".to_string(), Color::White),
        )
        .unwrap();

        let mut turns = 0;
        while !state.is_finished() {
            let before = state.deep_copy();
            let player = state.current_player().clone();
            let mov = random_move(&player, &state, &mut rng);
            execute_move(&mut state, &player, &mov).unwrap();

            let total: usize = FieldState::iter().map(|s| state.board().count_being(s)).sum();
            assert_eq!(total, size * size);
            for position in before.board().positions() {
                if before.board().state_at(position) != Some(FieldState::Empty) {
                    assert_ne!(state.board().state_at(position), Some(FieldState::Empty));
                }
            }
            assert!(OthelloInvariants::check_all(&state).is_ok());

            turns += 1;
            assert!(turns <= 2 * size * size, "seed {} did not terminate", seed);
        }

        let score = state.score();
        let expected = strictly_othello::decide_outcome(score);
        assert_eq!(state.outcome(), Some(expected), "seed {}", seed);
        assert_eq!(state.consecutive_skips(), 2);
    }
}
