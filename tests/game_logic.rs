/// Integration tests for game logic
///
/// These drive a seeded `Game` through whole rounds: crossing the board,
/// getting hit, losing, restarting and moving on to faster rounds.
use bug_crossing::board::{PLAYER_MIN_Y, PLAYER_START_X, PLAYER_START_Y, lane_index};
use bug_crossing::{Direction, EnemyKind, Game, GameEvent, GameState, Settings};

const DT: f32 = 1.0 / 60.0;

fn settings_with(roster: Vec<EnemyKind>, lives: u8) -> Settings {
    Settings {
        lives,
        roster,
        ..Settings::default()
    }
}

/// Ticks until `stop` says so or the tick budget runs out; returns every event seen
fn run_until(game: &mut Game, max_ticks: usize, stop: impl Fn(&[GameEvent]) -> bool) -> Vec<GameEvent> {
    let mut seen = Vec::new();
    for _ in 0..max_ticks {
        let events = game.update(DT);
        seen.extend_from_slice(&events);
        if stop(&seen) {
            break;
        }
    }
    seen
}

fn walk_to_top_lane(game: &mut Game) {
    for _ in 0..4 {
        assert_eq!(game.handle_input(Direction::Up), None);
    }
    assert_eq!(lane_index(game.player().y), Some(0));
}

#[test]
fn test_empty_board_crossing_wins() {
    let mut game = Game::with_seed(&settings_with(vec![], 3), 11);

    for _ in 0..4 {
        assert_eq!(game.handle_input(Direction::Up), None);
        game.update(DT);
    }
    assert_eq!(game.handle_input(Direction::Up), Some(GameEvent::Won));
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.player().y, PLAYER_MIN_Y);
}

#[test]
fn test_standing_in_a_lane_gets_hit() {
    let roster = vec![EnemyKind::VeryFast; 4];
    let mut game = Game::with_seed(&settings_with(roster, 3), 5);
    walk_to_top_lane(&mut game);

    let events = run_until(&mut game, 60 * 120, |seen| !seen.is_empty());
    assert_eq!(events, vec![GameEvent::Collision { lives_left: 2 }]);
    assert_eq!(game.player().collision_count, 1);
    assert_eq!((game.player().x, game.player().y), (PLAYER_START_X, PLAYER_START_Y));
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn test_start_row_is_safe() {
    let roster = vec![EnemyKind::VeryFast; 6];
    let mut game = Game::with_seed(&settings_with(roster, 3), 9);

    let events = run_until(&mut game, 60 * 30, |seen| !seen.is_empty());
    assert!(events.is_empty());
    assert_eq!(game.lives(), 3);
}

#[test]
fn test_losing_all_lives_ends_game() {
    let roster = vec![EnemyKind::VeryFast; 4];
    let mut game = Game::with_seed(&settings_with(roster, 2), 21);

    for _ in 0..2 {
        walk_to_top_lane(&mut game);
        run_until(&mut game, 60 * 120, |seen| !seen.is_empty());
    }

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.player().collision_count, 2);

    // Nothing moves once lost
    assert!(game.update(1.0).is_empty());
    assert_eq!(game.handle_input(Direction::Up), None);
    assert!(!game.next_round());
}

#[test]
fn test_restart_after_loss() {
    let roster = vec![EnemyKind::VeryFast; 4];
    let mut game = Game::with_seed(&settings_with(roster, 1), 3);
    walk_to_top_lane(&mut game);
    let events = run_until(&mut game, 60 * 120, |seen| seen.contains(&GameEvent::Lost));
    assert!(events.contains(&GameEvent::Lost));

    game.restart();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.lives(), 1);
    assert_eq!(game.player().collision_count, 0);
    assert_eq!(game.enemies().len(), 4);
}

#[test]
fn test_rounds_get_faster() {
    let mut game = Game::with_seed(&settings_with(vec![], 3), 1);

    for round in 1..=3u32 {
        assert_eq!(game.round(), round);
        for _ in 0..5 {
            game.handle_input(Direction::Up);
        }
        assert_eq!(game.state(), GameState::Won);
        assert!(game.next_round());
        assert_eq!(game.player().y, PLAYER_START_Y);
    }

    assert_eq!(game.round(), 4);
    assert_eq!(game.speed_multiplier(), 1.75);

    game.restart();
    assert_eq!(game.round(), 1);
    assert_eq!(game.speed_multiplier(), 1.0);
}

#[test]
fn test_enemies_stay_in_lanes_over_time() {
    let mut game = Game::with_seed(&Settings::default(), 77);
    for _ in 0..60 * 60 {
        game.update(DT);
        for enemy in game.enemies() {
            assert!(lane_index(enemy.y).is_some());
            assert!(enemy.x <= 505.0);
        }
    }
}

#[test]
fn test_same_seed_same_board() {
    let settings = Settings::default();
    let mut a = Game::with_seed(&settings, 1234);
    let mut b = Game::with_seed(&settings, 1234);
    for _ in 0..600 {
        a.update(DT);
        b.update(DT);
    }
    let positions = |g: &Game| g.enemies().iter().map(|e| (e.x, e.y)).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));
}
