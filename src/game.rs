use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::board::COLLISION_DISTANCE;
use crate::config::Settings;
use crate::entities::{Direction, Enemy, EnemyKind, GameState, Player};

/// Something that happened during a tick or a move, for sound and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy hit the player, who lost a life and went back to the start
    Collision { lives_left: u8 },
    Won,
    Lost,
}

/// Core game state: player, enemies and the playing/won/lost machine.
pub struct Game {
    state: GameState,
    lives: u8,
    max_lives: u8,
    speed_multiplier: f32,
    speed_step: f32,
    round: u32,
    player: Player,
    enemies: Vec<Enemy>,
    roster: Vec<EnemyKind>,
    rng: Pcg32,
}

impl Game {
    /// New game seeded from the settings, or randomly when no seed is set
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Game initialized with seed: {}", seed);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        let mut game = Self {
            state: GameState::Playing,
            lives: settings.lives,
            max_lives: settings.lives,
            speed_multiplier: 1.0,
            speed_step: settings.speed_step,
            round: 1,
            player: Player::new(),
            enemies: Vec::new(),
            roster: settings.roster.clone(),
            rng: Pcg32::seed_from_u64(seed),
        };
        game.spawn_enemies();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Advances the board by `dt` seconds. Does nothing once the round is over.
    ///
    /// Long ticks are split so no enemy moves `COLLISION_DISTANCE` or more
    /// between collision checks.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        let steps = self.sub_steps(dt);
        let step_dt = dt / steps as f32;

        for _ in 0..steps {
            for enemy in &mut self.enemies {
                enemy.update(step_dt, self.speed_multiplier, &mut self.rng);
            }

            self.check_collisions(&mut events);
            if self.state != GameState::Playing {
                break;
            }
        }

        events
    }

    /// Number of sub-steps needed for `dt` at the current enemy speeds
    fn sub_steps(&self, dt: f32) -> u32 {
        let fastest = self
            .enemies
            .iter()
            .map(|e| e.speed * self.speed_multiplier * dt)
            .fold(0.0f32, f32::max);
        (fastest / COLLISION_DISTANCE).floor() as u32 + 1
    }

    fn check_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let hit = self
            .enemies
            .iter()
            .find(|e| e.collides_with(&self.player))
            .map(|e| e.kind);

        let Some(kind) = hit else {
            return;
        };

        log::debug!(
            "{} hit player at ({}, {})",
            kind.get_name(),
            self.player.x,
            self.player.y
        );
        self.player.record_collision();
        self.player.respawn();
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::Collision {
            lives_left: self.lives,
        });

        if self.lives == 0 {
            self.state = GameState::Lost;
            log::info!(
                "Game lost in round {} after {} collisions",
                self.round,
                self.player.collision_count
            );
            events.push(GameEvent::Lost);
        }
    }

    /// Moves the player one cell. Ignored unless playing.
    pub fn handle_input(&mut self, direction: Direction) -> Option<GameEvent> {
        if self.state != GameState::Playing {
            return None;
        }

        if self.player.handle_input(direction) {
            self.state = GameState::Won;
            log::info!(
                "Round {} won with {} lives left",
                self.round,
                self.lives
            );
            return Some(GameEvent::Won);
        }
        None
    }

    /// Starts over from round one with full lives
    pub fn restart(&mut self) {
        self.state = GameState::Playing;
        self.lives = self.max_lives;
        self.speed_multiplier = 1.0;
        self.round = 1;
        self.player.reset();
        self.spawn_enemies();
        log::info!("Game restarted");
    }

    /// Continues after a win with faster enemies. Lives carry over.
    /// Returns false when there is no won round to continue from.
    pub fn next_round(&mut self) -> bool {
        if self.state != GameState::Won {
            return false;
        }

        self.state = GameState::Playing;
        self.round += 1;
        self.speed_multiplier += self.speed_step;
        self.player.respawn();
        self.spawn_enemies();
        log::info!(
            "Round {} started, speed x{:.2}",
            self.round,
            self.speed_multiplier
        );
        true
    }

    fn spawn_enemies(&mut self) {
        let rng = &mut self.rng;
        self.enemies = self
            .roster
            .iter()
            .map(|&kind| Enemy::new(kind, &mut *rng))
            .collect();
    }
}
