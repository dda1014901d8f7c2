use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::spawn::{pick_lane, pick_spawn_point, roll_speed};
use crate::board::{BOARD_WIDTH, COLLISION_DISTANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Bug,
    Fast,
    VeryFast,
}

impl EnemyKind {
    /// Speed range in pixels per second, before the round multiplier
    pub fn speed_range(&self) -> Range<f32> {
        match self {
            EnemyKind::Bug => 70.0..220.0,
            EnemyKind::Fast => 180.0..300.0,
            EnemyKind::VeryFast => 300.0..420.0,
        }
    }

    /// Off-board x coordinates this kind re-enters from
    pub fn spawn_points(&self) -> &'static [f32] {
        match self {
            EnemyKind::Bug => &[-100.0],
            EnemyKind::Fast => &[-150.0, -250.0],
            EnemyKind::VeryFast => &[-200.0, -350.0, -500.0],
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            EnemyKind::Bug => "Bug",
            EnemyKind::Fast => "Fast Bug",
            EnemyKind::VeryFast => "Very Fast Bug",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    /// Always one of the lane y values
    pub y: i32,
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Places a new enemy of `kind` at one of its spawn points in a random lane
    pub fn new<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Self {
        Self {
            x: pick_spawn_point(rng, kind.spawn_points()),
            y: pick_lane(rng),
            speed: roll_speed(rng, kind.speed_range()),
            kind,
        }
    }

    /// Advances the enemy by `dt` seconds. Once it leaves the right edge
    /// it goes back behind the left edge on a new lane with a new speed.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, speed_multiplier: f32, rng: &mut R) {
        self.x += self.speed * speed_multiplier * dt;

        if self.x > BOARD_WIDTH {
            self.respawn(rng);
        }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x = pick_spawn_point(rng, self.kind.spawn_points());
        self.y = pick_lane(rng);
        self.speed = roll_speed(rng, self.kind.speed_range());
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        self.y == player.y && (self.x - player.x as f32).abs() < COLLISION_DISTANCE
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        match self.kind {
            EnemyKind::Bug => vec![" ,__, ", "(o==o)", " '  ' "],
            EnemyKind::Fast => vec![" ,__,>", "=(oo)>", " '  '>"],
            EnemyKind::VeryFast => vec!["-,__,>", "=(@@)>", "-'  '>"],
        }
    }

    pub fn get_width(&self) -> u16 {
        6
    }

    pub fn get_height(&self) -> u16 {
        3
    }
}
