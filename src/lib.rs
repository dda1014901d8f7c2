// Library exports for testing
pub use config::Settings;
pub use entities::{Direction, Enemy, EnemyKind, GameState, Player};
pub use game::{Game, GameEvent};

pub mod app;
pub mod audio;
pub mod board;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
