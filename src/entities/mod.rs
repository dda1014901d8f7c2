mod enemy;
mod game_state;
mod player;
pub mod spawn;

// Re-export all public types
pub use enemy::{Enemy, EnemyKind};
pub use game_state::GameState;
pub use player::{Direction, Player};
