#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Player reached the water
    Won,
    /// Out of lives
    Lost,
}
