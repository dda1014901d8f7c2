use crate::board::{
    COLUMN_WIDTH, PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_MIN_X, PLAYER_MIN_Y, PLAYER_START_X,
    PLAYER_START_Y, ROW_HEIGHT, lane_index,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Total hits taken since the last reset
    pub collision_count: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            collision_count: 0,
        }
    }

    /// Moves one cell in `direction`, clamped to the board.
    /// Returns true when the move lands on the water row.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.x += COLUMN_WIDTH,
            Direction::Left => self.x -= COLUMN_WIDTH,
            Direction::Up => self.y -= ROW_HEIGHT,
            Direction::Down => self.y += ROW_HEIGHT,
        }

        self.x = self.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.y = self.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);

        self.has_reached_water()
    }

    pub fn has_reached_water(&self) -> bool {
        self.y == PLAYER_MIN_Y
    }

    /// Lane index the player stands on, None on grass or water
    pub fn lane(&self) -> Option<i32> {
        lane_index(self.y)
    }

    pub fn record_collision(&mut self) {
        self.collision_count += 1;
    }

    /// Back to the start cell; the collision count survives
    pub fn respawn(&mut self) {
        self.x = PLAYER_START_X;
        self.y = PLAYER_START_Y;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec!["  o  ", " /|\\ ", " / \\ "]
    }

    pub fn get_width(&self) -> u16 {
        5
    }

    pub fn get_height(&self) -> u16 {
        3
    }
}
