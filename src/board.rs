//! Board geometry, in pixels of the original 505-wide canvas.

/// Enemies past this x have left the board and get recycled.
pub const BOARD_WIDTH: f32 = 505.0;

/// Horizontal distance of one player step.
pub const COLUMN_WIDTH: i32 = 100;
/// Vertical distance of one player step, also the lane pitch.
pub const ROW_HEIGHT: i32 = 85;

pub const PLAYER_MIN_X: i32 = 0;
pub const PLAYER_MAX_X: i32 = 400;
/// The water row. Reaching it wins the round.
pub const PLAYER_MIN_Y: i32 = -45;
pub const PLAYER_MAX_Y: i32 = 380;

pub const PLAYER_START_X: i32 = 0;
pub const PLAYER_START_Y: i32 = PLAYER_MAX_Y;

/// Y of the top lane; the others follow at `ROW_HEIGHT` intervals.
pub const FIRST_LANE_Y: i32 = 40;
pub const LANE_COUNT: i32 = 3;

/// Enemies closer than this on the same lane hit the player.
pub const COLLISION_DISTANCE: f32 = 55.0;

/// Used when an enemy kind has no spawn points at all.
pub const DEFAULT_SPAWN_X: f32 = -100.0;

/// Number of board rows from the water row down to the start row.
pub const ROW_COUNT: i32 = (PLAYER_MAX_Y - PLAYER_MIN_Y) / ROW_HEIGHT + 1;

/// Y coordinate of lane `index` (0 is the top lane).
pub fn lane_y(index: i32) -> i32 {
    FIRST_LANE_Y + index * ROW_HEIGHT
}

/// Lane index for a y coordinate, if it lies on a lane.
pub fn lane_index(y: i32) -> Option<i32> {
    let offset = y - FIRST_LANE_Y;
    if offset < 0 || offset % ROW_HEIGHT != 0 {
        return None;
    }
    let index = offset / ROW_HEIGHT;
    (index < LANE_COUNT).then_some(index)
}

/// Board row for a y coordinate: 0 is water, `ROW_COUNT - 1` is the start row.
pub fn row_of(y: i32) -> i32 {
    (y - PLAYER_MIN_Y).div_euclid(ROW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes() {
        assert_eq!(lane_y(0), 40);
        assert_eq!(lane_y(1), 125);
        assert_eq!(lane_y(2), 210);
        assert_eq!(lane_index(125), Some(1));
        assert_eq!(lane_index(295), None);
        assert_eq!(lane_index(-45), None);
        assert_eq!(lane_index(41), None);
    }

    #[test]
    fn test_rows() {
        assert_eq!(ROW_COUNT, 6);
        assert_eq!(row_of(PLAYER_MIN_Y), 0);
        assert_eq!(row_of(40), 1);
        assert_eq!(row_of(210), 3);
        assert_eq!(row_of(PLAYER_MAX_Y), 5);
    }
}
