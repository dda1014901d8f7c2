use std::ops::Range;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::board::{DEFAULT_SPAWN_X, LANE_COUNT, lane_y};

/// Picks one of the lanes uniformly
pub fn pick_lane<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    lane_y(rng.random_range(0..LANE_COUNT))
}

/// Picks an off-board x coordinate from the given set
pub fn pick_spawn_point<R: Rng + ?Sized>(rng: &mut R, points: &[f32]) -> f32 {
    points.choose(rng).copied().unwrap_or(DEFAULT_SPAWN_X)
}

/// Rolls a speed in pixels per second from a half-open range
pub fn roll_speed<R: Rng + ?Sized>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.is_empty() {
        return range.start;
    }
    rng.random_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::lane_index;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_lane_hits_every_lane() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let y = pick_lane(&mut rng);
            let index = lane_index(y).expect("picked y must be a lane");
            seen[index as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_pick_spawn_point_empty_set() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(pick_spawn_point(&mut rng, &[]), DEFAULT_SPAWN_X);
    }

    #[test]
    fn test_roll_speed_empty_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(roll_speed(&mut rng, 90.0..90.0), 90.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_spawn_point_comes_from_set(
                seed in any::<u64>(),
                points in prop::collection::vec(-600.0f32..-60.0, 1..5)
            ) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let x = pick_spawn_point(&mut rng, &points);
                prop_assert!(points.contains(&x));
            }

            #[test]
            fn test_speed_in_range(seed in any::<u64>(), start in 0.0f32..300.0, width in 1.0f32..200.0) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let speed = roll_speed(&mut rng, start..start + width);
                prop_assert!(speed >= start && speed < start + width);
            }
        }
    }
}
