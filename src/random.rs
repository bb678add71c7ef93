use rand::Rng;

use crate::point::Point;
use crate::vec2f::Vec2f;

/// Convenience draws on top of any random number generator.
///
/// Generators are passed in explicitly and are not synchronized. Use one generator per thread.
///
/// Both `percentage` helpers return true when the draw lands *above* the threshold, so a larger
/// percentage means a smaller chance of `true`.
pub trait RandomExt: Rng {
    /// Draws from `1..100` and checks that the draw is greater than `percentage`.
    fn percentage(&mut self, percentage: i32) -> bool {
        self.random_range(1..100) > percentage
    }

    /// Draws from `[0, 1)` and checks that the draw is greater than `percentage`.
    fn percentage_f32(&mut self, percentage: f32) -> bool {
        self.random::<f32>() > percentage
    }

    /// Random vector with both components drawn independently from `min..max`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    #[allow(clippy::cast_precision_loss)]
    fn next_vector(&mut self, min: i32, max: i32) -> Vec2f {
        let point = self.next_point(min, max);
        Vec2f(point.x as f32, point.y as f32)
    }

    /// Random point with both components drawn independently from `min..max`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    fn next_point(&mut self, min: i32, max: i32) -> Point {
        let x = self.random_range(min..max);
        let y = self.random_range(min..max);
        Point::new(x, y)
    }
}

impl<R: Rng + ?Sized> RandomExt for R {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const DRAWS: usize = 10_000;

    #[test]
    fn next_vector_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..DRAWS {
            let v = rng.next_vector(-5, 5);
            assert!((-5.0..5.0).contains(&v.0), "x out of bounds: {v}");
            assert!((-5.0..5.0).contains(&v.1), "y out of bounds: {v}");
            assert_eq!(v.0.fract(), 0.0);
            assert_eq!(v.1.fract(), 0.0);
        }
    }

    #[test]
    fn next_point_draws_axes_independently() {
        let mut rng = StdRng::seed_from_u64(7);
        let differing = (0..DRAWS)
            .map(|_| rng.next_point(0, 1000))
            .filter(|p| p.x != p.y)
            .count();
        assert!(differing > DRAWS / 2);
    }

    #[test]
    fn single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.next_point(3, 4), Point::splat(3));
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        let _ = rng.next_vector(4, 4);
    }

    #[test]
    fn percentage_extremes() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..DRAWS {
            // Draws are 1..=99.
            assert!(rng.percentage(0));
            assert!(!rng.percentage(99));
            assert!(!rng.percentage(100));
            assert!(rng.percentage_f32(-0.1));
            assert!(!rng.percentage_f32(1.0));
        }
    }

    #[test]
    fn percentage_is_inverted() {
        let mut rng = StdRng::seed_from_u64(1234);
        let hits = (0..DRAWS).filter(|_| rng.percentage(90)).count();
        // Roughly 9 in 99 draws exceed 90.
        assert!(hits < DRAWS / 5, "hits: {hits}");

        let hits = (0..DRAWS).filter(|_| rng.percentage_f32(0.9)).count();
        assert!(hits < DRAWS / 5, "hits: {hits}");
    }
}
