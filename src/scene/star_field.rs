use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SceneError;
use crate::options::StarFieldOptions;

/// Backdrop star positions, uniformly scattered in a box in front of the
/// starting camera.
#[derive(Debug, Clone)]
pub struct StarField {
    positions: Vec<[f32; 3]>,
}

impl StarField {
    /// Scatter stars according to `options`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidStarField`] if the spread or depth is
    /// negative or not finite.
    pub fn generate(options: &StarFieldOptions) -> Result<Self, SceneError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(options.spread) || !valid(options.depth) {
            return Err(SceneError::InvalidStarField {
                spread: options.spread,
                depth: options.depth,
            });
        }

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let half = options.spread * 0.5;
        let positions = (0..options.count)
            .map(|_| {
                [
                    rng.random_range(-half..=half),
                    rng.random_range(-half..=half),
                    rng.random_range(-options.depth..=0.0),
                ]
            })
            .collect();

        Ok(Self { positions })
    }

    /// Star positions as GPU-ready triples.
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Number of stars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field has no stars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(count: usize, seed: Option<u64>) -> StarFieldOptions {
        StarFieldOptions {
            count,
            spread: 8000.0,
            depth: 20_000.0,
            seed,
        }
    }

    #[test]
    fn stars_stay_inside_the_volume() {
        let field = StarField::generate(&options(2000, Some(1))).unwrap();
        assert_eq!(field.len(), 2000);
        for [x, y, z] in field.positions() {
            assert!((-4000.0..=4000.0).contains(x));
            assert!((-4000.0..=4000.0).contains(y));
            assert!((-20_000.0..=0.0).contains(z));
        }
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let a = StarField::generate(&options(100, Some(42))).unwrap();
        let b = StarField::generate(&options(100, Some(42))).unwrap();
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn zero_count_is_empty() {
        let field = StarField::generate(&options(0, None)).unwrap();
        assert!(field.is_empty());
    }

    #[test]
    fn negative_depth_is_rejected() {
        let mut opts = options(10, None);
        opts.depth = -1.0;
        assert!(matches!(
            StarField::generate(&opts),
            Err(SceneError::InvalidStarField { .. })
        ));
    }
}
