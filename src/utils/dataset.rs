//! Synthetic dataset generation for demo charts.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters for a synthetic dataset draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSpec {
    /// Number of values to draw
    pub size: usize,
    /// Lower bound parameter (see [`DatasetSpec::generate`] for the exact
    /// role it plays)
    pub min: f64,
    /// Upper bound parameter
    pub max: f64,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            size: 10,
            min: 0.0,
            max: 10.0,
        }
    }
}

impl DatasetSpec {
    /// Draw `size` pseudo-random integers from the thread-local RNG.
    ///
    /// Each value is `floor(r * |max - min| - min)` with `r` uniform in
    /// `[0, 1)`, independent per position; duplicates are allowed and no
    /// ordering is applied. Note that `min` is subtracted after scaling, so
    /// the values land in `[-min, |max - min| - min)` — with `min = 0` that
    /// is the conventional `[0, max)`, but a non-zero `min` shifts the
    /// interval rather than raising its floor. Demo renderers depend on this
    /// arithmetic as-is.
    ///
    /// Calls are independent; no seed is shared between them. Non-finite
    /// `min`/`max` produce unspecified values.
    pub fn generate(&self) -> Vec<i64> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Same draw over a caller-supplied RNG, for deterministic sampling.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let range = (self.max - self.min).abs();
        (0..self.size)
            .map(|_| (rng.gen::<f64>() * range - self.min).floor() as i64)
            .collect()
    }
}

/// Draw a synthetic dataset with explicit parameters.
///
/// Shorthand for [`DatasetSpec::generate`]; the defaults are
/// `DatasetSpec { size: 10, min: 0.0, max: 10.0 }`.
pub fn generate_dataset(size: usize, min: f64, max: f64) -> Vec<i64> {
    DatasetSpec { size, min, max }.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_matches_size() {
        for size in [0, 1, 5, 100] {
            assert_eq!(generate_dataset(size, 0.0, 10.0).len(), size);
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        assert!(generate_dataset(0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn test_default_spec() {
        let spec = DatasetSpec::default();
        assert_eq!(spec.size, 10);
        assert_eq!(spec.min, 0.0);
        assert_eq!(spec.max, 10.0);
        assert_eq!(spec.generate().len(), 10);
    }

    #[test]
    fn test_zero_min_values_stay_in_range() {
        // With min = 0 the offset is inert and values fall in [0, max).
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DatasetSpec {
            size: 1000,
            min: 0.0,
            max: 10.0,
        };
        for value in spec.generate_with(&mut rng) {
            assert!((0..10).contains(&value), "value {} out of [0, 10)", value);
        }
    }

    #[test]
    fn test_nonzero_min_shifts_the_interval() {
        // floor(r * 7 - 3) lands in [-3, 4), not the naive [3, 10).
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DatasetSpec {
            size: 1000,
            min: 3.0,
            max: 10.0,
        };
        for value in spec.generate_with(&mut rng) {
            assert!((-3..4).contains(&value), "value {} out of [-3, 4)", value);
        }
    }

    #[test]
    fn test_swapped_bounds_use_absolute_range() {
        // |max - min| keeps the range positive when the bounds are swapped.
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DatasetSpec {
            size: 1000,
            min: 10.0,
            max: 0.0,
        };
        for value in spec.generate_with(&mut rng) {
            assert!((-10..0).contains(&value), "value {} out of [-10, 0)", value);
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let spec = DatasetSpec::default();
        let a = spec.generate_with(&mut StdRng::seed_from_u64(42));
        let b = spec.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_range_yields_constant_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DatasetSpec {
            size: 20,
            min: 5.0,
            max: 5.0,
        };
        // range = 0, so every value is floor(-5) = -5.
        assert_eq!(spec.generate_with(&mut rng), vec![-5; 20]);
    }
}
