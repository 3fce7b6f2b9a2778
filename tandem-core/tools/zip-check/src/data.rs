//! Seeded random input columns.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CheckConfig;

/// Three equally long columns of small random integers.
///
/// Checks clone the columns they mutate; the originals stay untouched so every
/// check starts from the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// First column.
    pub v1: Vec<i32>,
    /// Second column.
    pub v2: Vec<i32>,
    /// Third column, used by the three-sequence checks.
    pub v3: Vec<i32>,
}

impl Columns {
    /// Draws `config.size` rows uniformly from `1..=config.modulus`, one row
    /// at a time.
    pub fn generate(config: &CheckConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let dist = Uniform::new_inclusive(1, config.modulus);

        let mut columns = Self {
            v1: Vec::with_capacity(config.size),
            v2: Vec::with_capacity(config.size),
            v3: Vec::with_capacity(config.size),
        };
        for _ in 0..config.size {
            columns.v1.push(dist.sample(&mut rng));
            columns.v2.push(dist.sample(&mut rng));
            columns.v3.push(dist.sample(&mut rng));
        }
        log::debug!(
            "generated {} rows in 1..={} from seed {}",
            config.size,
            config.modulus,
            config.seed
        );
        columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.v1.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.v1.is_empty()
    }

    /// The first two columns as pairs.
    pub fn pairs(&self) -> Vec<(i32, i32)> {
        pair_up(&self.v1, &self.v2)
    }

    /// All three columns as `((v1, v2), v3)`.
    pub fn triples(&self) -> Vec<((i32, i32), i32)> {
        self.pairs().into_iter().zip(self.v3.iter().copied()).collect()
    }
}

/// Materializes two columns as pairs.
pub fn pair_up(a: &[i32], b: &[i32]) -> Vec<(i32, i32)> {
    a.iter().copied().zip(b.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let config = CheckConfig::new().with_size(50).with_seed(7);
        assert_eq!(Columns::generate(&config), Columns::generate(&config));
        assert_ne!(
            Columns::generate(&config),
            Columns::generate(&config.clone().with_seed(8))
        );
    }

    #[test]
    fn test_values_in_range() {
        let config = CheckConfig::new().with_size(500).with_modulus(4);
        let columns = Columns::generate(&config);
        assert_eq!(columns.len(), 500);
        for v in [&columns.v1, &columns.v2, &columns.v3] {
            assert!(v.iter().all(|x| (1..=4).contains(x)));
        }
    }

    #[test]
    fn test_materialized_views() {
        let columns = Columns {
            v1: vec![1, 2],
            v2: vec![3, 4],
            v3: vec![5, 6],
        };
        assert_eq!(columns.pairs(), vec![(1, 3), (2, 4)]);
        assert_eq!(columns.triples(), vec![((1, 3), 5), ((2, 4), 6)]);
    }
}
