//! Dataset generation for the benchmark runs.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// `n` records spaced 100 apart, in index order.
pub fn records(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| i * 100).collect()
}

/// Same records in a seeded random order, so runs are repeatable.
pub fn shuffled_records(n: usize, seed: u64) -> Vec<i64> {
    let mut records = records(n);
    let mut rng = SmallRng::seed_from_u64(seed);
    records.shuffle(&mut rng);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_spacing() {
        assert_eq!(records(4), vec![0, 100, 200, 300]);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = shuffled_records(1000, 7);
        let b = shuffled_records(1000, 7);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, records(1000));
    }
}
