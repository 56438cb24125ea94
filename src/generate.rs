//! Random cable lengths and random sorted lists.
//!
//! Callers pass the RNG, so the CLI can honour `--seed` and tests can use a
//! seeded [`StdRng`](rand::rngs::StdRng).

use std::ops::RangeInclusive;

use rand::Rng;

/// `n` cable lengths drawn uniformly from `range`.
pub fn random_lengths<R: Rng>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<u64>,
) -> Vec<u64> {
    let lengths: Vec<u64> = (0..n).map(|_| rng.random_range(range.clone())).collect();
    tracing::info!(?lengths, "generated cable lengths");
    lengths
}

/// `k` sorted lists; each length is drawn from `len_range` and each value
/// from `value_range`.
pub fn random_sorted_lists<R: Rng>(
    rng: &mut R,
    k: usize,
    len_range: RangeInclusive<usize>,
    value_range: RangeInclusive<i64>,
) -> Vec<Vec<i64>> {
    let lists: Vec<Vec<i64>> = (0..k)
        .map(|_| {
            let len = rng.random_range(len_range.clone());
            let mut list: Vec<i64> = (0..len)
                .map(|_| rng.random_range(value_range.clone()))
                .collect();
            list.sort_unstable();
            list
        })
        .collect();
    tracing::info!(?lists, "generated sorted lists");
    lists
}

#[cfg(test)]
mod tests {
    use super::*;
    use joiner_core::is_sorted_non_decreasing;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lengths_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let lengths = random_lengths(&mut rng, 200, 1..=100);
        assert_eq!(lengths.len(), 200);
        assert!(lengths.iter().all(|l| (1..=100).contains(l)));
    }

    #[test]
    fn same_seed_same_lengths() {
        let a = random_lengths(&mut StdRng::seed_from_u64(42), 10, 1..=100);
        let b = random_lengths(&mut StdRng::seed_from_u64(42), 10, 1..=100);
        assert_eq!(a, b);
    }

    #[test]
    fn single_value_range() {
        let lengths = random_lengths(&mut StdRng::seed_from_u64(1), 4, 9..=9);
        assert_eq!(lengths, vec![9, 9, 9, 9]);
    }

    #[test]
    fn lists_are_sorted_and_shaped() {
        let mut rng = StdRng::seed_from_u64(3);
        let lists = random_sorted_lists(&mut rng, 25, 3..=10, 1..=20);
        assert_eq!(lists.len(), 25);
        for list in &lists {
            assert!((3..=10).contains(&list.len()));
            assert!(list.iter().all(|v| (1..=20).contains(v)));
            assert!(is_sorted_non_decreasing(list));
        }
    }

    #[test]
    fn zero_lists() {
        let lists = random_sorted_lists(&mut StdRng::seed_from_u64(0), 0, 3..=10, 1..=20);
        assert!(lists.is_empty());
    }
}
