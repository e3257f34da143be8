//! Panmixia pair selection.
//!
//! Breeding pairs are drawn uniformly at random from the current
//! population, with replacement and without any fitness weighting. Any
//! individual may pair with any other, including itself; self-pairs are
//! handled by the engine, which skips crossover for pairs that compare
//! equal as chromosomes.

use crate::chromosome::Chromosome;
use rand::Rng;

/// Draws a breeding pair: two indices, independent and uniform over the
/// population, with replacement.
///
/// Consumes exactly two draws from `rng`, first parent first.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_pair<R: Rng>(population: &[Chromosome], rng: &mut R) -> (usize, usize) {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();
    let first = rng.random_range(0..n);
    let second = rng.random_range(0..n);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(n: usize) -> Vec<Chromosome> {
        (0..n)
            .map(|i| Chromosome::from_genes(vec![i % 2 == 0, i % 3 == 0]))
            .collect()
    }

    #[test]
    fn test_indices_in_range() {
        let pop = make_population(7);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = select_pair(&pop, &mut rng);
            assert!(a < 7 && b < 7);
        }
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let pop = make_population(4);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let (a, b) = select_pair(&pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        // Each index should land near 2 * n / 4 = 5000 picks.
        for &c in &counts {
            assert!(
                (4000..6000).contains(&c),
                "expected roughly uniform selection, got counts: {counts:?}"
            );
        }
    }

    #[test]
    fn test_self_pairs_occur() {
        let pop = make_population(3);
        let mut rng = StdRng::seed_from_u64(42);

        // With replacement, a == b must show up over enough draws.
        let self_pairs = (0..1000)
            .filter(|_| {
                let (a, b) = select_pair(&pop, &mut rng);
                a == b
            })
            .count();
        assert!(self_pairs > 0, "expected at least one self-pair");
    }

    #[test]
    fn test_reproducible_for_fixed_seed() {
        let pop = make_population(10);
        let draws_a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..50).map(|_| select_pair(&pop, &mut rng)).collect()
        };
        let draws_b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..50).map(|_| select_pair(&pop, &mut rng)).collect()
        };
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Chromosome> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        select_pair(&pop, &mut rng);
    }
}
