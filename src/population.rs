//! Population initialization and elitist-truncation replacement.
//!
//! Both are pure functions: initialization builds a fresh chromosome
//! vector from the RNG, and replacement maps two input pools to the next
//! generation without touching either in place. Replacement never consumes
//! the RNG, which is what makes its fitness pass safe to parallelize.

use crate::chromosome::Chromosome;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Reverse;

/// Creates the starting population: `size` independent random chromosomes
/// of width `n`.
///
/// Consumes `size * n` draws from `rng`, gene-major within each chromosome
/// and chromosome-major across the population. Preserving this exact draw
/// order is what makes a seeded run reproducible.
pub fn create_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Vec<Chromosome> {
    (0..size).map(|_| Chromosome::random(n, rng)).collect()
}

/// Elitist truncation: concatenates the current population with the
/// mutated offspring, evaluates every candidate, and keeps the
/// `population_size` best by fitness.
///
/// The sort is descending by fitness and **stable**, so ties keep their
/// original relative order (current population before offspring) and a
/// fixed seed reproduces a fixed run. The best chromosome seen so far can
/// never be lost while it stays inside the top `population_size`.
///
/// With the `parallel` feature enabled, fitness evaluation runs across
/// rayon's thread pool; evaluation is a pure read-only function of
/// chromosome, catalog, and capacity, so ordering of the scored pool is
/// unaffected.
pub fn replace<F>(
    current: &[Chromosome],
    offspring: Vec<Chromosome>,
    population_size: usize,
    fitness_fn: F,
) -> Vec<Chromosome>
where
    F: Fn(&Chromosome) -> i64 + Sync,
{
    let mut pool: Vec<Chromosome> = Vec::with_capacity(current.len() + offspring.len());
    pool.extend_from_slice(current);
    pool.extend(offspring);

    #[cfg(feature = "parallel")]
    let mut scored: Vec<(i64, Chromosome)> = pool
        .into_par_iter()
        .map(|c| (fitness_fn(&c), c))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut scored: Vec<(i64, Chromosome)> =
        pool.into_iter().map(|c| (fitness_fn(&c), c)).collect();

    scored.sort_by_key(|&(fitness, _)| Reverse(fitness));
    scored.truncate(population_size);
    scored.into_iter().map(|(_, c)| c).collect()
}
