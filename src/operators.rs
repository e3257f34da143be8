//! Genetic operators: single-point crossover and gene-flip mutation.
//!
//! Crossover is a direct head/tail splice over the gene sequence. The
//! reference implementation merged parent fragments with a bitmask-AND
//! combined with arithmetic addition on the same integer, which its host
//! language's operator precedence silently corrupts; the splice below is
//! the stated "single point crossover" intent, implemented safely. See
//! DESIGN.md for that product decision.

use crate::chromosome::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Chooses a cut point uniformly from the interior positions `1..=N-2`
/// (both extremes are excluded so every child mixes material from both
/// parents and cannot reproduce a parent verbatim), then swaps tails:
///
/// - `child_a` = head of `a` + tail of `b`
/// - `child_b` = head of `b` + tail of `a`
///
/// Consumes exactly one draw from `rng`. The caller is responsible for
/// skipping pairs that compare equal; crossing a chromosome with itself
/// only clones it.
///
/// # Panics
/// Panics if the parents differ in width or the width is below 3 (no
/// interior cut point exists).
pub fn single_point_crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal width");
    assert!(n >= 3, "chromosome width must be at least 3 for an interior cut");

    let cut = rng.random_range(1..n - 1);
    splice(a, b, cut)
}

/// Swaps tails at `cut`: genes `[0, cut)` keep their parent, genes
/// `[cut, N)` come from the other parent.
fn splice(a: &Chromosome, b: &Chromosome, cut: usize) -> (Chromosome, Chromosome) {
    let mut child_a = Vec::with_capacity(a.len());
    let mut child_b = Vec::with_capacity(a.len());

    child_a.extend_from_slice(&a.genes()[..cut]);
    child_a.extend_from_slice(&b.genes()[cut..]);
    child_b.extend_from_slice(&b.genes()[..cut]);
    child_b.extend_from_slice(&a.genes()[cut..]);

    (
        Chromosome::from_genes(child_a),
        Chromosome::from_genes(child_b),
    )
}

// ============================================================================
// Mutation
// ============================================================================

/// Draws a gene-flip mask of width `n`.
///
/// Each position independently succeeds with probability `gene_rate`;
/// successful positions are flipped when the mask is applied. Consumes
/// exactly `n` draws from `rng`, in gene order.
pub fn mutation_mask<R: Rng>(n: usize, gene_rate: f64, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(gene_rate)).collect()
}

/// Applies a gene-flip mask: gene-wise exclusive-or of chromosome and mask.
pub fn mutate_chromosome(chromosome: &Chromosome, mask: &[bool]) -> Chromosome {
    debug_assert_eq!(chromosome.len(), mask.len());
    let genes = chromosome
        .genes()
        .iter()
        .zip(mask)
        .map(|(&g, &m)| g ^ m)
        .collect();
    Chromosome::from_genes(genes)
}

/// Mutates an offspring pool.
///
/// For each offspring, in order: one coin with probability
/// `chromosome_rate` decides whether the individual is mutated at all; on
/// success a fresh [`mutation_mask`] is drawn and applied, on failure the
/// individual passes through unchanged. Every input ends up in the output,
/// so the pool size is preserved.
pub fn mutate_population<R: Rng>(
    offspring: Vec<Chromosome>,
    chromosome_rate: f64,
    gene_rate: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    offspring
        .into_iter()
        .map(|individual| {
            if rng.random_bool(chromosome_rate) {
                let mask = mutation_mask(individual.len(), gene_rate, rng);
                mutate_chromosome(&individual, &mask)
            } else {
                individual
            }
        })
        .collect()
}
