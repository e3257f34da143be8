//! Chromosome representation and fitness model.
//!
//! A chromosome is a fixed-width boolean gene vector over catalog indices:
//! gene `i` selects or deselects catalog item `i`. The width `N` equals the
//! catalog size and is fixed for the run.
//!
//! Fitness is a signed score computed on demand from the chromosome, the
//! catalog, and the capacity — it is never cached on the chromosome, so
//! there is no staleness to manage. A feasible chromosome (aggregate volume
//! within capacity) scores its aggregate value; an infeasible one scores
//! the negation of its aggregate value. This is the original soft penalty:
//! no distinction is made between slightly and wildly over capacity beyond
//! the sign of the value term.

use crate::catalog::{Catalog, Item};
use rand::Rng;
use std::fmt;

/// A candidate solution: one boolean gene per catalog item.
///
/// Modeled as a boolean sequence rather than a packed integer so that
/// crossover can be a direct head/tail splice over the gene sequence
/// (see [`crate::operators::single_point_crossover`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Builds a chromosome from an explicit gene vector.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Draws a random chromosome of width `n`.
    ///
    /// Each gene is drawn independently and uniformly from `{0, 1}`, in
    /// gene order. Consumes exactly `n` draws from `rng`; draw order
    /// matters for reproducibility under a fixed seed.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let genes = (0..n).map(|_| rng.random_bool(0.5)).collect();
        Self { genes }
    }

    /// Chromosome width `N`.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether gene `i` is set (item `i` selected).
    pub fn gene(&self, i: usize) -> bool {
        self.genes[i]
    }

    /// The raw gene sequence.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Sum of `volume` over selected items. `0` for an all-unset chromosome.
    pub fn aggregate_volume(&self, catalog: &Catalog) -> u64 {
        self.selected_indices()
            .map(|i| catalog.get(i).volume)
            .sum()
    }

    /// Sum of `value` over selected items. `0` for an all-unset chromosome.
    pub fn aggregate_value(&self, catalog: &Catalog) -> u64 {
        self.selected_indices().map(|i| catalog.get(i).value).sum()
    }

    /// Signed fitness: aggregate value if the aggregate volume fits within
    /// `capacity`, otherwise its negation.
    ///
    /// Non-negative iff the chromosome is feasible; the all-unset
    /// chromosome trivially scores `0`.
    pub fn evaluate_fitness(&self, catalog: &Catalog, capacity: u64) -> i64 {
        let value = self.aggregate_value(catalog) as i64;
        if self.aggregate_volume(catalog) <= capacity {
            value
        } else {
            -value
        }
    }

    /// Materializes the selected items, preserving catalog order.
    pub fn to_item_subset<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        self.selected_indices().map(|i| catalog.get(i)).collect()
    }

    fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &g)| g)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Chromosome {
    /// Renders the gene string, one `0`/`1` per gene in catalog order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            write!(f, "{}", if g { '1' } else { '0' })?;
        }
        Ok(())
    }
}
