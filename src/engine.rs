//! Generational engine: the explicit state machine driving
//! selection → crossover → mutation → elitist replacement.
//!
//! The engine owns the catalog, the configuration, the population, and the
//! single random source for the run. Every draw — initialization, pair
//! selection, cut points, mutation coins, gene-flip masks — comes from that
//! one generator, in a fixed order, so a fixed seed reproduces a fixed run
//! exactly. A fixed generation count is the sole termination condition:
//! there is no convergence check, no early stopping, no retry.

use crate::catalog::Catalog;
use crate::chromosome::Chromosome;
use crate::config::GaConfig;
use crate::error::ConfigError;
use crate::{operators, population, selection};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the engine is in its lifecycle.
///
/// `Initialized` is the state right after construction (starting population
/// created, no generation stepped yet); `Running(g)` means `g` generations
/// have completed; `Terminated` means the configured generation count has
/// been reached and the final population is available for result
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initialized,
    Running(usize),
    Terminated,
}

/// Result of a completed run.
///
/// `fitness_history` records the best fitness in the population before the
/// first stepped generation and after each one, so callers can observe the
/// monotone improvement elitist replacement guarantees.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Highest-fitness chromosome in the final population (first such on
    /// ties).
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: i64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best population fitness per generation, including the starting
    /// population.
    pub fitness_history: Vec<i64>,
}

/// The generational knapsack GA.
///
/// # Usage
///
/// ```
/// use knapsack_ga::{Catalog, GaConfig, GaEngine, Item};
///
/// let catalog = Catalog::new(vec![
///     Item { name: "a".into(), volume: 10, value: 60 },
///     Item { name: "b".into(), volume: 20, value: 100 },
///     Item { name: "c".into(), volume: 30, value: 120 },
/// ]).unwrap();
///
/// let config = GaConfig::default().with_generation_count(50);
/// let mut engine = GaEngine::new(catalog, config).unwrap();
/// let result = engine.run();
/// assert!(result.best_fitness >= 0);
/// ```
pub struct GaEngine {
    catalog: Catalog,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Chromosome>,
    generation: usize,
}

impl GaEngine {
    /// Validates the configuration, seeds the random source, and creates
    /// the starting population (the Uninitialized → Initialized
    /// transition).
    pub fn new(catalog: Catalog, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let population =
            population::create_population(config.population_size, catalog.len(), &mut rng);
        log::info!(
            "initialized population of {} chromosomes of width {} (seed {})",
            config.population_size,
            catalog.len(),
            config.seed
        );

        Ok(Self {
            catalog,
            config,
            rng,
            population,
            generation: 0,
        })
    }

    /// The current lifecycle state, with the generation counter exposed.
    pub fn state(&self) -> EngineState {
        if self.generation >= self.config.generation_count {
            EngineState::Terminated
        } else if self.generation == 0 {
            EngineState::Initialized
        } else {
            EngineState::Running(self.generation)
        }
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population. Always exactly `population_size`
    /// chromosomes, before and after every step.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Evaluates a chromosome against this run's catalog and capacity.
    pub fn evaluate_fitness(&self, chromosome: &Chromosome) -> i64 {
        chromosome.evaluate_fitness(&self.catalog, self.config.knapsack_capacity)
    }

    /// The highest-fitness chromosome in the current population (first
    /// such on ties) and its fitness.
    ///
    /// The population is never empty: `population_size >= 2` is enforced
    /// by [`GaConfig::validate`] at construction and replacement always
    /// refills to exactly `population_size`.
    pub fn best(&self) -> (&Chromosome, i64) {
        self.population
            .iter()
            .map(|c| (c, self.evaluate_fitness(c)))
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .expect("population is never empty")
    }

    /// Runs one generation: the `Running(g) → Running(g+1)` transition.
    ///
    /// Draws `population_size` breeding pairs; each pair whose parents
    /// differ contributes two crossover children to the offspring buffer
    /// (so the buffer holds at most `2 * population_size` candidates —
    /// self-pairs and equal pairs contribute none). The buffer is then
    /// mutated and the combined pool truncated back to `population_size`
    /// by elitist replacement.
    ///
    /// Returns `false` without doing anything once the engine is
    /// Terminated. Chromosomes narrower than 3 genes admit no interior cut
    /// point, so crossover is skipped entirely for such catalogs and
    /// evolution degenerates to re-ranking the initial population.
    pub fn step(&mut self) -> bool {
        if self.generation >= self.config.generation_count {
            return false;
        }

        let n = self.catalog.len();
        let mut offspring = Vec::with_capacity(2 * self.config.population_size);
        for _ in 0..self.config.population_size {
            let (first, second) = selection::select_pair(&self.population, &mut self.rng);
            if n >= 3 && self.population[first] != self.population[second] {
                let (child_a, child_b) = operators::single_point_crossover(
                    &self.population[first],
                    &self.population[second],
                    &mut self.rng,
                );
                offspring.push(child_a);
                offspring.push(child_b);
            }
        }

        let mutated = operators::mutate_population(
            offspring,
            self.config.chromosome_mutation_probability,
            self.config.gene_mutation_probability,
            &mut self.rng,
        );

        let capacity = self.config.knapsack_capacity;
        let catalog = &self.catalog;
        let next = population::replace(
            &self.population,
            mutated,
            self.config.population_size,
            |c| c.evaluate_fitness(catalog, capacity),
        );
        self.population = next;
        self.generation += 1;

        log::debug!(
            "generation {}/{}: best fitness {}",
            self.generation,
            self.config.generation_count,
            self.best().1
        );
        true
    }

    /// Steps from the current state to termination and summarizes the run.
    pub fn run(&mut self) -> GaResult {
        let mut fitness_history =
            Vec::with_capacity(self.config.generation_count.saturating_sub(self.generation) + 1);
        fitness_history.push(self.best().1);
        while self.step() {
            fitness_history.push(self.best().1);
        }

        let (best, best_fitness) = self.best();
        log::info!(
            "terminated after {} generations: best fitness {}",
            self.generation,
            best_fitness
        );
        GaResult {
            best: best.clone(),
            best_fitness,
            generations: self.generation,
            fitness_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn item(name: &str, volume: u64, value: u64) -> Item {
        Item {
            name: name.into(),
            volume,
            value,
        }
    }

    fn three_item_catalog() -> Catalog {
        Catalog::new(vec![
            item("A", 10, 60),
            item("B", 20, 100),
            item("C", 30, 120),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_generation_run() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generation_count(1)
            .with_seed(1975);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();
        let result = engine.run();

        assert_eq!(result.generations, 1);
        assert_eq!(engine.population().len(), 4);
        assert!(engine.population().iter().all(|c| c.len() == 3));
        // Every chromosome evaluates to a well-defined fitness.
        for c in engine.population() {
            let f = engine.evaluate_fitness(c);
            assert!(f.abs() <= 280);
        }
    }

    #[test]
    fn test_identical_pairs_produce_no_offspring() {
        let config = GaConfig::default()
            .with_population_size(6)
            .with_generation_count(3);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();

        // With a uniform population every selected pair compares equal,
        // so crossover is skipped, the offspring buffer stays empty, and
        // replacement only re-ranks the unchanged population.
        let uniform = vec![Chromosome::from_genes(vec![true, false, false]); 6];
        engine.population = uniform.clone();

        assert!(engine.step());
        assert_eq!(engine.population(), uniform.as_slice());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_generation_replays_documented_draw_order() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generation_count(1)
            .with_seed(1975);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();

        // Replay the draw sequence the engine commits to: gene-major
        // initialization, then per pair two index draws plus one cut draw
        // for non-identical parents, then the mutation coins. Any
        // reordering of draws inside `step` diverges from this replay.
        let catalog = three_item_catalog();
        let mut rng = StdRng::seed_from_u64(1975);
        let start = population::create_population(4, 3, &mut rng);
        assert_eq!(engine.population(), start.as_slice());

        let mut offspring = Vec::new();
        for _ in 0..4 {
            let (first, second) = selection::select_pair(&start, &mut rng);
            if start[first] != start[second] {
                let (child_a, child_b) =
                    operators::single_point_crossover(&start[first], &start[second], &mut rng);
                offspring.push(child_a);
                offspring.push(child_b);
            }
        }
        let mutated = operators::mutate_population(offspring, 0.3, 0.1, &mut rng);
        let expected =
            population::replace(&start, mutated, 4, |c| c.evaluate_fitness(&catalog, 50));

        assert!(engine.step());
        assert_eq!(engine.population(), expected.as_slice());

        // Replacement ranks by fitness descending.
        let fitnesses: Vec<i64> = engine
            .population()
            .iter()
            .map(|c| engine.evaluate_fitness(c))
            .collect();
        assert!(fitnesses.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_fixed_seed_reproduces_fixed_run() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generation_count(20)
            .with_seed(1975);

        let mut a = GaEngine::new(three_item_catalog(), config.clone()).unwrap();
        let mut b = GaEngine::new(three_item_catalog(), config).unwrap();
        let result_a = a.run();
        let result_b = b.run();

        assert_eq!(a.population(), b.population());
        assert_eq!(result_a.fitness_history, result_b.fitness_history);
        assert_eq!(result_a.best, result_b.best);
    }

    #[test]
    fn test_population_size_invariant_every_generation() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_generation_count(30);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();

        assert_eq!(engine.population().len(), 12);
        while engine.step() {
            assert_eq!(engine.population().len(), 12);
            assert!(engine.population().iter().all(|c| c.len() == 3));
        }
    }

    #[test]
    fn test_best_fitness_is_monotone() {
        let config = GaConfig::default().with_generation_count(50);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();
        let result = engine.run();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "elitist replacement must never lose the best: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_converges_to_known_optimum() {
        // Capacity 50 admits {A, B}: volume 30, value 160. Adding C always
        // overflows, so 160 is the global optimum over all 8 subsets.
        let config = GaConfig::default().with_generation_count(100);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();
        let result = engine.run();

        assert_eq!(result.best_fitness, 160);
        assert_eq!(result.best.to_item_subset(engine.catalog()).len(), 2);
    }

    #[test]
    fn test_single_item_catalog_converges_to_all_selected() {
        // Width 1 admits no crossover; the optimum must come from the
        // random starting population, which elitism then preserves.
        let catalog = Catalog::new(vec![item("only", 10, 60)]).unwrap();
        let config = GaConfig::default()
            .with_population_size(64)
            .with_generation_count(5);
        let mut engine = GaEngine::new(catalog, config).unwrap();
        let result = engine.run();

        assert_eq!(result.best_fitness, 60);
        assert_eq!(result.best.genes(), &[true]);
    }

    #[test]
    fn test_two_item_catalog_steps_without_crossover() {
        let catalog = Catalog::new(vec![item("a", 10, 60), item("b", 20, 100)]).unwrap();
        let config = GaConfig::default()
            .with_population_size(16)
            .with_generation_count(3);
        let mut engine = GaEngine::new(catalog, config).unwrap();

        while engine.step() {
            assert_eq!(engine.population().len(), 16);
        }
        assert_eq!(engine.state(), EngineState::Terminated);
    }

    #[test]
    fn test_state_machine_transitions() {
        let config = GaConfig::default().with_generation_count(2);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();

        assert_eq!(engine.state(), EngineState::Initialized);
        assert!(engine.step());
        assert_eq!(engine.state(), EngineState::Running(1));
        assert!(engine.step());
        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_step_after_termination_is_a_noop() {
        let config = GaConfig::default().with_generation_count(1);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();
        engine.run();

        let frozen = engine.population().to_vec();
        assert!(!engine.step());
        assert_eq!(engine.population(), frozen);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_zero_generations_terminates_immediately() {
        let config = GaConfig::default().with_generation_count(0);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();

        assert_eq!(engine.state(), EngineState::Terminated);
        let result = engine.run();
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(engine.population().len(), 20);
    }

    #[test]
    fn test_fitness_history_length() {
        let config = GaConfig::default().with_generation_count(25);
        let mut engine = GaEngine::new(three_item_catalog(), config).unwrap();
        let result = engine.run();
        // Initial population plus one entry per generation.
        assert_eq!(result.fitness_history.len(), 26);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GaConfig::default().with_population_size(1);
        assert!(GaEngine::new(three_item_catalog(), config).is_err());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let base = GaConfig::default()
            .with_population_size(10)
            .with_generation_count(5);
        let a = GaEngine::new(three_item_catalog(), base.clone().with_seed(1)).unwrap();
        let b = GaEngine::new(three_item_catalog(), base.with_seed(2)).unwrap();

        // Different seeds give different starting populations.
        assert_ne!(a.population(), b.population());
    }
}
