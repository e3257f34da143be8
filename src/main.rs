//! knapsack-ga: command-line front end.
//!
//! Loads an item catalog from a comma-delimited file (`name,volume,value`
//! per line), runs the generational GA, and reports the best chromosome
//! found: its gene string, aggregate volume and value, and the selected
//! items in catalog order.

use clap::Parser;
use knapsack_ga::{Catalog, GaConfig, GaEngine};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "knapsack-ga", version, about = "Genetic-algorithm solver for the 0/1 knapsack problem")]
struct Args {
    /// Path to the item catalog: one `name,volume,value` record per line.
    items: PathBuf,

    /// Knapsack capacity.
    #[arg(long, default_value_t = 50)]
    capacity: u64,

    /// Number of individuals in the population.
    #[arg(long, default_value_t = 20)]
    population_size: usize,

    /// Number of generations to run.
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Probability that an offspring is mutated at all.
    #[arg(long, default_value_t = 0.3)]
    chromosome_mutation: f64,

    /// Per-gene flip probability inside a mutation mask.
    #[arg(long, default_value_t = 0.1)]
    gene_mutation: f64,

    /// Random seed; a fixed seed reproduces a fixed run.
    #[arg(long, default_value_t = 1975)]
    seed: u64,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_csv_path(&args.items)?;
    let config = GaConfig::default()
        .with_knapsack_capacity(args.capacity)
        .with_population_size(args.population_size)
        .with_generation_count(args.generations)
        .with_chromosome_mutation_probability(args.chromosome_mutation)
        .with_gene_mutation_probability(args.gene_mutation)
        .with_seed(args.seed);

    let mut engine = GaEngine::new(catalog, config)?;
    let result = engine.run();

    let volume = result.best.aggregate_volume(engine.catalog());
    let value = result.best.aggregate_value(engine.catalog());
    println!("{} {} {}", result.best, volume, value);
    for item in result.best.to_item_subset(engine.catalog()) {
        println!("{} {} {}", item.name, item.volume, item.value);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
