use std::path::PathBuf;

use clap::Parser;
use mincon::{
    error::{Result, SolverError},
    solver::{
        batch::{run_batch, BatchSummary},
        model::{ConstraintMatrix, SLOTS_PER_DAY},
        search::{MinConflictsSearch, SearchConfig, SearchStrategy, TabuSearch},
        stats::{render_runs_table, render_summary_table},
        tabu::DEFAULT_TABU_CAPACITY,
    },
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Min-conflicts / tabu local search for exam timetabling instances.
#[derive(Parser, Debug)]
#[command(name = "mincon", version)]
struct Args {
    /// Path to the comma-separated constraint matrix.
    matrix: PathBuf,

    /// Number of variables (exams) in the instance.
    #[arg(long, default_value_t = 73, value_parser = clap::value_parser!(u64).range(1..))]
    variables: u64,

    /// Number of examination days; each day has three slots.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    days: u64,

    /// Random restarts per run.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    max_tries: u64,

    /// Changes per try.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    max_changes: u64,

    /// Independent runs to aggregate.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    runs: u64,

    /// Use the tabu-search variant instead of plain min-conflicts.
    #[arg(long)]
    tabu: bool,

    /// Capacity of the tabu list.
    #[arg(long, default_value_t = DEFAULT_TABU_CAPACITY as u64)]
    tabu_capacity: u64,

    /// Seed for reproducible runs; omit for entropy-based randomness.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the summary as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let matrix = ConstraintMatrix::load_csv(&args.matrix, args.variables as usize)?;
    let config = SearchConfig::new(
        args.days as usize * SLOTS_PER_DAY,
        args.max_tries as usize,
        args.max_changes as usize,
    );

    let strategy: Box<dyn SearchStrategy> = if args.tabu {
        Box::new(TabuSearch::with_capacity(
            config,
            args.tabu_capacity as usize,
        ))
    } else {
        Box::new(MinConflictsSearch::new(config))
    };

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    let records = run_batch(strategy.as_ref(), &matrix, args.runs as usize, rng.as_mut())?;
    let summary = BatchSummary::from_records(&records);

    if args.json {
        let encoded = serde_json::to_string_pretty(&summary).map_err(SolverError::Encode)?;
        println!("{encoded}");
        return Ok(());
    }

    println!("{}", render_runs_table(&records));
    println!("{}", render_summary_table(&summary));

    if let Some(solved) = records.iter().find(|record| record.report.is_solved()) {
        if let Some(slots) = &solved.report.assignment {
            println!("Solution:");
            for (variable, slot) in slots.iter().enumerate() {
                println!("X{variable} = {slot}");
            }
        }
    }

    Ok(())
}
