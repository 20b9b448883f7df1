//! Repeated independent runs and their order-independent aggregation.

use std::time::{Duration, Instant};

use rand::RngCore;
use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    solver::{
        model::ConstraintMatrix,
        search::{SearchReport, SearchStrategy},
    },
};

/// One run's report plus its wall-clock time.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub report: SearchReport,
    pub elapsed: Duration,
}

/// Aggregate over a batch of runs. Every field is an order-independent
/// reduction (count, sum, minimum, or mean), so runs may be executed in any
/// order, or in parallel by a caller, before being combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub runs: usize,
    /// Runs that reached a zero-conflict assignment.
    pub solved: usize,
    pub total_moves: u64,
    pub average_moves: f64,
    /// Minimum best-conflict count across all runs.
    pub best_conflicts: usize,
    pub average_best_conflicts: f64,
    pub average_execution_secs: f64,
}

impl BatchSummary {
    pub fn from_records(records: &[RunRecord]) -> Self {
        if records.is_empty() {
            return Self {
                runs: 0,
                solved: 0,
                total_moves: 0,
                average_moves: 0.0,
                best_conflicts: 0,
                average_best_conflicts: 0.0,
                average_execution_secs: 0.0,
            };
        }

        let runs = records.len();
        let solved = records.iter().filter(|r| r.report.is_solved()).count();
        let total_moves: u64 = records.iter().map(|r| r.report.moves).sum();
        let total_best: u64 = records.iter().map(|r| r.report.best_conflicts as u64).sum();
        let best_conflicts = records
            .iter()
            .map(|r| r.report.best_conflicts)
            .min()
            .unwrap_or(0);
        let total_secs: f64 = records.iter().map(|r| r.elapsed.as_secs_f64()).sum();

        Self {
            runs,
            solved,
            total_moves,
            average_moves: total_moves as f64 / runs as f64,
            best_conflicts,
            average_best_conflicts: total_best as f64 / runs as f64,
            average_execution_secs: total_secs / runs as f64,
        }
    }
}

/// Executes `runs` independent searches against a shared read-only matrix.
pub fn run_batch(
    strategy: &dyn SearchStrategy,
    matrix: &ConstraintMatrix,
    runs: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<RunRecord>> {
    let mut records = Vec::with_capacity(runs);
    for run in 0..runs {
        let started = Instant::now();
        let report = strategy.solve(matrix, rng)?;
        let elapsed = started.elapsed();
        debug!(
            run,
            moves = report.moves,
            best_conflicts = report.best_conflicts,
            solved = report.is_solved(),
            "run finished"
        );
        records.push(RunRecord { report, elapsed });
    }
    Ok(records)
}
