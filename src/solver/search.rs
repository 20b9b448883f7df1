//! The try/change search loop and its two strategies.
//!
//! A run consists of up to `max_tries` tries. Each try starts from a fresh
//! random assignment and performs up to `max_changes` changes, each change
//! reconsidering exactly one variable's value. The run ends as soon as an
//! assignment with zero conflicts is found, or when the whole budget is
//! exhausted.

use rand::RngCore;
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        assignment::Assignment,
        conflict::ConflictEngine,
        heuristics::{
            value::{MinConflictsValueHeuristic, TabuContext, ValueSelectionHeuristic},
            variable::{ConflictedVariableHeuristic, VariableSelectionHeuristic},
        },
        model::{ConstraintMatrix, Timeslot},
        tabu::{TabuList, DEFAULT_TABU_CAPACITY},
    },
};

/// The try/change budget and the value-domain size for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Size of every variable's value domain (`days * SLOTS_PER_DAY`).
    pub num_values: usize,
    /// Random restarts per run.
    pub max_tries: usize,
    /// Changes per try.
    pub max_changes: usize,
}

impl SearchConfig {
    pub fn new(num_values: usize, max_tries: usize, max_changes: usize) -> Self {
        Self {
            num_values,
            max_tries,
            max_changes,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.num_values == 0 {
            return Err(SolverError::InvalidConfig("value domain is empty".into()).into());
        }
        if self.max_tries == 0 || self.max_changes == 0 {
            return Err(
                SolverError::InvalidConfig("try/change budget must be at least 1".into()).into(),
            );
        }
        Ok(())
    }
}

/// How a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// A zero-conflict assignment was found.
    Solved,
    /// The full try/change budget ran out first.
    Exhausted,
}

/// The outcome of one run, returned by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// The zero-conflict assignment, present only when solved.
    pub assignment: Option<Vec<Timeslot>>,
    /// Changes performed, counted whether or not a value actually moved.
    pub moves: u64,
    /// Lowest conflict count observed anywhere in the run.
    pub best_conflicts: usize,
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }
}

/// A complete local-search algorithm over a constraint matrix.
pub trait SearchStrategy {
    fn solve(&self, matrix: &ConstraintMatrix, rng: &mut dyn RngCore) -> Result<SearchReport>;
}

/// Plain min-conflicts: a move commits only when its cost does not exceed the
/// current cost, otherwise the variable keeps its value.
pub struct MinConflictsSearch {
    config: SearchConfig,
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueSelectionHeuristic>,
}

impl MinConflictsSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristics(
            config,
            Box::new(ConflictedVariableHeuristic),
            Box::new(MinConflictsValueHeuristic),
        )
    }

    pub fn with_heuristics(
        config: SearchConfig,
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueSelectionHeuristic>,
    ) -> Self {
        Self {
            config,
            variable_heuristic,
            value_heuristic,
        }
    }
}

impl SearchStrategy for MinConflictsSearch {
    fn solve(&self, matrix: &ConstraintMatrix, rng: &mut dyn RngCore) -> Result<SearchReport> {
        self.config.validate()?;
        let engine = ConflictEngine::new(matrix);
        let mut moves: u64 = 0;
        let mut best_conflicts = usize::MAX;

        for try_index in 0..self.config.max_tries {
            let mut assignment =
                Assignment::random(matrix.variable_count(), self.config.num_values, rng);
            debug!(try_index, "starting try");

            for change in 0..self.config.max_changes {
                let cost = engine.total_conflicts(&assignment);
                debug!(try_index, change, cost, "evaluating assignment");
                best_conflicts = best_conflicts.min(cost);

                if cost == 0 {
                    debug!(try_index, change, moves, "solution found");
                    return Ok(SearchReport {
                        status: SearchStatus::Solved,
                        assignment: Some(assignment.into_slots()),
                        moves,
                        best_conflicts: 0,
                    });
                }

                let variable = self
                    .variable_heuristic
                    .select_variable(&engine, &assignment, rng);
                let candidate =
                    self.value_heuristic
                        .select_value(&engine, &mut assignment, variable, None);
                moves += 1;

                match candidate {
                    Some(candidate) if candidate.cost <= cost => {
                        assignment.set(variable, candidate.value);
                        debug!(
                            variable,
                            value = candidate.value,
                            cost = candidate.cost,
                            "committed move"
                        );
                    }
                    _ => {
                        debug!(variable, cost, "kept current value");
                    }
                }
            }
            debug!(try_index, "try exhausted");
        }

        Ok(SearchReport {
            status: SearchStatus::Exhausted,
            assignment: None,
            moves,
            best_conflicts,
        })
    }
}

/// Tabu-enhanced min-conflicts: the best admissible value always commits, and
/// the vacated (variable, value) pair becomes tabu for a while. A tabu value
/// stays admissible if it would beat the best conflict count of the whole run
/// (the aspiration criterion).
pub struct TabuSearch {
    config: SearchConfig,
    tabu_capacity: usize,
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueSelectionHeuristic>,
}

impl TabuSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_capacity(config, DEFAULT_TABU_CAPACITY)
    }

    pub fn with_capacity(config: SearchConfig, tabu_capacity: usize) -> Self {
        Self {
            config,
            tabu_capacity,
            variable_heuristic: Box::new(ConflictedVariableHeuristic),
            value_heuristic: Box::new(MinConflictsValueHeuristic),
        }
    }
}

impl SearchStrategy for TabuSearch {
    fn solve(&self, matrix: &ConstraintMatrix, rng: &mut dyn RngCore) -> Result<SearchReport> {
        self.config.validate()?;
        let engine = ConflictEngine::new(matrix);
        let mut tabu = TabuList::new(self.tabu_capacity);
        let mut moves: u64 = 0;
        let mut best_conflicts = usize::MAX;

        for try_index in 0..self.config.max_tries {
            let mut assignment =
                Assignment::random(matrix.variable_count(), self.config.num_values, rng);
            tabu.clear();
            debug!(try_index, "starting try");

            for change in 0..self.config.max_changes {
                let cost = engine.total_conflicts(&assignment);
                debug!(try_index, change, cost, "evaluating assignment");
                best_conflicts = best_conflicts.min(cost);

                if cost == 0 {
                    debug!(try_index, change, moves, "solution found");
                    return Ok(SearchReport {
                        status: SearchStatus::Solved,
                        assignment: Some(assignment.into_slots()),
                        moves,
                        best_conflicts: 0,
                    });
                }

                let variable = self
                    .variable_heuristic
                    .select_variable(&engine, &assignment, rng);
                let previous = assignment.get(variable);
                let context = TabuContext {
                    list: &tabu,
                    best_conflicts,
                };
                let candidate = self.value_heuristic.select_value(
                    &engine,
                    &mut assignment,
                    variable,
                    Some(&context),
                );
                moves += 1;

                if let Some(candidate) = candidate {
                    assignment.set(variable, candidate.value);
                    tabu.record(variable, previous);
                    debug!(
                        variable,
                        previous,
                        value = candidate.value,
                        cost = candidate.cost,
                        "committed move"
                    );
                } else {
                    // Every alternative was tabu with no aspiration; the
                    // change is a no-op but still counts against the budget.
                    debug!(variable, cost, "no admissible value");
                }
            }
            debug!(try_index, "try exhausted");
        }

        Ok(SearchReport {
            status: SearchStatus::Exhausted,
            assignment: None,
            moves,
            best_conflicts,
        })
    }
}
