//! Heuristics for choosing which variable to reassign next.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::solver::{assignment::Assignment, conflict::ConflictEngine, model::VariableId};

/// A strategy for picking the variable whose value is reconsidered in the
/// next change.
///
/// The contract: over many invocations on a fixed assignment with `k`
/// conflicted variables, each conflicted variable is chosen with probability
/// `1/k`, and no unconflicted variable is ever chosen while `k > 0`. When no
/// variable is conflicted, implementations fall back to a uniform pick over
/// all variables.
pub trait VariableSelectionHeuristic {
    fn select_variable(
        &self,
        engine: &ConflictEngine<'_>,
        assignment: &Assignment,
        rng: &mut dyn RngCore,
    ) -> VariableId;
}

/// Collects every conflicted variable into a candidate list, then picks one
/// uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictedVariableHeuristic;

impl VariableSelectionHeuristic for ConflictedVariableHeuristic {
    fn select_variable(
        &self,
        engine: &ConflictEngine<'_>,
        assignment: &Assignment,
        rng: &mut dyn RngCore,
    ) -> VariableId {
        let candidates: Vec<VariableId> = (0..assignment.len())
            .filter(|&variable| engine.is_conflicted(assignment, variable))
            .collect();

        match candidates.choose(rng) {
            Some(&variable) => variable,
            None => rng.gen_range(0..assignment.len()),
        }
    }
}

/// Reservoir-samples the conflicted variables in a single pass, avoiding the
/// candidate allocation. Distributionally equivalent to
/// [`ConflictedVariableHeuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservoirConflictedHeuristic;

impl VariableSelectionHeuristic for ReservoirConflictedHeuristic {
    fn select_variable(
        &self,
        engine: &ConflictEngine<'_>,
        assignment: &Assignment,
        rng: &mut dyn RngCore,
    ) -> VariableId {
        let mut selected = None;
        let mut seen = 0usize;
        for variable in 0..assignment.len() {
            if engine.is_conflicted(assignment, variable) {
                seen += 1;
                if rng.gen_range(0..seen) == 0 {
                    selected = Some(variable);
                }
            }
        }
        selected.unwrap_or_else(|| rng.gen_range(0..assignment.len()))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::solver::model::{ConstraintKind, ConstraintMatrix};

    /// Three mutually must-differ variables, all on the same slot: every
    /// variable is conflicted. Variable 3 is untouched by any constraint.
    fn conflicted_fixture() -> (ConstraintMatrix, Assignment) {
        let mut matrix = ConstraintMatrix::new(4);
        matrix.set(0, 1, ConstraintKind::MustDiffer);
        matrix.set(0, 2, ConstraintKind::MustDiffer);
        matrix.set(1, 2, ConstraintKind::MustDiffer);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut assignment = Assignment::random(4, 6, &mut rng);
        for variable in 0..4 {
            assignment.set(variable, 2);
        }
        (matrix, assignment)
    }

    fn selection_counts(
        heuristic: &dyn VariableSelectionHeuristic,
        draws: usize,
    ) -> [usize; 4] {
        let (matrix, assignment) = conflicted_fixture();
        let engine = ConflictEngine::new(&matrix);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[heuristic.select_variable(&engine, &assignment, &mut rng)] += 1;
        }
        counts
    }

    fn assert_uniform_over_conflicted(counts: [usize; 4], draws: usize) {
        // Variable 3 has no constraints and must never be picked.
        assert_eq!(counts[3], 0);
        // The three conflicted variables each expect draws/3; allow a wide
        // statistical tolerance around it.
        let expected = draws as f64 / 3.0;
        for &count in &counts[..3] {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.15,
                "selection frequency off: counts={counts:?}"
            );
        }
    }

    #[test]
    fn candidate_list_heuristic_is_uniform_over_conflicted_variables() {
        let counts = selection_counts(&ConflictedVariableHeuristic, 3000);
        assert_uniform_over_conflicted(counts, 3000);
    }

    #[test]
    fn reservoir_heuristic_is_uniform_over_conflicted_variables() {
        let counts = selection_counts(&ReservoirConflictedHeuristic, 3000);
        assert_uniform_over_conflicted(counts, 3000);
    }

    #[test]
    fn falls_back_to_any_variable_when_nothing_is_conflicted() {
        let matrix = ConstraintMatrix::new(4);
        let engine = ConflictEngine::new(&matrix);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let assignment = Assignment::random(4, 6, &mut rng);
        for _ in 0..50 {
            let picked =
                ConflictedVariableHeuristic.select_variable(&engine, &assignment, &mut rng);
            assert!(picked < 4);
            let picked =
                ReservoirConflictedHeuristic.select_variable(&engine, &assignment, &mut rng);
            assert!(picked < 4);
        }
    }
}
