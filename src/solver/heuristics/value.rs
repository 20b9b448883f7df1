//! Heuristics for choosing a variable's replacement value.

use crate::solver::{
    assignment::Assignment,
    conflict::ConflictEngine,
    model::{Timeslot, VariableId},
    tabu::TabuList,
};

/// A scored candidate reassignment for one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub value: Timeslot,
    /// Total conflict count the assignment would have after taking `value`.
    pub cost: usize,
}

/// Tabu admissibility state threaded into value selection by the tabu search
/// variant.
#[derive(Debug, Clone, Copy)]
pub struct TabuContext<'a> {
    pub list: &'a TabuList,
    /// Best conflict count observed anywhere in the run so far; a tabu value
    /// beating it stays eligible (the aspiration criterion).
    pub best_conflicts: usize,
}

/// A strategy for picking the conflict-minimizing value for a variable.
pub trait ValueSelectionHeuristic {
    /// Scores every domain value other than the variable's current one and
    /// returns the admissible minimum, or `None` when no candidate is
    /// admissible. The assignment is borrowed mutably for tentative
    /// evaluation but is restored before returning.
    fn select_value(
        &self,
        engine: &ConflictEngine<'_>,
        assignment: &mut Assignment,
        variable: VariableId,
        tabu: Option<&TabuContext<'_>>,
    ) -> Option<Candidate>;
}

/// Exhaustive domain scan: tentatively assign each value, score the whole
/// assignment, keep the minimum. Ties break toward the smallest value index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinConflictsValueHeuristic;

impl ValueSelectionHeuristic for MinConflictsValueHeuristic {
    fn select_value(
        &self,
        engine: &ConflictEngine<'_>,
        assignment: &mut Assignment,
        variable: VariableId,
        tabu: Option<&TabuContext<'_>>,
    ) -> Option<Candidate> {
        let original = assignment.get(variable);
        let mut best: Option<Candidate> = None;

        for value in 0..assignment.num_values() {
            if value == original {
                continue;
            }
            assignment.set(variable, value);
            let cost = engine.total_conflicts(assignment);

            let admissible = match tabu {
                Some(context) => {
                    !context.list.contains(variable, value) || cost < context.best_conflicts
                }
                None => true,
            };
            // Strict improvement over the running minimum, so the smallest
            // value index wins ties.
            if admissible && best.map_or(true, |candidate| cost < candidate.cost) {
                best = Some(Candidate { value, cost });
            }
        }

        assignment.set(variable, original);
        best
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::solver::model::{ConstraintKind, ConstraintMatrix};

    fn pair_matrix() -> ConstraintMatrix {
        let mut matrix = ConstraintMatrix::new(2);
        matrix.set(0, 1, ConstraintKind::MustDiffer);
        matrix
    }

    fn assignment_of(slots: &[usize], num_values: usize) -> Assignment {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut assignment = Assignment::random(slots.len(), num_values, &mut rng);
        for (variable, &value) in slots.iter().enumerate() {
            assignment.set(variable, value);
        }
        assignment
    }

    #[test]
    fn picks_the_conflict_minimizing_value() {
        let matrix = pair_matrix();
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[1, 1], 3);

        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, None)
            .unwrap();
        // Values 0 and 2 both resolve the conflict; the tie breaks low.
        assert_eq!(candidate, Candidate { value: 0, cost: 0 });
    }

    #[test]
    fn skips_the_current_value_and_restores_the_assignment() {
        let matrix = pair_matrix();
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[1, 2], 3);
        let before = assignment.clone();

        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, None)
            .unwrap();
        assert_ne!(candidate.value, 1);
        assert_eq!(assignment, before);
    }

    #[test]
    fn tie_breaks_toward_the_smallest_value() {
        // No constraints: every value costs 0; the scan must return value 0
        // (or 1 when 0 is the current value).
        let matrix = ConstraintMatrix::new(2);
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[2, 2], 6);
        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, None)
            .unwrap();
        assert_eq!(candidate.value, 0);

        assignment.set(0, 0);
        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, None)
            .unwrap();
        assert_eq!(candidate.value, 1);
    }

    #[test]
    fn tabu_values_are_skipped() {
        let matrix = pair_matrix();
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[1, 1], 3);

        let mut list = TabuList::new(10);
        list.record(0, 0);
        let context = TabuContext {
            list: &list,
            // Best so far is already 0, so nothing can aspire past the list.
            best_conflicts: 0,
        };
        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, Some(&context))
            .unwrap();
        // Value 0 is tabu; value 2 is the remaining conflict-free choice.
        assert_eq!(candidate, Candidate { value: 2, cost: 0 });
    }

    #[test]
    fn aspiration_overrides_the_tabu_list() {
        let matrix = pair_matrix();
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[1, 1], 3);

        let mut list = TabuList::new(10);
        list.record(0, 0);
        list.record(0, 2);
        // Every alternative is tabu, but a cost of 0 beats the best seen so
        // far, so both stay eligible and the smallest wins.
        let context = TabuContext {
            list: &list,
            best_conflicts: 1,
        };
        let candidate = MinConflictsValueHeuristic
            .select_value(&engine, &mut assignment, 0, Some(&context))
            .unwrap();
        assert_eq!(candidate, Candidate { value: 0, cost: 0 });
    }

    #[test]
    fn returns_none_when_every_candidate_is_inadmissible() {
        let matrix = pair_matrix();
        let engine = ConflictEngine::new(&matrix);
        let mut assignment = assignment_of(&[1, 1], 3);
        let before = assignment.clone();

        let mut list = TabuList::new(10);
        list.record(0, 0);
        list.record(0, 2);
        let context = TabuContext {
            list: &list,
            best_conflicts: 0,
        };
        let candidate =
            MinConflictsValueHeuristic.select_value(&engine, &mut assignment, 0, Some(&context));
        assert_eq!(candidate, None);
        assert_eq!(assignment, before);
    }
}
