//! Conflict evaluation against the constraint matrix.

use crate::solver::{
    assignment::Assignment,
    model::{ConstraintMatrix, VariableId},
};

/// Scores assignments against a [`ConstraintMatrix`].
///
/// Both entry points share one pair-level predicate
/// ([`crate::solver::model::ConstraintKind::violated`]), so the per-variable
/// view can never disagree with the total count about which pairs are
/// violated.
#[derive(Debug, Clone, Copy)]
pub struct ConflictEngine<'a> {
    matrix: &'a ConstraintMatrix,
}

impl<'a> ConflictEngine<'a> {
    pub fn new(matrix: &'a ConstraintMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &ConstraintMatrix {
        self.matrix
    }

    /// Total number of violated pairs `(i, j)` with `i < j`. O(n²); this is
    /// the hot path of the search, called once per candidate value.
    pub fn total_conflicts(&self, assignment: &Assignment) -> usize {
        let n = self.matrix.variable_count();
        let mut conflicts = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(kind) = self.matrix.kind(i, j) {
                    if kind.violated(assignment.get(i), assignment.get(j)) {
                        conflicts += 1;
                    }
                }
            }
        }
        conflicts
    }

    /// Whether `variable` participates in at least one violated pair.
    ///
    /// Pairs are always evaluated in upper-triangle orientation, with the
    /// lower-indexed variable's value first, so asymmetric constraints keep
    /// their direction no matter which endpoint is being queried.
    pub fn is_conflicted(&self, assignment: &Assignment, variable: VariableId) -> bool {
        let n = self.matrix.variable_count();
        (0..n).filter(|&other| other != variable).any(|other| {
            let (i, j) = if variable < other {
                (variable, other)
            } else {
                (other, variable)
            };
            self.matrix
                .kind(i, j)
                .is_some_and(|kind| kind.violated(assignment.get(i), assignment.get(j)))
        })
    }
}
