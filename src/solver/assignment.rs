//! A complete assignment of timeslots to variables.

use rand::{Rng, RngCore};

use crate::solver::model::{Timeslot, VariableId};

/// An owned, always-total assignment: one timeslot per variable.
///
/// The assignment knows its own value-domain size so it can re-randomize
/// itself in place at the start of every try. During a change, exactly one
/// variable is mutated through [`Assignment::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Timeslot>,
    num_values: usize,
}

impl Assignment {
    /// Creates a fully randomized assignment, each variable drawn uniformly
    /// from `[0, num_values)`.
    pub fn random(variables: usize, num_values: usize, rng: &mut dyn RngCore) -> Self {
        let mut assignment = Self {
            slots: vec![0; variables],
            num_values,
        };
        assignment.randomize(rng);
        assignment
    }

    /// Re-draws every variable's value uniformly, in place.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        for slot in &mut self.slots {
            *slot = rng.gen_range(0..self.num_values);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Size of the value domain each variable draws from.
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    pub fn get(&self, variable: VariableId) -> Timeslot {
        self.slots[variable]
    }

    pub fn set(&mut self, variable: VariableId, value: Timeslot) {
        debug_assert!(value < self.num_values);
        self.slots[variable] = value;
    }

    pub fn slots(&self) -> &[Timeslot] {
        &self.slots
    }

    /// Consumes the assignment, yielding the raw timeslot vector.
    pub fn into_slots(self) -> Vec<Timeslot> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn random_assignment_is_total_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let assignment = Assignment::random(73, 15, &mut rng);
        assert_eq!(assignment.len(), 73);
        assert!(assignment.slots().iter().all(|&v| v < 15));
    }

    #[test]
    fn randomize_keeps_length_and_domain() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut assignment = Assignment::random(10, 6, &mut rng);
        let before = assignment.clone();
        assignment.randomize(&mut rng);
        assert_eq!(assignment.len(), before.len());
        assert_eq!(assignment.num_values(), 6);
        assert!(assignment.slots().iter().all(|&v| v < 6));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut assignment = Assignment::random(5, 9, &mut rng);
        assignment.set(2, 7);
        assert_eq!(assignment.get(2), 7);
    }
}
