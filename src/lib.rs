//! Mincon is a randomized local-search solver for exam-timetabling style
//! binary constraint satisfaction problems.
//!
//! An instance is a set of variables (exams), each taking a timeslot from a
//! domain derived from the number of examination days, plus a matrix of
//! pairwise constraints between them. The solver repeatedly restarts from a
//! random complete assignment and repairs it one variable at a time, always
//! moving toward the value that minimizes the total conflict count.
//!
//! # Core Concepts
//!
//! - **[`ConstraintMatrix`]**: the read-only pairwise constraint table,
//!   loadable from delimited text.
//! - **[`SearchStrategy`]**: a complete search algorithm. Two are provided:
//!   [`MinConflictsSearch`] (commit only non-worsening moves) and
//!   [`TabuSearch`] (always commit the best admissible move, remembering
//!   recently vacated values in a bounded tabu list with an aspiration
//!   override).
//! - **[`SearchReport`]**: the returned outcome — terminal status, the
//!   solution when found, the move count, and the best conflict count seen.
//!
//! The random source is injected, so seeded runs are reproducible while
//! production runs stay genuinely random.
//!
//! # Example
//!
//! ```
//! use mincon::solver::model::{ConstraintKind, ConstraintMatrix};
//! use mincon::solver::search::{MinConflictsSearch, SearchConfig, SearchStatus, SearchStrategy};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Three exams over one day; the first two must not share a slot.
//! let mut matrix = ConstraintMatrix::new(3);
//! matrix.set(0, 1, ConstraintKind::MustDiffer);
//!
//! let config = SearchConfig::new(3, 5, 10);
//! let search = MinConflictsSearch::new(config);
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let report = search.solve(&matrix, &mut rng).unwrap();
//! assert_eq!(report.status, SearchStatus::Solved);
//! let slots = report.assignment.unwrap();
//! assert_ne!(slots[0], slots[1]);
//! ```
//!
//! [`ConstraintMatrix`]: solver::model::ConstraintMatrix
//! [`SearchStrategy`]: solver::search::SearchStrategy
//! [`MinConflictsSearch`]: solver::search::MinConflictsSearch
//! [`TabuSearch`]: solver::search::TabuSearch
//! [`SearchReport`]: solver::search::SearchReport

pub mod error;
pub mod solver;
