//! The constraint model: timeslot arithmetic, pairwise constraint kinds, and
//! the matrix that owns them.
//!
//! A timetabling instance assigns each variable (an exam) a timeslot. Days are
//! divided into [`SLOTS_PER_DAY`] slots, so timeslot `t` falls on day
//! `t / SLOTS_PER_DAY` at slot `t % SLOTS_PER_DAY` within that day. The
//! pairwise constraints between variables are held in a [`ConstraintMatrix`],
//! which is read-only for the whole search and can be shared across runs.

use std::path::Path;

use crate::error::{Result, SolverError};

pub type VariableId = usize;
pub type Timeslot = usize;

/// Number of examination slots in a day. The value domain for `d` days is
/// `[0, d * SLOTS_PER_DAY)`.
pub const SLOTS_PER_DAY: usize = 3;

/// The day a timeslot falls on.
pub fn day(t: Timeslot) -> usize {
    t / SLOTS_PER_DAY
}

/// The slot within its day a timeslot falls on.
pub fn slot_in_day(t: Timeslot) -> usize {
    t % SLOTS_PER_DAY
}

/// A pairwise constraint between two variables `(i, j)` with `i < j`.
///
/// The numeric codes come from the matrix input format; code 0 and any
/// unrecognized code mean "no constraint" and decode to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Code 1: the two exams must not share a timeslot.
    MustDiffer,
    /// Code 2: the two exams must be at least three days apart.
    MinDayGap,
    /// Code 3: the two exams must not share a day.
    DifferentDay,
    /// Code 4: both exams on the same day, the lower-indexed one in a
    /// strictly earlier slot.
    OrderedSameDay,
}

impl ConstraintKind {
    /// Decodes a matrix cell. Codes outside `1..=4` carry no constraint.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ConstraintKind::MustDiffer),
            2 => Some(ConstraintKind::MinDayGap),
            3 => Some(ConstraintKind::DifferentDay),
            4 => Some(ConstraintKind::OrderedSameDay),
            _ => None,
        }
    }

    /// Returns `true` if the pair `(a, b)` violates this constraint.
    ///
    /// `a` belongs to the lower-indexed variable of the pair; the ordering
    /// matters for [`ConstraintKind::OrderedSameDay`], which requires `a`
    /// strictly before `b` within a shared day.
    pub fn violated(self, a: Timeslot, b: Timeslot) -> bool {
        match self {
            ConstraintKind::MustDiffer => a == b,
            ConstraintKind::MinDayGap => day(a).abs_diff(day(b)) <= 2,
            ConstraintKind::DifferentDay => day(a) == day(b),
            ConstraintKind::OrderedSameDay => !(day(a) == day(b) && slot_in_day(a) < slot_in_day(b)),
        }
    }
}

/// A square table of pairwise constraints, sized to the instance's variable
/// count. Only the upper triangle (`i < j`) is authoritative; everything else
/// is ignored by the conflict engine.
#[derive(Debug, Clone)]
pub struct ConstraintMatrix {
    variables: usize,
    cells: Vec<Option<ConstraintKind>>,
}

impl ConstraintMatrix {
    /// Creates an empty matrix (no constraints) over `variables` variables.
    pub fn new(variables: usize) -> Self {
        Self {
            variables,
            cells: vec![None; variables * variables],
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// The constraint between variables `i` and `j`, if any. Callers are
    /// expected to query the upper triangle (`i < j`).
    pub fn kind(&self, i: VariableId, j: VariableId) -> Option<ConstraintKind> {
        self.cells[i * self.variables + j]
    }

    pub fn set(&mut self, i: VariableId, j: VariableId, kind: ConstraintKind) {
        self.cells[i * self.variables + j] = Some(kind);
    }

    /// Builds a matrix from comma-separated text, one row per line.
    ///
    /// An empty or unparseable field is code 0 ("no constraint"), matching
    /// the input format's contract that malformed cells are not errors.
    /// Rows and fields beyond `variables` are ignored; missing ones default
    /// to no constraint.
    pub fn from_csv_str(text: &str, variables: usize) -> Self {
        let mut matrix = Self::new(variables);
        for (row, line) in text.lines().take(variables).enumerate() {
            for (col, field) in line.split(',').take(variables).enumerate() {
                let code = field.trim().parse::<i64>().unwrap_or(0);
                matrix.cells[row * variables + col] = ConstraintKind::from_code(code);
            }
        }
        matrix
    }

    /// Reads a matrix from a delimited text file. An unreadable file is fatal
    /// to the caller; the contents themselves are never an error.
    pub fn load_csv(path: impl AsRef<Path>, variables: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SolverError::MatrixIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_csv_str(&text, variables))
    }
}
