//! The local-search solver: constraint model, conflict evaluation, selection
//! heuristics, tabu memory, and the try/change loop that drives them.

pub mod assignment;
pub mod batch;
pub mod conflict;
pub mod heuristics;
pub mod model;
pub mod search;
pub mod stats;
pub mod tabu;
