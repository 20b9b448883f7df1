//! Variable- and value-selection policies for the local search.

pub mod value;
pub mod variable;
