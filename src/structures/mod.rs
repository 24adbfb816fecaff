//! Value-level structures: variables, literals, and clauses.

pub mod clause;
pub mod literal;
pub mod variable;
