//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, ordered as given.
//!
//! ```rust
//! # use cnf_scribe::structures::clause::Clause;
//! # use cnf_scribe::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//! ```
//!
//! - A single literal is identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - Once added to an [encoding](crate::encoding::Encoding) a clause is immutable.

use crate::structures::{
    literal::{CLiteral, Literal},
    variable::Variable,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all variables in the clause, in clause order.
    fn variables(&self) -> impl Iterator<Item = Variable>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut string = String::new();
        for literal in self {
            string.push_str(&format!("{} ", literal.as_int()));
        }
        match zero {
            true => string.push('0'),
            false => {
                string.pop();
            }
        }
        string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn variables(&self) -> impl Iterator<Item = Variable> {
        self.iter().map(|literal| literal.variable())
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{} 0", self.as_int()),
            false => self.as_int().to_string(),
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn variables(&self) -> impl Iterator<Item = Variable> {
        std::iter::once(self.variable())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
