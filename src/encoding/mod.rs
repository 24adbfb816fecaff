/*!
The encoding --- to which variables and clauses are added, etc.

An [Encoding] is the aggregate root of the library: a monotonically growing namespace of variables, an ordered collection of clauses, a partial map from variables to advisory names, and the scope prefix applied to names as they are recorded.

Identifiers are handed out densely: the variables of an encoding are exactly 1 up to (and excluding) the next fresh variable, with no gaps and no repeats.
Names never affect identifiers or semantics --- they exist for diagnostics and for comment lines in DIMACS output.

Clauses are stored, and serialized, in the order they were added.

# Failure

Build operations return [Result]s whose error channel carries diagnostics only --- a failure does not roll the threaded encoding back.
Mutations applied before a failing step survive in the encoding, and [run_new_or](Encoding::run_new_or) may be used to recover the threaded state when the caller has otherwise guaranteed success.

# Example

```rust
# use cnf_scribe::encoding::Encoding;
# use cnf_scribe::structures::literal::{CLiteral, Literal};
let mut encoding = Encoding::new();

let p = encoding.fresh_variable("p").unwrap();
let q = encoding.fresh_variable("q").unwrap();

encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]);

assert_eq!(encoding.variable_count(), 2);
assert_eq!(encoding.clause_count(), 1);
assert_eq!(encoding.name_of(p), Some("p"));
assert_eq!(encoding.name_of(3), None);
```
*/

mod block;
pub use block::{BlockEntry, VariableBlock};
mod build;

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::{
    structures::{clause::CClause, variable::Variable},
    types::err::ErrorKind,
};

/// An encoding of a formula in conjunctive normal form, under construction.
pub struct Encoding {
    /// The next variable identifier to hand out.
    pub(crate) next_variable: Variable,

    /// The accumulated clauses, in addition order.
    pub(crate) clauses: Vec<CClause>,

    /// Advisory names, keyed by variable.
    /// Every key is strictly below `next_variable`.
    pub(crate) names: HashMap<Variable, String>,

    /// The prefix applied to names recorded by variable allocation.
    pub(crate) scope: String,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoding {
    /// An empty encoding: no variables, no clauses, no names, an empty scope.
    pub fn new() -> Self {
        Encoding {
            next_variable: 1,
            clauses: Vec::default(),
            names: HashMap::default(),
            scope: String::default(),
        }
    }

    /// The count of variables allocated, so far.
    pub fn variable_count(&self) -> usize {
        (self.next_variable - 1) as usize
    }

    /// The count of clauses added, so far.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the encoding, in addition order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The name recorded for a variable, if any.
    /// Absence of a name is a normal, expected case.
    pub fn name_of(&self, variable: Variable) -> Option<&str> {
        self.names.get(&variable).map(|name| name.as_str())
    }

    /// An iterator over all (variable, name) pairs, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = (Variable, &str)> {
        self.names
            .iter()
            .map(|(variable, name)| (*variable, name.as_str()))
    }

    /// The scope prefix currently applied to names, likely empty.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Runs a closed build from an empty encoding, yielding the value built together with the final encoding, or the diagnostic with which the build was aborted.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::structures::literal::{CLiteral, Literal};
    /// let (p, encoding) = Encoding::run_new(|encoding| {
    ///     let p = encoding.fresh_variable("p")?;
    ///     encoding.add_clause(CLiteral::new(p, true));
    ///     Ok(p)
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(p, 1);
    /// assert_eq!(encoding.clause_count(), 1);
    /// ```
    pub fn run_new<T>(
        build: impl FnOnce(&mut Encoding) -> Result<T, ErrorKind>,
    ) -> Result<(T, Encoding), ErrorKind> {
        let mut encoding = Encoding::new();
        let value = build(&mut encoding)?;
        Ok((value, encoding))
    }

    /// As [run_new](Encoding::run_new), though total: on failure the given default value is substituted and the threaded encoding is returned as-is.
    ///
    /// For use when the caller has otherwise guaranteed the build succeeds.
    pub fn run_new_or<T>(
        default: T,
        build: impl FnOnce(&mut Encoding) -> Result<T, ErrorKind>,
    ) -> (T, Encoding) {
        let mut encoding = Encoding::new();
        match build(&mut encoding) {
            Ok(value) => (value, encoding),
            Err(_) => (default, encoding),
        }
    }

    /// Permutes the order of clauses, and, independently, the order of literals within each clause, uniformly at random.
    ///
    /// Scrambling removes accidental structure before handing a formula to a solver, and does not alter semantic content --- the same multiset of clauses remains, each with the same multiset of literals.
    ///
    /// The source of randomness is supplied by the caller, so a scramble may be reproduced from a seed.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::generic::random::MinimalPCG32;
    /// # use rand::SeedableRng;
    /// # let mut encoding = Encoding::new();
    /// let mut rng = MinimalPCG32::seed_from_u64(42);
    /// encoding.scramble(&mut rng);
    /// ```
    pub fn scramble(&mut self, rng: &mut impl rand::Rng) {
        for clause in &mut self.clauses {
            clause.shuffle(rng);
        }
        self.clauses.shuffle(rng);
    }
}
