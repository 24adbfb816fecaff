//! Operations for building an encoding.

use crate::{
    encoding::Encoding,
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        variable::Variable,
    },
    types::err::{self, ErrorKind},
};

/// Methods for building an encoding.
impl Encoding {
    /// Allocates a fresh variable, recording the given name under the current scope.
    ///
    /// Identifiers are handed out in increasing order with no gaps, starting from 1.
    /// Names are advisory: neither validated nor required to be unique.
    pub fn fresh_variable(&mut self, name: &str) -> Result<Variable, ErrorKind> {
        if self.next_variable == Variable::MAX {
            return Err(ErrorKind::from(err::EncodingError::VariablesExhausted));
        }

        let variable = self.next_variable;
        self.next_variable += 1;
        self.names.insert(variable, format!("{}{name}", self.scope));

        log::trace!(target: targets::ENCODING, "Variable {variable} allocated as {:?}", self.names.get(&variable));
        Ok(variable)
    }

    /// Allocates a fresh variable with a synthetic name which embeds the identifier about to be assigned.
    ///
    /// As identifiers are never repeated, temporary names are collision-free within a build.
    pub fn fresh_temporary(&mut self) -> Result<Variable, ErrorKind> {
        let name = format!("tmp{}", self.next_variable);
        self.fresh_variable(&name)
    }

    /// Adds a clause to the encoding.
    ///
    /// The clause is taken as-is: no check is made that its literals reference allocated variables, that being the caller's responsibility.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::structures::literal::{CLiteral, Literal};
    /// let mut encoding = Encoding::new();
    /// let p = encoding.fresh_variable("p").unwrap();
    /// let q = encoding.fresh_variable("q").unwrap();
    ///
    /// encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
    /// encoding.add_clause(CLiteral::new(q, true));
    ///
    /// assert_eq!(encoding.clause_count(), 2);
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) {
        let clause = clause.canonical();
        log::trace!(target: targets::ENCODING, "Clause added: {}", clause.as_dimacs(true));
        self.clauses.push(clause);
    }

    /// Runs a build with the scope extended by the given name, restoring the exact prior scope afterwards --- on success and on failure alike.
    ///
    /// Variables allocated within the build are named under the extended scope.
    /// Restoration affects only future allocations, never already-recorded names.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::types::err::ErrorKind;
    /// let mut encoding = Encoding::new();
    ///
    /// let x = encoding
    ///     .scoped("a", |encoding| encoding.scoped("b", |encoding| encoding.fresh_variable("x")))
    ///     .unwrap();
    /// let y = encoding.fresh_variable("y").unwrap();
    ///
    /// assert_eq!(encoding.name_of(x), Some("abx"));
    /// assert_eq!(encoding.name_of(y), Some("y"));
    /// ```
    pub fn scoped<T>(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut Self) -> Result<T, ErrorKind>,
    ) -> Result<T, ErrorKind> {
        let saved = self.scope.clone();
        self.scope.push_str(name);

        let outcome = build(self);

        self.scope = saved;
        outcome
    }
}
