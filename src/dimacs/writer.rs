//! The writer of DIMACS CNF output.

use std::fmt::Write as _;

use crate::{
    encoding::Encoding,
    structures::clause::Clause,
};

impl Encoding {
    /// The encoding as a DIMACS document.
    ///
    /// A comment line `c <variable> <name>` is emitted for each named variable in ascending variable order, followed by the problem line, followed by the clauses in addition order.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::structures::literal::{CLiteral, Literal};
    /// let mut encoding = Encoding::new();
    /// let p = encoding.fresh_variable("p").unwrap();
    /// let q = encoding.fresh_variable("q").unwrap();
    /// encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
    ///
    /// assert_eq!(encoding.as_dimacs(), "c 1 p
    /// c 2 q
    /// p cnf 2 1
    /// 1 -2 0
    /// ");
    /// ```
    pub fn as_dimacs(&self) -> String {
        let mut document = String::new();

        let mut named = self.names().collect::<Vec<_>>();
        named.sort_unstable();
        for (variable, name) in named {
            let _ = writeln!(document, "c {variable} {name}");
        }

        let _ = writeln!(
            document,
            "p cnf {} {}",
            self.variable_count(),
            self.clause_count()
        );

        for clause in self.clauses() {
            let _ = writeln!(document, "{}", clause.as_dimacs(true));
        }

        document
    }

    /// Writes the encoding as a DIMACS document.
    ///
    /// ```rust,ignore
    /// encoding.write_dimacs(BufWriter::new(&file))?;
    /// ```
    pub fn write_dimacs(&self, mut writer: impl std::io::Write) -> std::io::Result<()> {
        writer.write_all(self.as_dimacs().as_bytes())
    }
}
