//! The reader of DIMACS CNF input.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    encoding::Encoding,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
        variable::Variable,
    },
    types::err::{self, ErrorKind},
};

impl Encoding {
    /// Reads DIMACS input into a fresh encoding.
    ///
    /// The returned encoding has the declared count of variables, each named by its DIMACS index, and the parsed clauses in file order.
    /// Clauses are taken as written --- duplicate literals are kept, and literal order within a clause is preserved.
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// let encoding = Encoding::from_dimacs("p cnf 2 2\n1 -2 0\n-1 2 0\n".as_bytes()).unwrap();
    ///
    /// assert_eq!(encoding.variable_count(), 2);
    /// assert_eq!(encoding.clause_count(), 2);
    /// ```
    ///
    /// Each way an input may be malformed surfaces a distinct [ParseError](err::ParseError):
    ///
    /// ```rust
    /// # use cnf_scribe::encoding::Encoding;
    /// # use cnf_scribe::types::err::{ErrorKind, ParseError};
    /// let result = Encoding::from_dimacs("p cnf 2 1\n1 3 0\n".as_bytes());
    ///
    /// assert_eq!(result.err(), Some(ErrorKind::Parse(ParseError::OutOfBoundsLiteral(3))));
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead) -> Result<Encoding, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read to the problem line.
        let (variable_count, clause_count) = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None => continue 'preamble_loop,
                Some('c') => continue 'preamble_loop,
                Some('p') => break 'preamble_loop problem_line(&buffer)?,
                Some(_) => {
                    return Err(ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }
            }
        };

        log::info!(target: targets::PARSER, "Expected {variable_count} variables and {clause_count} clauses");

        if variable_count > (Variable::MAX - 1) as usize {
            return Err(ErrorKind::from(err::EncodingError::VariablesExhausted));
        }

        let mut clauses: Vec<CClause> = Vec::with_capacity(clause_count);
        let mut clause_buffer: CClause = Vec::default();

        // Second phase, read to the end of the formula.
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None => continue 'formula_loop,
                Some('%') => break 'formula_loop,
                Some('c') => continue 'formula_loop,
                Some(_) => {}
            }

            for item in buffer.split_whitespace() {
                if clauses.len() == clause_count {
                    return Err(ErrorKind::from(err::ParseError::TrailingContent(
                        line_counter,
                    )));
                }

                match item {
                    "0" => clauses.push(std::mem::take(&mut clause_buffer)),
                    _ => {
                        let int = match item.parse::<isize>() {
                            Ok(int) => int,
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::Line(line_counter)))
                            }
                        };

                        let magnitude = int.unsigned_abs();
                        if magnitude == 0 || magnitude > variable_count {
                            return Err(ErrorKind::from(err::ParseError::OutOfBoundsLiteral(int)));
                        }

                        clause_buffer.push(CLiteral::new(magnitude as Variable, int.is_positive()));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(ErrorKind::from(err::ParseError::MissingZero));
        }

        if clauses.len() != clause_count {
            return Err(ErrorKind::from(err::ParseError::ClauseCountMismatch {
                declared: clause_count,
                found: clauses.len(),
            }));
        }

        let mut encoding = Encoding::new();
        encoding.next_variable = variable_count as Variable + 1;
        encoding.clauses = clauses;
        for variable in 1..=variable_count {
            encoding
                .names
                .insert(variable as Variable, format!("DIMACS var {variable}"));
        }

        Ok(encoding)
    }

    /// Reads the DIMACS file at the given path into a fresh encoding.
    ///
    /// The file handle is held only for the duration of the call.
    pub fn from_dimacs_file(path: impl AsRef<Path>) -> Result<Encoding, ErrorKind> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return Err(ErrorKind::from(err::ParseError::NoFile)),
        };
        Encoding::from_dimacs(BufReader::new(file))
    }
}

/// The variable and clause counts of a problem line, or a specification error.
fn problem_line(buffer: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = buffer.split_whitespace();

    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
    }

    let variable_count: usize = match details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    };

    let clause_count: usize = match details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    };

    match details.next() {
        None => Ok((variable_count, clause_count)),
        Some(_) => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    }
}
