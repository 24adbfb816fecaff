//! A library for incrementally constructing boolean formulas in conjunctive normal form.
//!
//! cnf_scribe is the bookkeeping half of a SAT workflow: it hands out fresh propositional variables, accumulates clauses, attaches advisory human-readable names to variables for diagnostics, and moves the resulting formula to and from the DIMACS CNF interchange format.
//! It does no solving --- a finished encoding is intended to be written out and handed to a solver.
//!
//! # Orientation
//!
//! The library is designed around the core structure of an [encoding](encoding::Encoding).
//!
//! An encoding owns a monotonically growing namespace of variables and an ordered collection of clauses.
//! Variables are obtained through [fresh_variable](encoding::Encoding::fresh_variable) and friends, clauses are added through [add_clause](encoding::Encoding::add_clause), and the whole encoding may be read from or written to DIMACS text.
//!
//! Useful starting points:
//! - The [encoding] module, for the state an encoding carries and the operations which build it.
//! - The [structures] module, for variables, literals, and clauses as values.
//! - The [dimacs] module, for the reader and writer of DIMACS CNF text.
//! - [VariableBlock](encoding::VariableBlock), for allocating a contiguous multi-dimensional block of variables with array-like access.
//!
//! # Examples
//!
//! + Build a small encoding and write it as DIMACS.
//!
//! ```rust
//! use cnf_scribe::encoding::Encoding;
//! use cnf_scribe::structures::literal::{CLiteral, Literal};
//!
//! let mut encoding = Encoding::new();
//!
//! let p = encoding.fresh_variable("p").unwrap();
//! let q = encoding.fresh_variable("q").unwrap();
//!
//! encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
//! encoding.add_clause(CLiteral::new(q, true));
//!
//! let dimacs = encoding.as_dimacs();
//!
//! assert!(dimacs.contains("c 1 p"));
//! assert!(dimacs.contains("p cnf 2 2"));
//! assert!(dimacs.ends_with("1 -2 0\n2 0\n"));
//! ```
//!
//! + Read a DIMACS formula back into an encoding.
//!
//! ```rust
//! use cnf_scribe::encoding::Encoding;
//!
//! let dimacs = "c an example
//! p cnf 3 2
//! 1 -2 0
//! 2 3 0
//! ";
//!
//! let encoding = Encoding::from_dimacs(dimacs.as_bytes()).unwrap();
//!
//! assert_eq!(encoding.variable_count(), 3);
//! assert_eq!(encoding.clause_count(), 2);
//! assert_eq!(encoding.name_of(2), Some("DIMACS var 2"));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a handful of targets to help narrow output to relevant parts of the library.
//! No log implementation is provided.
//! The targets are listed in [misc::log].

pub mod dimacs;
pub mod encoding;
pub mod generic;
pub mod misc;
pub mod structures;
pub mod types;
