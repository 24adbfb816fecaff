//! Error types used in the library.
//!
//! - Parse errors are external --- malformed DIMACS input is expected from time to time, and each failure carries enough detail to locate the defect.
//! - Block errors are programming errors, caught at construction or access time rather than deferred to first use.
//! - Build diagnostics are a free-form string channel for aborting an encoding build; these are meant for developer-time debugging of an encoder, not production fault handling.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The crate-level error, wrapping the specific kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Block(BlockError),
    Encoding(EncodingError),
    Parse(ParseError),

    /// A free-form diagnostic with which a build was aborted.
    Build(String),
}

impl ErrorKind {
    /// A build diagnostic from anything string-like.
    pub fn build(diagnostic: impl Into<String>) -> Self {
        ErrorKind::Build(diagnostic.into())
    }
}

/// Errors during parsing of DIMACS input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem line of a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// Clause data was read before the problem line of the input.
    MisplacedProblem(usize),

    /// A literal whose variable is 0 or exceeds the declared variable count.
    OutOfBoundsLiteral(isize),

    /// The input ended inside a clause, before the terminating `0` was read.
    MissingZero,

    /// Content after the declared clause count was met.
    TrailingContent(usize),

    /// Fewer clauses were read than the problem line declared.
    ClauseCountMismatch {
        declared: usize,
        found: usize,
    },

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => {
                write!(f, "Malformed problem line, expected `p cnf <variables> <clauses>`")
            }
            Self::Line(line) => write!(f, "Failed to read line {line}"),
            Self::MisplacedProblem(line) => {
                write!(f, "Clause data at line {line}, before any problem line")
            }
            Self::OutOfBoundsLiteral(literal) => {
                write!(f, "Literal {literal} is outside the declared variable range")
            }
            Self::MissingZero => write!(f, "Input ended inside a clause, with no terminating 0"),
            Self::TrailingContent(line) => {
                write!(f, "Content at line {line}, after the declared clause count was met")
            }
            Self::ClauseCountMismatch { declared, found } => {
                write!(f, "The problem line declared {declared} clauses, though {found} were found")
            }
            Self::NoFile => write!(f, "No file was found"),
        }
    }
}

/// Errors in the variable namespace of an encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// There are no more fresh variables.
    VariablesExhausted,
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::VariablesExhausted => write!(f, "The space of variable identifiers is exhausted"),
        }
    }
}

/// Errors in the shape or use of a variable block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockError {
    /// A block was requested with no dimensions.
    EmptyShape,

    /// A block was requested with a dimension of size zero (by axis).
    ZeroDimension(usize),

    /// An index at or above the bound of the relevant dimension.
    IndexOutOfBounds {
        index: usize,
        bound: usize,
    },

    /// A path whose depth does not match the dimensions of the block.
    PathDepth {
        expected: usize,
        given: usize,
    },
}

impl From<BlockError> for ErrorKind {
    fn from(e: BlockError) -> Self {
        ErrorKind::Block(e)
    }
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "A block requires at least one dimension"),
            Self::ZeroDimension(axis) => {
                write!(f, "Dimension {axis} of the requested block is zero")
            }
            Self::IndexOutOfBounds { index, bound } => {
                write!(f, "Index {index} is out of bounds for a dimension of size {bound}")
            }
            Self::PathDepth { expected, given } => {
                write!(f, "A path of depth {expected} is required, though {given} indices were given")
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Block(e) => e.fmt(f),
            Self::Encoding(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Build(diagnostic) => write!(f, "Build aborted: {diagnostic}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
