//! Literals are variables paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning a variable and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of a variable and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use cnf_scribe::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), 79);
//! assert_eq!(literal.negate(), -literal);
//! assert_eq!(literal.as_int(), 79);
//! assert_eq!(literal.negate().as_int(), -79);
//! ```
//!
//! Literals are ordered by variable and then polarity, with 'false' (strictly) less than 'true', and are hashable to allow straightforward use as the indices of maps, etc.

use crate::structures::variable::Variable;

/// Something which has methods for returning a variable and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing a variable with a boolean.
    fn new(variable: Variable, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The variable of the literal.
    fn variable(&self) -> Variable;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its 'canonical' form of a variable paired with a boolean.
    fn canonical(&self) -> CLiteral;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a variable paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(variable: Variable, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    fn variable(&self) -> Variable {
        self.variable
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.variable as isize,
            false => -(self.variable as isize),
        }
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.variable == other.variable {
            self.polarity.cmp(&other.polarity)
        } else {
            self.variable.cmp(&other.variable)
        }
    }
}

impl PartialEq for CLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && self.polarity == other.polarity
    }
}

impl Eq for CLiteral {}

impl std::hash::Hash for CLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.polarity.hash(state);
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.variable),
            false => write!(f, "-{}", self.variable),
        }
    }
}
