//! Contiguous, multi-dimensional blocks of variables, with array-like access.
//!
//! A [VariableBlock] is a view, not storage: it records a start variable and a shape, and indexing computes an offset into the contiguous range the matching allocation call carved out.
//! Allocation is depth-first in row-major order, so the stride of an index is the product of the trailing dimensions.
//!
//! ```rust
//! # use cnf_scribe::encoding::{BlockEntry, Encoding};
//! let mut encoding = Encoding::new();
//! let block = encoding.fresh_block("v", &[2, 3]).unwrap();
//!
//! assert_eq!(encoding.variable_count(), 6);
//! assert_eq!(block.variable(&[1, 2]).unwrap(), block.start() + 5);
//! assert_eq!(encoding.name_of(block.variable(&[1, 2]).unwrap()), Some("v[1][2]"));
//!
//! let row = match block.get(1).unwrap() {
//!     BlockEntry::Block(row) => row,
//!     BlockEntry::Variable(_) => panic!("two dimensions remain"),
//! };
//! assert_eq!(row.shape(), &[3]);
//! ```

use crate::{
    encoding::Encoding,
    misc::log::targets::{self},
    structures::variable::Variable,
    types::err::{self, ErrorKind},
};

/// A contiguous block of variables of some declared shape.
///
/// Validity is entirely derived from the caller having obtained the block through [fresh_block](Encoding::fresh_block) or [fresh_temporary_block](Encoding::fresh_temporary_block), which reserve exactly as many consecutive identifiers as the shape requires.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableBlock {
    /// The first variable of the block.
    start: Variable,

    /// The declared dimensions, always non-empty with every dimension positive.
    shape: Vec<usize>,
}

/// An entry of a block: a variable at the innermost dimension, and a smaller block otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlockEntry {
    Variable(Variable),
    Block(VariableBlock),
}

impl Encoding {
    /// Allocates a block of fresh variables covering the given shape, named by prefix and full index path.
    ///
    /// The shape must be non-empty, with every dimension positive.
    /// Allocation is depth-first in row-major order, e.g. for shape `[2, 2]` the variables are named `prefix[0][0]`, `prefix[0][1]`, `prefix[1][0]`, `prefix[1][1]`, in allocation order.
    pub fn fresh_block(
        &mut self,
        prefix: &str,
        shape: &[usize],
    ) -> Result<VariableBlock, ErrorKind> {
        if shape.is_empty() {
            return Err(ErrorKind::from(err::BlockError::EmptyShape));
        }
        if let Some(axis) = shape.iter().position(|dimension| *dimension == 0) {
            return Err(ErrorKind::from(err::BlockError::ZeroDimension(axis)));
        }

        let start = self.next_variable;
        let count: usize = shape.iter().product();
        log::trace!(target: targets::BLOCK, "Block of shape {shape:?} ({count} variables) allocated from {start}");

        let mut path = vec![0; shape.len()];
        for _ in 0..count {
            let mut name = String::from(prefix);
            for index in &path {
                name.push_str(&format!("[{index}]"));
            }
            self.fresh_variable(&name)?;

            // Advance the index path, odometer style.
            for axis in (0..shape.len()).rev() {
                path[axis] += 1;
                if path[axis] < shape[axis] {
                    break;
                }
                path[axis] = 0;
            }
        }

        Ok(VariableBlock {
            start,
            shape: shape.to_vec(),
        })
    }

    /// As [fresh_block](Encoding::fresh_block), with a synthetic prefix which embeds the identifier about to be assigned.
    pub fn fresh_temporary_block(&mut self, shape: &[usize]) -> Result<VariableBlock, ErrorKind> {
        let prefix = format!("tmp{}", self.next_variable);
        self.fresh_block(&prefix, shape)
    }
}

impl VariableBlock {
    /// The first variable of the block.
    pub fn start(&self) -> Variable {
        self.start
    }

    /// The declared dimensions of the block.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The size of the outermost dimension.
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Always false, as every dimension of a block is positive.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The entry at the given index of the outermost dimension: a variable for a one-dimensional block, and the indexed sub-block otherwise.
    ///
    /// Out-of-bounds indices are an error, not a panic.
    pub fn get(&self, index: usize) -> Result<BlockEntry, ErrorKind> {
        let bound = self.shape[0];
        if index >= bound {
            return Err(ErrorKind::from(err::BlockError::IndexOutOfBounds {
                index,
                bound,
            }));
        }

        match self.shape.len() {
            1 => Ok(BlockEntry::Variable(self.start + index as Variable)),
            _ => {
                let stride: usize = self.shape[1..].iter().product();
                Ok(BlockEntry::Block(VariableBlock {
                    start: self.start + (index * stride) as Variable,
                    shape: self.shape[1..].to_vec(),
                }))
            }
        }
    }

    /// The variable at the given full index path, whose depth must match the dimensions of the block.
    pub fn variable(&self, path: &[usize]) -> Result<Variable, ErrorKind> {
        if path.len() != self.shape.len() {
            return Err(ErrorKind::from(err::BlockError::PathDepth {
                expected: self.shape.len(),
                given: path.len(),
            }));
        }

        let mut stride: usize = self.shape.iter().product();
        let mut offset = 0;
        for (&index, &bound) in path.iter().zip(&self.shape) {
            if index >= bound {
                return Err(ErrorKind::from(err::BlockError::IndexOutOfBounds {
                    index,
                    bound,
                }));
            }
            stride /= bound;
            offset += index * stride;
        }

        Ok(self.start + offset as Variable)
    }
}
