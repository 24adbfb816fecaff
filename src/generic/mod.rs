//! Generic structures, not tied to an encoding.

pub mod random;
