/*!
(The representation of) a variable, aka. a boolean unknown in the formula being built.

Each variable is a u32 *v* with *v* ≥ 1, and the variables of an encoding are exactly [1..*m*) for some *m*.
Variable 0 is reserved, matching the 1-based convention of the DIMACS format in which 0 terminates a clause.

Variables are only created by an [encoding](crate::encoding::Encoding), which hands them out densely and in increasing order.
Variables are never destroyed --- an encoding is append-only for the lifetime of a build.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- The dense representation allows a variable to be used as the index of a structure without taking too much space.
*/

/// A variable, by its identifier.
pub type Variable = u32;
