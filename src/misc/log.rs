/*!
Items related to [logging](log).

Calls to the log macro are made throughout the library, intended to help when extending the library and/or fixing issues.

Note, no log implementation is provided.
For details on pairing the library with an implementation, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [building an encoding](crate::encoding)
    pub const ENCODING: &str = "encoding";

    /// Logs related to [reading DIMACS input](crate::dimacs)
    pub const PARSER: &str = "parser";

    /// Logs related to [variable blocks](crate::encoding::VariableBlock)
    pub const BLOCK: &str = "block";
}
