/*!
Reading and writing the DIMACS CNF interchange format.

The format, as consumed and produced:
- Comment lines begin with `c` and are ignored on input.
- Exactly one problem line `p cnf <variables> <clauses>` precedes the formula.
- Each clause is a sequence of signed nonzero integers terminated by `0`, split across whitespace and lines however convenient.
- A line beginning with `%` ends the formula body (as found in the SATLIB benchmark problems).

As an informal extension the writer emits a comment line `c <variable> <name>` for each named variable.
The reader ignores these --- DIMACS has no name-preservation guarantee, and variables read from DIMACS are named by their index instead.

Reading and writing happen at the boundary of the library: the reader takes any [BufRead](std::io::BufRead) and the writer any [Write](std::io::Write), with file handles acquired and released in the scope of the one call that uses them.
*/

mod reader;
mod writer;
