use cnf_scribe::{
    encoding::Encoding,
    structures::literal::{CLiteral, Literal},
    types::err::{ErrorKind, ParseError},
};

/// Clauses as sorted integer literals, sorted, for comparison up to ordering.
fn normal_form(encoding: &Encoding) -> Vec<Vec<isize>> {
    let mut clauses = encoding
        .clauses()
        .iter()
        .map(|clause| {
            let mut literals = clause.iter().map(|literal| literal.as_int()).collect::<Vec<_>>();
            literals.sort_unstable();
            literals
        })
        .collect::<Vec<_>>();
    clauses.sort_unstable();
    clauses
}

mod writing {
    use super::*;

    #[test]
    fn empty_encoding() {
        assert_eq!(Encoding::new().as_dimacs(), "p cnf 0 0\n");
    }

    #[test]
    fn names_then_problem_then_clauses() {
        let mut encoding = Encoding::new();
        let p = encoding.fresh_variable("p").unwrap();
        let q = encoding.fresh_variable("q").unwrap();

        encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
        encoding.add_clause(CLiteral::new(q, true));

        assert_eq!(
            encoding.as_dimacs(),
            "c 1 p\nc 2 q\np cnf 2 2\n1 -2 0\n2 0\n"
        );
    }

    #[test]
    fn scoped_names_are_preserved() {
        let mut encoding = Encoding::new();
        let _ = encoding.scoped("row", |encoding| encoding.fresh_variable("0"));

        assert!(encoding.as_dimacs().starts_with("c 1 row0\n"));
    }
}

mod reading {
    use super::*;

    #[test]
    fn counts_clauses_and_names() {
        let encoding =
            Encoding::from_dimacs("c a comment\np cnf 3 2\n1 -2 0\n2 3 0\n".as_bytes()).unwrap();

        assert_eq!(encoding.variable_count(), 3);
        assert_eq!(encoding.clause_count(), 2);
        assert_eq!(
            encoding.clauses()[0],
            vec![CLiteral::new(1, true), CLiteral::new(2, false)]
        );
        assert_eq!(encoding.name_of(1), Some("DIMACS var 1"));
        assert_eq!(encoding.name_of(3), Some("DIMACS var 3"));
        assert_eq!(encoding.scope(), "");
    }

    #[test]
    fn clauses_split_across_lines() {
        let encoding = Encoding::from_dimacs("p cnf 3 2\n1 -2\n3 0 2\n-3 0\n".as_bytes()).unwrap();

        assert_eq!(
            encoding.clauses()[0],
            vec![
                CLiteral::new(1, true),
                CLiteral::new(2, false),
                CLiteral::new(3, true)
            ]
        );
        assert_eq!(
            encoding.clauses()[1],
            vec![CLiteral::new(2, true), CLiteral::new(3, false)]
        );
    }

    #[test]
    fn percent_ends_the_formula() {
        let encoding = Encoding::from_dimacs("p cnf 2 1\n1 2 0\n%\n0\n\n".as_bytes()).unwrap();

        assert_eq!(encoding.clause_count(), 1);
    }

    #[test]
    fn out_of_bounds_literal_is_an_error() {
        let result = Encoding::from_dimacs("p cnf 2 1\n1 3 0\n".as_bytes());

        assert_eq!(
            result.err(),
            Some(ErrorKind::Parse(ParseError::OutOfBoundsLiteral(3)))
        );
    }

    #[test]
    fn variable_zero_is_an_error() {
        let result = Encoding::from_dimacs("p cnf 2 1\n-0 1 0\n".as_bytes());

        assert_eq!(
            result.err(),
            Some(ErrorKind::Parse(ParseError::OutOfBoundsLiteral(0)))
        );
    }

    #[test]
    fn missing_terminator_is_an_error() {
        let result = Encoding::from_dimacs("p cnf 2 1\n1 2\n".as_bytes());

        assert_eq!(result.err(), Some(ErrorKind::Parse(ParseError::MissingZero)));
    }

    #[test]
    fn missing_clauses_are_an_error() {
        let result = Encoding::from_dimacs("p cnf 2 2\n1 2 0\n".as_bytes());

        assert_eq!(
            result.err(),
            Some(ErrorKind::Parse(ParseError::ClauseCountMismatch {
                declared: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn trailing_content_is_an_error() {
        let result = Encoding::from_dimacs("p cnf 2 1\n1 0\n2 0\n".as_bytes());

        assert_eq!(
            result.err(),
            Some(ErrorKind::Parse(ParseError::TrailingContent(3)))
        );
    }

    #[test]
    fn malformed_problem_lines_are_errors() {
        for input in ["", "c only a comment\n", "p cnf\n", "p sat 2 1\n", "p cnf two 1\n"] {
            assert_eq!(
                Encoding::from_dimacs(input.as_bytes()).err(),
                Some(ErrorKind::Parse(ParseError::ProblemSpecification)),
                "on input {input:?}"
            );
        }
    }

    #[test]
    fn clause_data_before_the_problem_line_is_an_error() {
        let result = Encoding::from_dimacs("1 2 0\np cnf 2 1\n".as_bytes());

        assert_eq!(
            result.err(),
            Some(ErrorKind::Parse(ParseError::MisplacedProblem(1)))
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Encoding::from_dimacs_file("/no/such/file.cnf");

        assert_eq!(result.err(), Some(ErrorKind::Parse(ParseError::NoFile)));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn clause_content_and_variable_count_survive() {
        let mut encoding = Encoding::new();
        let p = encoding.fresh_variable("p").unwrap();
        let q = encoding.fresh_variable("q").unwrap();
        let r = encoding.fresh_variable("r").unwrap();
        let _unused = encoding.fresh_variable("s").unwrap();

        encoding.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
        encoding.add_clause(vec![
            CLiteral::new(q, true),
            CLiteral::new(r, true),
            CLiteral::new(p, false),
        ]);
        encoding.add_clause(CLiteral::new(r, false));

        let reread = Encoding::from_dimacs(encoding.as_dimacs().as_bytes()).unwrap();

        assert_eq!(reread.variable_count(), encoding.variable_count());
        assert_eq!(normal_form(&reread), normal_form(&encoding));
    }

    #[test]
    fn through_a_file() {
        let mut encoding = Encoding::new();
        let p = encoding.fresh_variable("p").unwrap();
        let q = encoding.fresh_variable("q").unwrap();
        encoding.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)]);

        let path = std::env::temp_dir().join("cnf_scribe_round_trip.cnf");
        let file = std::fs::File::create(&path).unwrap();
        encoding.write_dimacs(&file).unwrap();

        let reread = Encoding::from_dimacs_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(reread.variable_count(), encoding.variable_count());
        assert_eq!(normal_form(&reread), normal_form(&encoding));
    }
}
