use cnf_scribe::{
    encoding::{BlockEntry, Encoding},
    types::err::{BlockError, ErrorKind},
};

mod shape {
    use super::*;

    #[test]
    fn empty_shape_is_rejected() {
        let mut encoding = Encoding::new();

        assert_eq!(
            encoding.fresh_block("v", &[]).err(),
            Some(ErrorKind::Block(BlockError::EmptyShape))
        );
        assert_eq!(encoding.variable_count(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut encoding = Encoding::new();

        assert_eq!(
            encoding.fresh_block("v", &[2, 0, 3]).err(),
            Some(ErrorKind::Block(BlockError::ZeroDimension(1)))
        );
        assert_eq!(encoding.variable_count(), 0);
    }
}

mod indexing {
    use super::*;

    #[test]
    fn row_major_arithmetic() {
        let mut encoding = Encoding::new();
        let block = encoding.fresh_block("v", &[2, 3]).unwrap();

        assert_eq!(encoding.variable_count(), 6);

        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(
                    block.variable(&[i, j]).unwrap(),
                    block.start() + (i * 3 + j) as u32
                );
            }
        }

        let index_1_2 = block.variable(&[1, 2]).unwrap();
        assert_eq!(encoding.name_of(index_1_2), Some("v[1][2]"));
    }

    #[test]
    fn entries_nest() {
        let mut encoding = Encoding::new();
        let block = encoding.fresh_block("v", &[2, 3]).unwrap();

        let row = match block.get(1).unwrap() {
            BlockEntry::Block(row) => row,
            BlockEntry::Variable(_) => panic!("a dimension remains"),
        };

        assert_eq!(row.shape(), &[3]);
        assert_eq!(row.start(), block.start() + 3);
        assert_eq!(
            row.get(2).unwrap(),
            BlockEntry::Variable(block.variable(&[1, 2]).unwrap())
        );
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        let mut encoding = Encoding::new();
        let block = encoding.fresh_block("v", &[2, 3]).unwrap();

        assert_eq!(
            block.get(2).err(),
            Some(ErrorKind::Block(BlockError::IndexOutOfBounds { index: 2, bound: 2 }))
        );
        assert_eq!(
            block.variable(&[0, 3]).err(),
            Some(ErrorKind::Block(BlockError::IndexOutOfBounds { index: 3, bound: 3 }))
        );
    }

    #[test]
    fn path_depth_must_match() {
        let mut encoding = Encoding::new();
        let block = encoding.fresh_block("v", &[2, 3]).unwrap();

        assert_eq!(
            block.variable(&[1]).err(),
            Some(ErrorKind::Block(BlockError::PathDepth { expected: 2, given: 1 }))
        );
    }
}

mod naming {
    use super::*;

    #[test]
    fn temporary_prefix_embeds_the_identifier() {
        let mut encoding = Encoding::new();
        let _ = encoding.fresh_variable("p").unwrap();

        let block = encoding.fresh_temporary_block(&[2]).unwrap();

        assert_eq!(block.start(), 2);
        assert_eq!(encoding.name_of(2), Some("tmp2[0]"));
        assert_eq!(encoding.name_of(3), Some("tmp2[1]"));
    }

    #[test]
    fn scopes_apply_to_block_names() {
        let mut encoding = Encoding::new();

        let block = encoding
            .scoped("grid", |encoding| encoding.fresh_block("v", &[1, 1]))
            .unwrap();

        assert_eq!(encoding.name_of(block.start()), Some("gridv[0][0]"));
    }

    #[test]
    fn blocks_borrow_the_shared_counter() {
        let mut encoding = Encoding::new();
        let p = encoding.fresh_variable("p").unwrap();
        let block = encoding.fresh_block("v", &[3]).unwrap();
        let q = encoding.fresh_variable("q").unwrap();

        assert_eq!(block.start(), p + 1);
        assert_eq!(q, block.start() + 3);
        assert_eq!(encoding.variable_count(), 5);
    }
}
