//! Tests for shape normalization and canonical footprints

#[cfg(test)]
mod tests {
    use polypack::PackingError;
    use polypack::spatial::shape::{Footprint, Shape, ShapeId};
    use polypack::spatial::symmetry::TransformSet;

    fn l_tromino() -> Shape {
        Shape::from_lines(ShapeId(0), &["#.", "##"], '#', TransformSet::FULL)
            .unwrap_or_else(|e| unreachable!("valid literal rejected: {e}"))
    }

    // Tests translation moves the minimum row and column to zero
    // Verified by skipping the min_col subtraction
    #[test]
    fn test_canonicalize_translates_to_origin() {
        let footprint = Footprint::canonicalize([(2, 3), (3, 3), (3, 4)]);
        assert_eq!(footprint.cells(), &[(0, 0), (1, 0), (1, 1)]);
    }

    // Tests negative coordinates are shifted like any others
    // Verified by clamping negatives to zero
    #[test]
    fn test_canonicalize_handles_negative_points() {
        let footprint = Footprint::canonicalize([(0, -2), (-1, -2), (0, -1)]);
        assert_eq!(footprint.cells(), &[(0, 0), (1, 0), (1, 1)]);
    }

    // Tests canonicalizing an already canonical footprint is a no-op
    // Verified by offsetting rows by one during canonicalization
    #[test]
    fn test_canonicalize_is_idempotent() {
        let footprint = Footprint::canonicalize([(5, 1), (5, 2), (6, 2), (7, 2)]);
        let again = Footprint::canonicalize(footprint.signed_cells());
        assert_eq!(again, footprint);
    }

    // Tests duplicate points collapse into one cell
    // Verified by removing the dedup step
    #[test]
    fn test_canonicalize_removes_duplicates() {
        let footprint = Footprint::canonicalize([(1, 1), (1, 1), (2, 1)]);
        assert_eq!(footprint.area(), 2);
    }

    // Tests an empty point set produces an empty footprint with zero extent
    // Verified by returning a single-cell footprint for empty input
    #[test]
    fn test_canonicalize_empty_input() {
        let footprint = Footprint::canonicalize(std::iter::empty());
        assert!(footprint.is_empty());
        assert_eq!(footprint.height(), 0);
        assert_eq!(footprint.width(), 0);
    }

    // Tests derived measurements of an L-tromino
    // Verified by computing height from the min row instead of the max row
    #[test]
    fn test_shape_measurements() {
        let shape = l_tromino();
        assert_eq!(shape.id(), ShapeId(0));
        assert_eq!(shape.area(), 3);
        assert_eq!(shape.height(), 2);
        assert_eq!(shape.width(), 2);
        assert_eq!(shape.bounding_area(), 4);
        assert!(shape.footprint().contains(1, 1));
        assert!(!shape.footprint().contains(0, 1));
    }

    // Tests blank margins around the filled cells are dropped
    // Verified by disabling translation in from_lines
    #[test]
    fn test_from_lines_strips_margins() {
        let shape = Shape::from_lines(
            ShapeId(3),
            &[".....", "..#..", "..##."],
            '#',
            TransformSet::FULL,
        )
        .unwrap_or_else(|e| unreachable!("valid literal rejected: {e}"));

        assert_eq!(shape.footprint().cells(), &[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(shape.bounding_area(), 4);
    }

    // Tests any character other than the marker counts as empty
    // Verified by treating every non-space character as filled
    #[test]
    fn test_from_lines_custom_marker() {
        let shape = Shape::from_lines(ShapeId(1), &["X#", "XX"], 'X', TransformSet::FULL)
            .unwrap_or_else(|e| unreachable!("valid literal rejected: {e}"));
        assert_eq!(shape.footprint().cells(), &[(0, 0), (1, 0), (1, 1)]);
    }

    // Tests a block without the marker is a configuration error naming the id
    // Verified by removing the emptiness check in Shape::new
    #[test]
    fn test_from_lines_rejects_empty_block() {
        let result = Shape::from_lines(ShapeId(7), &["...", "..."], '#', TransformSet::FULL);
        assert!(matches!(
            result,
            Err(PackingError::EmptyShape { id: ShapeId(7) })
        ));
    }

    // Tests lines of unequal length are rejected with the offending row
    // Verified by comparing against the previous line instead of the first
    #[test]
    fn test_from_lines_rejects_ragged_block() {
        let result = Shape::from_lines(ShapeId(2), &["##", "###"], '#', TransformSet::FULL);
        match result {
            Err(PackingError::RaggedShape {
                id,
                row,
                expected,
                found,
            }) => {
                assert_eq!(id, ShapeId(2));
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => unreachable!("Expected RaggedShape, got {other:?}"),
        }
    }

    // Tests the cached variations belong to the shape's transform set
    // Verified by ignoring the transform set when expanding
    #[test]
    fn test_shape_caches_variations() {
        let full = l_tromino();
        let fixed = Shape::from_lines(ShapeId(0), &["#.", "##"], '#', TransformSet::FIXED)
            .unwrap_or_else(|e| unreachable!("valid literal rejected: {e}"));

        assert_eq!(full.variations().len(), 4);
        assert_eq!(fixed.variations(), std::slice::from_ref(fixed.footprint()));
    }
}
