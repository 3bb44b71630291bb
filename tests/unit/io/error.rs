//! Tests for error messages and error source chaining

#[cfg(test)]
mod tests {
    use polypack::io::error::{PackingError, WithPath, invalid_parameter};
    use polypack::spatial::shape::ShapeId;
    use std::error::Error;
    use std::path::Path;

    // Tests shape errors name the offending shape id
    // Verified by dropping the id from the display strings
    #[test]
    fn test_shape_error_messages() {
        assert_eq!(
            PackingError::EmptyShape { id: ShapeId(4) }.to_string(),
            "Shape 4 has no filled cells"
        );
        assert_eq!(
            PackingError::DuplicateShape { id: ShapeId(1) }.to_string(),
            "Shape 1 is already defined"
        );
        assert_eq!(
            PackingError::UnknownShape { id: ShapeId(9) }.to_string(),
            "Shape 9 is referenced but never defined"
        );
    }

    // Tests the ragged shape message reports row and both lengths
    // Verified by swapping found and expected in the message
    #[test]
    fn test_ragged_shape_message() {
        let err = PackingError::RaggedShape {
            id: ShapeId(2),
            row: 3,
            expected: 4,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "Shape 2 is not rectangular: line 3 has 5 cells, expected 4"
        );
    }

    // Tests invalid parameter helper keeps the name, value and reason
    // Verified by formatting the reason into the value field
    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("width", &20_000, &"exceeds maximum of 10000");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '20000': exceeds maximum of 10000"
        );
        assert!(err.source().is_none());
    }

    // Tests file system errors expose the underlying I/O error as source
    // Verified by returning None from source for every variant
    #[test]
    fn test_file_system_error_source() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));

        match result.with_path(Path::new("shapes/t.txt"), "read shape file") {
            Err(err) => {
                assert!(err.source().is_some());
                let message = err.to_string();
                assert!(message.contains("read shape file"));
                assert!(message.contains("shapes/t.txt"));
                assert!(message.contains("no such file"));
            }
            Ok(()) => unreachable!("Expected FileSystem error"),
        }
    }

    // Tests plain I/O errors convert with a placeholder path
    // Verified by panicking in the From implementation
    #[test]
    fn test_from_io_error() {
        let err = PackingError::from(std::io::Error::other("disk"));
        assert!(matches!(
            err,
            PackingError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
