//! Error types for grid operations

/// Errors that can occur when constructing or accessing a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Coordinate outside `[0, width) x [0, height)`
    #[error("({x}, {y}) out of range: ([0,{width}), [0,{height}))")]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// Index outside the effective range of a list view
    #[error("index {index} out of range: [0,{size})")]
    IndexOutOfRange { index: usize, size: usize },
    /// Sublist bounds that do not satisfy `0 <= from <= to <= size`
    #[error("sublist range {from}..{to} out of range: [0,{size}]")]
    InvalidRange { from: usize, to: usize, size: usize },
    /// Coordinate in range, but the cell holds no value
    #[error("({x}, {y}) is a sparse index")]
    SparseAccess { x: i32, y: i32 },
    /// Backing buffer length does not fit the declared width
    #[error("buffer length {len} is not a multiple of the width {width}")]
    InvalidDimension { len: usize, width: usize },
    /// Initializer or raw data broke an invariant of the storage format
    #[error("construction contract violated: {0}")]
    ConstructionContract(&'static str),
}

/// Coarse classification of [`MatrixError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// "Wrong place": a coordinate, index or range outside the valid bounds
    OutOfRange,
    /// "No value here": an in-range cell that is sparse
    SparseAccess,
    /// Buffer shape does not match the declared dimensions
    InvalidDimension,
    /// Construction input broke a storage invariant
    ConstructionContract,
}

impl MatrixError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::OutOfRange { .. }
            | MatrixError::IndexOutOfRange { .. }
            | MatrixError::InvalidRange { .. } => ErrorCategory::OutOfRange,
            MatrixError::SparseAccess { .. } => ErrorCategory::SparseAccess,
            MatrixError::InvalidDimension { .. } => ErrorCategory::InvalidDimension,
            MatrixError::ConstructionContract(_) => ErrorCategory::ConstructionContract,
        }
    }

    /// Whether this error reports an access outside the valid bounds
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.category(), ErrorCategory::OutOfRange)
    }
}

/// Result type for grid operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = MatrixError::OutOfRange {
            x: 3,
            y: -1,
            width: 3,
            height: 2,
        };
        assert_eq!(err.to_string(), "(3, -1) out of range: ([0,3), [0,2))");

        let err = MatrixError::SparseAccess { x: 1, y: 1 };
        assert_eq!(err.to_string(), "(1, 1) is a sparse index");

        let err = MatrixError::IndexOutOfRange { index: 4, size: 2 };
        assert_eq!(err.to_string(), "index 4 out of range: [0,2)");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            MatrixError::InvalidRange {
                from: 2,
                to: 1,
                size: 3
            }
            .category(),
            ErrorCategory::OutOfRange
        );
        assert_eq!(
            MatrixError::SparseAccess { x: 0, y: 0 }.category(),
            ErrorCategory::SparseAccess
        );
        assert_eq!(
            MatrixError::InvalidDimension { len: 7, width: 2 }.category(),
            ErrorCategory::InvalidDimension
        );
        assert!(!MatrixError::ConstructionContract("bad code").is_out_of_range());
        assert!(MatrixError::IndexOutOfRange { index: 0, size: 0 }.is_out_of_range());
    }
}
