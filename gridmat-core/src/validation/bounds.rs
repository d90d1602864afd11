//! Coordinate, index and buffer bounds validation
//!
//! This module provides pure validation functions shared by every storage
//! strategy and view. Each check runs before any state is touched.

use crate::MatrixError;

/// Map a signed coordinate onto unsigned cell indices
///
/// Returns `None` when the coordinate lies outside `[0, width) x [0, height)`.
pub const fn cell_index(x: i32, y: i32, width: usize, height: usize) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    let (ux, uy) = (x as usize, y as usize);
    if ux >= width || uy >= height {
        return None;
    }
    Some((ux, uy))
}

/// Validate that a coordinate is within the declared dimensions
pub const fn check_coordinate(
    x: i32,
    y: i32,
    width: usize,
    height: usize,
) -> Result<(usize, usize), MatrixError> {
    match cell_index(x, y, width, height) {
        Some(cell) => Ok(cell),
        None => Err(MatrixError::OutOfRange {
            x,
            y,
            width,
            height,
        }),
    }
}

/// Row-major offset of a cell in a buffer of the given width
pub const fn linear_index(x: usize, y: usize, width: usize) -> usize {
    x + y * width
}

/// Validate a list view index against the view's effective size
pub const fn check_index(index: usize, size: usize) -> Result<(), MatrixError> {
    if index >= size {
        return Err(MatrixError::IndexOutOfRange { index, size });
    }
    Ok(())
}

/// Validate sublist bounds: `0 <= from <= to <= size`
pub const fn check_range(from: usize, to: usize, size: usize) -> Result<(), MatrixError> {
    if to > size || from > to {
        return Err(MatrixError::InvalidRange { from, to, size });
    }
    Ok(())
}

/// Validate that a flat buffer can be split into rows of `width` cells
///
/// Returns the resulting height. A zero width is only accepted for an empty
/// buffer.
pub const fn check_buffer_len(len: usize, width: usize) -> Result<usize, MatrixError> {
    if width == 0 {
        if len != 0 {
            return Err(MatrixError::InvalidDimension { len, width });
        }
        return Ok(0);
    }

    if len % width != 0 {
        return Err(MatrixError::InvalidDimension { len, width });
    }

    Ok(len / width)
}

/// Number of cells for the given dimensions, rejecting overflow
pub const fn checked_area(width: usize, height: usize) -> Result<usize, MatrixError> {
    match width.checked_mul(height) {
        Some(area) => Ok(area),
        None => Err(MatrixError::ConstructionContract(
            "grid dimensions overflow usize",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index() {
        assert_eq!(cell_index(0, 0, 3, 2), Some((0, 0)));
        assert_eq!(cell_index(2, 1, 3, 2), Some((2, 1)));
        assert_eq!(cell_index(3, 1, 3, 2), None);
        assert_eq!(cell_index(2, 2, 3, 2), None);
        assert_eq!(cell_index(-1, 0, 3, 2), None);
        assert_eq!(cell_index(0, -5, 3, 2), None);
        assert_eq!(cell_index(0, 0, 0, 0), None);
    }

    #[test]
    fn test_check_coordinate() {
        assert_eq!(check_coordinate(1, 1, 3, 3), Ok((1, 1)));
        assert_eq!(
            check_coordinate(-1, 4, 3, 3),
            Err(MatrixError::OutOfRange {
                x: -1,
                y: 4,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_check_range() {
        // Valid bounds
        assert_eq!(check_range(0, 0, 0), Ok(()));
        assert_eq!(check_range(0, 5, 5), Ok(()));
        assert_eq!(check_range(2, 2, 5), Ok(()));
        assert_eq!(check_range(1, 4, 5), Ok(()));

        // Invalid bounds
        assert_eq!(
            check_range(3, 2, 5),
            Err(MatrixError::InvalidRange {
                from: 3,
                to: 2,
                size: 5
            })
        );
        assert_eq!(
            check_range(0, 6, 5),
            Err(MatrixError::InvalidRange {
                from: 0,
                to: 6,
                size: 5
            })
        );
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(
            check_index(1, 1),
            Err(MatrixError::IndexOutOfRange { index: 1, size: 1 })
        );
    }

    #[test]
    fn test_check_buffer_len() {
        assert_eq!(check_buffer_len(9, 3), Ok(3));
        assert_eq!(check_buffer_len(0, 4), Ok(0));
        assert_eq!(check_buffer_len(0, 0), Ok(0));
        assert_eq!(
            check_buffer_len(7, 3),
            Err(MatrixError::InvalidDimension { len: 7, width: 3 })
        );
        assert_eq!(
            check_buffer_len(2, 0),
            Err(MatrixError::InvalidDimension { len: 2, width: 0 })
        );
    }

    #[test]
    fn test_checked_area() {
        assert_eq!(checked_area(4, 5), Ok(20));
        assert!(checked_area(usize::MAX, 2).is_err());
    }
}
