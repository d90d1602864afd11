//! Core matrix capability traits
//!
//! This module defines the read and write contracts every storage strategy
//! satisfies. Strategies only provide the primitives (`validator`,
//! `read_cell`, `write_cell`); validation, iteration and equality are shared
//! default methods built on top of them.

use crate::validation::{cell_index, check_coordinate};
use crate::view::{ColumnViewMut, Indices, RowViewMut, Values};
use crate::{equality, Coordinate, ListView, MatrixError, Result};

/// A 2D grid that does not require a value in every cell
///
/// Cells are addressed by `(x, y)` with `0 <= x < max_width` and
/// `0 <= y < max_height`. Which in-range cells hold a value is decided by the
/// [`validator`](SparseMatrix::validator). Coordinates are signed so that any
/// value can be queried; negative and too-large coordinates are never valid.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element;

    /// Number of columns that can hold values
    fn max_width(&self) -> usize;

    /// Number of rows that can hold values
    fn max_height(&self) -> usize;

    /// Validity predicate for an in-range cell
    ///
    /// Only called with `x < max_width` and `y < max_height`. Expected, but not
    /// required, to give the same answer on every call.
    fn validator(&self, x: usize, y: usize) -> bool;

    /// Read primitive of the storage strategy
    ///
    /// Only called for coordinates that passed [`validate`](SparseMatrix::validate).
    fn read_cell(&self, x: usize, y: usize) -> Result<Self::Element>;

    /// Get matrix dimensions as `(max_width, max_height)`
    fn dimensions(&self) -> (usize, usize) {
        (self.max_width(), self.max_height())
    }

    /// Whether every in-range cell is valid by construction
    ///
    /// Dense strategies return `true`, which lets equality skip the sparse
    /// comparison.
    fn is_dense(&self) -> bool {
        false
    }

    /// Whether `(x, y)` is in range and holds a value
    fn is_valid(&self, x: i32, y: i32) -> bool {
        match cell_index(x, y, self.max_width(), self.max_height()) {
            Some((x, y)) => self.validator(x, y),
            None => false,
        }
    }

    /// [`is_valid`](SparseMatrix::is_valid) for a packed coordinate
    fn is_valid_at(&self, pos: Coordinate) -> bool {
        self.is_valid(pos.x(), pos.y())
    }

    /// Check that `(x, y)` can be read, returning the unsigned cell position
    fn validate(&self, x: i32, y: i32) -> Result<(usize, usize)> {
        let (cx, cy) = check_coordinate(x, y, self.max_width(), self.max_height())?;
        if !self.validator(cx, cy) {
            return Err(MatrixError::SparseAccess { x, y });
        }
        Ok((cx, cy))
    }

    /// Get the value at `(x, y)`
    fn get(&self, x: i32, y: i32) -> Result<Self::Element> {
        let (x, y) = self.validate(x, y)?;
        self.read_cell(x, y)
    }

    /// [`get`](SparseMatrix::get) for a packed coordinate
    fn get_at(&self, pos: Coordinate) -> Result<Self::Element> {
        self.get(pos.x(), pos.y())
    }

    /// All valid coordinates in row-major order, computed lazily
    fn indices(&self) -> Indices<'_, Self> {
        Indices::new(self)
    }

    /// The values of all valid cells in row-major order
    fn iter(&self) -> Values<'_, Self> {
        Values::new(self)
    }

    /// Structural equality with a matrix of any shape or backend
    ///
    /// Cells outside the overlap of both shapes must be sparse; inside the
    /// overlap validity and values must match.
    fn content_equals<M>(&self, other: &M) -> bool
    where
        M: SparseMatrix + ?Sized,
        Self::Element: PartialEq<M::Element>,
    {
        equality::content_equals(self, other)
    }

    /// Create an independent copy of this matrix
    fn copy_of(&self) -> Self
    where
        Self: Clone,
    {
        self.clone()
    }
}

/// A matrix that holds a value in every in-range cell
///
/// Implementations must return `true` from
/// [`validator`](SparseMatrix::validator) and [`is_dense`](SparseMatrix::is_dense).
pub trait Matrix: SparseMatrix {
    /// Live view on one row
    type Row<'a>: ListView<Item = Self::Element>
    where
        Self: 'a;

    /// Live view on one column
    type Column<'a>: ListView<Item = Self::Element>
    where
        Self: 'a;

    /// The width of the matrix, same as [`max_width`](SparseMatrix::max_width)
    fn width(&self) -> usize {
        self.max_width()
    }

    /// The height of the matrix, same as [`max_height`](SparseMatrix::max_height)
    fn height(&self) -> usize {
        self.max_height()
    }

    /// View on row `index`, `len() == width()`
    fn row(&self, index: usize) -> Result<Self::Row<'_>>;

    /// View on column `index`, `len() == height()`
    fn column(&self, index: usize) -> Result<Self::Column<'_>>;

    /// Dense equality: dimensions must match, then every cell is compared
    fn matrix_content_equals<M>(&self, other: &M) -> bool
    where
        M: Matrix + ?Sized,
        Self::Element: PartialEq<M::Element>,
    {
        equality::dense_content_equals(self, other)
    }
}

/// A sparse matrix whose valid cells can be overwritten
pub trait MutableSparseMatrix: SparseMatrix {
    /// Write primitive of the storage strategy, returning the previous value
    ///
    /// Only called for coordinates that passed [`validate`](SparseMatrix::validate).
    fn write_cell(&mut self, x: usize, y: usize, value: Self::Element) -> Result<Self::Element>;

    /// Set the value at `(x, y)`, returning the previous value
    ///
    /// Fails without modifying the matrix when the cell is out of range or
    /// sparse; writes never create cells.
    fn set(&mut self, x: i32, y: i32, value: Self::Element) -> Result<Self::Element> {
        let (x, y) = self.validate(x, y)?;
        self.write_cell(x, y, value)
    }

    /// [`set`](MutableSparseMatrix::set) for a packed coordinate
    fn set_at(&mut self, pos: Coordinate, value: Self::Element) -> Result<Self::Element> {
        self.set(pos.x(), pos.y(), value)
    }

    /// Write `value` into every currently valid cell
    ///
    /// Stops at the first failing write and returns its error; cells before
    /// it keep the new value.
    fn fill(&mut self, value: Self::Element) -> Result<()>
    where
        Self::Element: Clone,
    {
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                if self.validator(x, y) {
                    self.write_cell(x, y, value.clone())?;
                }
            }
        }
        Ok(())
    }

    /// Write `setter(x, y)` into every currently valid cell
    ///
    /// Stops at the first failing write, like [`fill`](MutableSparseMatrix::fill).
    fn fill_with<F>(&mut self, mut setter: F) -> Result<()>
    where
        F: FnMut(i32, i32) -> Self::Element,
    {
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                if self.validator(x, y) {
                    self.write_cell(x, y, setter(x as i32, y as i32))?;
                }
            }
        }
        Ok(())
    }
}

/// A dense matrix with writable cells and writable row/column views
pub trait MutableMatrix: Matrix + MutableSparseMatrix {
    /// Mutable view on row `index`; writes go straight into this matrix
    fn row_mut(&mut self, index: usize) -> Result<RowViewMut<'_, Self>> {
        RowViewMut::new(self, index)
    }

    /// Mutable view on column `index`; writes go straight into this matrix
    fn column_mut(&mut self, index: usize) -> Result<ColumnViewMut<'_, Self>> {
        ColumnViewMut::new(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x1 grid whose cell at `locked` rejects writes
    struct Locked {
        cells: [i32; 3],
        locked: usize,
    }

    impl SparseMatrix for Locked {
        type Element = i32;

        fn max_width(&self) -> usize {
            3
        }

        fn max_height(&self) -> usize {
            1
        }

        fn validator(&self, _x: usize, _y: usize) -> bool {
            true
        }

        fn read_cell(&self, x: usize, _y: usize) -> Result<i32> {
            Ok(self.cells[x])
        }
    }

    impl MutableSparseMatrix for Locked {
        fn write_cell(&mut self, x: usize, _y: usize, value: i32) -> Result<i32> {
            if x == self.locked {
                return Err(MatrixError::ConstructionContract("cell is locked"));
            }
            Ok(core::mem::replace(&mut self.cells[x], value))
        }
    }

    #[test]
    fn test_fill_stops_at_failed_write() {
        let mut grid = Locked {
            cells: [0; 3],
            locked: 1,
        };
        assert_eq!(
            grid.fill(5),
            Err(MatrixError::ConstructionContract("cell is locked"))
        );
        assert_eq!(grid.cells, [5, 0, 0]);

        assert!(grid.fill_with(|x, _| x + 10).is_err());
        assert_eq!(grid.cells, [10, 0, 0]);
    }

    #[test]
    fn test_fill_reaches_every_cell() {
        let mut grid = Locked {
            cells: [0; 3],
            locked: usize::MAX,
        };
        assert_eq!(grid.fill(2), Ok(()));
        assert_eq!(grid.cells, [2, 2, 2]);
        assert_eq!(grid.fill_with(|x, _| x * 3), Ok(()));
        assert_eq!(grid.cells, [0, 3, 6]);
    }
}
