//! Row and column projections
//!
//! Views borrow their matrix and address cells through the public
//! [`Matrix`] / [`MutableMatrix`] contract, so they work the same over every
//! dense storage strategy. Mutable views write into the owning matrix.
//!
//! Only dense matrices have row and column views: every index below `len()`
//! must be readable.

use crate::validation::check_index;
use crate::{ListView, Matrix, MutableListView, MutableMatrix, Result};

/// Live view on one row of a matrix
pub struct RowView<'a, M: ?Sized> {
    matrix: &'a M,
    row: usize,
}

impl<'a, M: Matrix + ?Sized> RowView<'a, M> {
    /// Create a view on row `row`, failing when `row >= max_height`
    pub fn new(matrix: &'a M, row: usize) -> Result<Self> {
        check_index(row, matrix.max_height())?;
        Ok(Self { matrix, row })
    }

    /// The row this view projects
    pub fn row_index(&self) -> usize {
        self.row
    }
}

impl<M: Matrix + ?Sized> ListView for RowView<'_, M> {
    type Item = M::Element;

    fn len(&self) -> usize {
        self.matrix.max_width()
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.get(index as i32, self.row as i32)
    }
}

/// Live view on one column of a matrix
pub struct ColumnView<'a, M: ?Sized> {
    matrix: &'a M,
    column: usize,
}

impl<'a, M: Matrix + ?Sized> ColumnView<'a, M> {
    /// Create a view on column `column`, failing when `column >= max_width`
    pub fn new(matrix: &'a M, column: usize) -> Result<Self> {
        check_index(column, matrix.max_width())?;
        Ok(Self { matrix, column })
    }

    /// The column this view projects
    pub fn column_index(&self) -> usize {
        self.column
    }
}

impl<M: Matrix + ?Sized> ListView for ColumnView<'_, M> {
    type Item = M::Element;

    fn len(&self) -> usize {
        self.matrix.max_height()
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.get(self.column as i32, index as i32)
    }
}

/// Writable view on one row of a matrix
pub struct RowViewMut<'a, M: ?Sized> {
    matrix: &'a mut M,
    row: usize,
}

impl<'a, M: MutableMatrix + ?Sized> RowViewMut<'a, M> {
    /// Create a view on row `row`, failing when `row >= max_height`
    pub fn new(matrix: &'a mut M, row: usize) -> Result<Self> {
        check_index(row, matrix.max_height())?;
        Ok(Self { matrix, row })
    }

    /// The row this view projects
    pub fn row_index(&self) -> usize {
        self.row
    }
}

impl<M: MutableMatrix + ?Sized> ListView for RowViewMut<'_, M> {
    type Item = M::Element;

    fn len(&self) -> usize {
        self.matrix.max_width()
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.get(index as i32, self.row as i32)
    }
}

impl<M: MutableMatrix + ?Sized> MutableListView for RowViewMut<'_, M> {
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.set(index as i32, self.row as i32, element)
    }
}

/// Writable view on one column of a matrix
pub struct ColumnViewMut<'a, M: ?Sized> {
    matrix: &'a mut M,
    column: usize,
}

impl<'a, M: MutableMatrix + ?Sized> ColumnViewMut<'a, M> {
    /// Create a view on column `column`, failing when `column >= max_width`
    pub fn new(matrix: &'a mut M, column: usize) -> Result<Self> {
        check_index(column, matrix.max_width())?;
        Ok(Self { matrix, column })
    }

    /// The column this view projects
    pub fn column_index(&self) -> usize {
        self.column
    }
}

impl<M: MutableMatrix + ?Sized> ListView for ColumnViewMut<'_, M> {
    type Item = M::Element;

    fn len(&self) -> usize {
        self.matrix.max_height()
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.get(self.column as i32, index as i32)
    }
}

impl<M: MutableMatrix + ?Sized> MutableListView for ColumnViewMut<'_, M> {
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item> {
        check_index(index, self.len())?;
        self.matrix.set(self.column as i32, index as i32, element)
    }
}

/// A view of fixed length where every element is the same value
///
/// Used for the rows and columns of constant matrices: the length comes from
/// the matrix shape, the value is shared.
pub struct ConstantView<'a, T> {
    value: &'a T,
    len: usize,
}

impl<'a, T> ConstantView<'a, T> {
    pub fn new(value: &'a T, len: usize) -> Self {
        Self { value, len }
    }
}

impl<T: Clone> ListView for ConstantView<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        Ok(self.value.clone())
    }
}
