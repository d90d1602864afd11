//! Constant storage: one value shared by every valid cell
//!
//! No per-cell buffer exists, so `fill` is O(1) and copies only clone the
//! value. Row and column views are constant projections whose length comes
//! from the matrix shape.

use std::fmt;
use std::rc::Rc;

use gridmat_core::validation::{check_coordinate, check_index};
use gridmat_core::{ConstantView, Matrix, MatrixError, Result, SparseMatrix};
use tracing::trace;

use super::{impl_display, Validator};

/// Dense matrix holding the same value in every cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleValueMatrix<T> {
    width: usize,
    height: usize,
    value: T,
}

impl<T> SingleValueMatrix<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            value,
        }
    }

    /// The shared value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the value at `(x, y)`, failing only when out of range
    pub fn get_ref(&self, x: i32, y: i32) -> Result<&T> {
        check_coordinate(x, y, self.width, self.height)?;
        Ok(&self.value)
    }

    /// Replace the value of every cell at once
    pub fn fill(&mut self, value: T) {
        trace!(width = self.width, height = self.height, "constant fill");
        self.value = value;
    }
}

impl<T: Clone> SparseMatrix for SingleValueMatrix<T> {
    type Element = T;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, _x: usize, _y: usize) -> bool {
        true
    }

    fn read_cell(&self, _x: usize, _y: usize) -> Result<T> {
        Ok(self.value.clone())
    }

    fn is_dense(&self) -> bool {
        true
    }
}

impl<T: Clone> Matrix for SingleValueMatrix<T> {
    type Row<'a>
        = ConstantView<'a, T>
    where
        Self: 'a;
    type Column<'a>
        = ConstantView<'a, T>
    where
        Self: 'a;

    fn row(&self, index: usize) -> Result<Self::Row<'_>> {
        check_index(index, self.height)?;
        Ok(ConstantView::new(&self.value, self.width))
    }

    fn column(&self, index: usize) -> Result<Self::Column<'_>> {
        check_index(index, self.width)?;
        Ok(ConstantView::new(&self.value, self.height))
    }
}

impl_display!(SingleValueMatrix<T>);

/// Sparse matrix holding the same value in every valid cell
pub struct SingleValueSparseMatrix<T> {
    width: usize,
    height: usize,
    value: T,
    validator: Validator,
}

impl<T> SingleValueSparseMatrix<T> {
    pub fn new<V>(width: usize, height: usize, value: T, validator: V) -> Self
    where
        V: Fn(i32, i32) -> bool + 'static,
    {
        Self {
            width,
            height,
            value,
            validator: Rc::new(validator),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the value at `(x, y)` if the cell is valid
    pub fn get_ref(&self, x: i32, y: i32) -> Result<&T> {
        let (cx, cy) = check_coordinate(x, y, self.width, self.height)?;
        if !(self.validator)(cx as i32, cy as i32) {
            return Err(MatrixError::SparseAccess { x, y });
        }
        Ok(&self.value)
    }

    /// Replace the value of every valid cell at once
    pub fn fill(&mut self, value: T) {
        trace!(width = self.width, height = self.height, "constant fill");
        self.value = value;
    }
}

impl<T: Clone> Clone for SingleValueSparseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            value: self.value.clone(),
            validator: Rc::clone(&self.validator),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleValueSparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleValueSparseMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> SparseMatrix for SingleValueSparseMatrix<T> {
    type Element = T;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, x: usize, y: usize) -> bool {
        (self.validator)(x as i32, y as i32)
    }

    fn read_cell(&self, _x: usize, _y: usize) -> Result<T> {
        Ok(self.value.clone())
    }
}

impl_display!(SingleValueSparseMatrix<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use gridmat_core::ListView;

    #[test]
    fn test_every_cell_shares_the_value() {
        let mut m = SingleValueMatrix::new(5, 5, "x");
        assert!(m.iter().all(|v| v == "x"));
        assert_eq!(m.iter().count(), 25);
        assert_eq!(m.get_ref(4, 4), Ok(&"x"));
        assert!(m.get(5, 0).unwrap_err().is_out_of_range());

        m.fill("y");
        assert_eq!(m.get(2, 3), Ok("y"));
        assert_eq!(m.value(), &"y");
    }

    #[test]
    fn test_constant_views_follow_shape() {
        let m = SingleValueMatrix::new(4, 2, 7u8);
        let row = m.row(1).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row.to_vec(), vec![7, 7, 7, 7]);
        assert_eq!(
            row.get(4),
            Err(MatrixError::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(m.column(3).unwrap().len(), 2);
        assert!(m.row(2).is_err());
        assert!(m.column(4).is_err());
        assert_eq!(row.sublist(1, 3).unwrap().len(), 2);
    }

    #[test]
    fn test_sparse_constant() {
        let mut m = SingleValueSparseMatrix::new(3, 3, 1.5, |x, y| x == y);
        assert_eq!(m.get(1, 1), Ok(1.5));
        assert_eq!(m.get(0, 1), Err(MatrixError::SparseAccess { x: 0, y: 1 }));
        assert_eq!(m.get_ref(0, 1), Err(MatrixError::SparseAccess { x: 0, y: 1 }));
        assert_eq!(m.iter().count(), 3);

        m.fill(2.5);
        assert_eq!(m.get(2, 2), Ok(2.5));
        assert!(!m.is_valid(2, 0));
    }

    #[test]
    fn test_copy_and_equality() {
        let m = SingleValueMatrix::new(2, 3, 'a');
        let copy = m.copy_of();
        assert_eq!(copy, m);
        assert!(copy.content_equals(&m));
        assert!(!m.content_equals(&SingleValueMatrix::new(3, 2, 'a')));

        let sparse = SingleValueSparseMatrix::new(2, 3, 'a', |_, _| true);
        assert!(sparse.content_equals(&m));
        assert!(m.content_equals(&sparse.copy_of()));
    }

    #[test]
    fn test_display() {
        let m = SingleValueSparseMatrix::new(2, 2, 9, |x, _| x == 1);
        assert_eq!(
            m.to_string(),
            "SingleValueSparseMatrix( , 9\n                         , 9)"
        );
    }
}
