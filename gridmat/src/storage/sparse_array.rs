//! Validator-gated sparse array storage
//!
//! Validity is decided once, at construction: the validator (or the tag of a
//! [`SparseValue`] initializer) is asked exactly once per cell and the answer
//! is frozen into the slot layout. Writes can replace values but never turn a
//! sparse slot into a valid one.

use std::mem;

use gridmat_core::validation::{check_buffer_len, check_coordinate, checked_area, linear_index};
use gridmat_core::{MatrixError, MutableSparseMatrix, Result, SparseMatrix, SparseValue};
use tracing::{trace, warn};

use super::impl_display;

/// Sparse matrix storing one optional slot per cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArraySparseMatrix<T> {
    width: usize,
    height: usize,
    data: Vec<Option<T>>,
}

impl<T> ArraySparseMatrix<T> {
    /// Create a matrix whose valid cells are those accepted by `validator`
    ///
    /// `init` only runs for valid cells.
    pub fn new<V, F>(width: usize, height: usize, mut validator: V, mut init: F) -> Result<Self>
    where
        V: FnMut(i32, i32) -> bool,
        F: FnMut(i32, i32) -> T,
    {
        Self::from_sparse_values(width, height, |x, y| {
            if validator(x, y) {
                SparseValue::Valid(init(x, y))
            } else {
                SparseValue::Sparse
            }
        })
    }

    /// Create a matrix from one combined initializer per cell
    pub fn from_sparse_values<F>(width: usize, height: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> SparseValue<T>,
    {
        let area = checked_area(width, height)?;
        let mut data = Vec::with_capacity(area);
        for y in 0..height {
            for x in 0..width {
                data.push(init(x as i32, y as i32).into_option());
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap a row-major buffer of optional slots
    pub fn from_options(width: usize, data: Vec<Option<T>>) -> Result<Self> {
        let height = check_buffer_len(data.len(), width).inspect_err(|_| {
            warn!(len = data.len(), width, "buffer does not split into rows");
        })?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Borrow the value at `(x, y)` without cloning it
    pub fn get_ref(&self, x: i32, y: i32) -> Result<&T> {
        let (cx, cy) = check_coordinate(x, y, self.width, self.height)?;
        match self.data.get(linear_index(cx, cy, self.width)) {
            Some(Some(value)) => Ok(value),
            _ => Err(MatrixError::SparseAccess { x, y }),
        }
    }

    /// Number of valid cells
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }

    /// The backing slots in row-major order
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.data
    }
}

impl<T: Clone> SparseMatrix for ArraySparseMatrix<T> {
    type Element = T;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, x: usize, y: usize) -> bool {
        matches!(self.data.get(linear_index(x, y, self.width)), Some(Some(_)))
    }

    fn read_cell(&self, x: usize, y: usize) -> Result<T> {
        match self.data.get(linear_index(x, y, self.width)) {
            Some(Some(value)) => Ok(value.clone()),
            _ => Err(MatrixError::SparseAccess {
                x: x as i32,
                y: y as i32,
            }),
        }
    }
}

impl<T: Clone> MutableSparseMatrix for ArraySparseMatrix<T> {
    fn write_cell(&mut self, x: usize, y: usize, value: T) -> Result<T> {
        match self.data.get_mut(linear_index(x, y, self.width)) {
            Some(Some(old)) => Ok(mem::replace(old, value)),
            _ => Err(MatrixError::SparseAccess {
                x: x as i32,
                y: y as i32,
            }),
        }
    }

    fn fill(&mut self, value: T) -> Result<()> {
        trace!(cells = self.data.len(), "bulk fill of valid slots");
        for slot in self.data.iter_mut().flatten() {
            *slot = value.clone();
        }
        Ok(())
    }
}

impl_display!(ArraySparseMatrix<T>);
