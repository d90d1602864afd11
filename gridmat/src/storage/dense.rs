//! Dense row-major array storage
//!
//! [`ArrayMatrix`] keeps every cell in one `Vec`, indexed by `x + y * width`.
//! All in-range cells are valid, so it backs [`Matrix`] and
//! [`MutableMatrix`]; its mutable row and column views write straight into the
//! buffer.

use std::mem;

use gridmat_core::validation::{check_buffer_len, check_coordinate, checked_area, linear_index};
use gridmat_core::{
    ColumnView, Matrix, MatrixError, MutableMatrix, MutableSparseMatrix, Result, RowView,
    SparseMatrix,
};
use tracing::{trace, warn};

use super::impl_display;

/// Dense matrix backed by a flat row-major buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawArrayMatrix<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct ArrayMatrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Unchecked wire shape, validated on conversion
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawArrayMatrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawArrayMatrix<T>> for ArrayMatrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawArrayMatrix<T>) -> Result<Self> {
        Self::from_parts(raw.width, raw.height, raw.data)
    }
}

impl<T> ArrayMatrix<T> {
    /// Create a matrix whose cell `(x, y)` holds `init(x, y)`
    ///
    /// `init` is called once per cell in row-major order.
    pub fn new<F>(width: usize, height: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> T,
    {
        let area = checked_area(width, height)?;
        let mut data = Vec::with_capacity(area);
        for y in 0..height {
            for x in 0..width {
                data.push(init(x as i32, y as i32));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a matrix with `value` in every cell
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let area = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; area],
        })
    }

    /// Wrap a row-major buffer; the height is `data.len() / width`
    pub fn from_vec(width: usize, data: Vec<T>) -> Result<Self> {
        let height = check_buffer_len(data.len(), width).inspect_err(|_| {
            warn!(len = data.len(), width, "buffer does not split into rows");
        })?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap a row-major buffer of exactly `width * height` cells
    pub fn from_parts(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if checked_area(width, height)? != data.len() {
            warn!(len = data.len(), width, height, "buffer does not match dimensions");
            return Err(MatrixError::InvalidDimension {
                len: data.len(),
                width,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The backing buffer in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow the value at `(x, y)` without cloning it
    pub fn get_ref(&self, x: i32, y: i32) -> Result<&T> {
        let i = self.offset(x, y)?;
        self.data.get(i).ok_or_else(|| self.out_of_range(x, y))
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize> {
        let (cx, cy) = check_coordinate(x, y, self.width, self.height)?;
        Ok(linear_index(cx, cy, self.width))
    }

    fn out_of_range(&self, x: i32, y: i32) -> MatrixError {
        MatrixError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> SparseMatrix for ArrayMatrix<T> {
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

    fn read_cell(&self, x: usize, y: usize) -> Result<T> {
        self.data
            .get(linear_index(x, y, self.width))
            .cloned()
            .ok_or_else(|| self.out_of_range(x as i32, y as i32))
    }

    fn is_dense(&self) -> bool {
        true
    }
}

impl<T: Clone> Matrix for ArrayMatrix<T> {
    type Row<'a>
        = RowView<'a, Self>
    where
        Self: 'a;
    type Column<'a>
        = ColumnView<'a, Self>
    where
        Self: 'a;

    fn row(&self, index: usize) -> Result<Self::Row<'_>> {
        RowView::new(self, index)
    }

    fn column(&self, index: usize) -> Result<Self::Column<'_>> {
        ColumnView::new(self, index)
    }
}

impl<T: Clone> MutableSparseMatrix for ArrayMatrix<T> {
    fn write_cell(&mut self, x: usize, y: usize, value: T) -> Result<T> {
        let i = linear_index(x, y, self.width);
        match self.data.get_mut(i) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(self.out_of_range(x as i32, y as i32)),
        }
    }

    fn fill(&mut self, value: T) -> Result<()> {
        trace!(cells = self.data.len(), "bulk fill");
        self.data.fill(value);
        Ok(())
    }
}

impl<T: Clone> MutableMatrix for ArrayMatrix<T> {}

impl_display!(ArrayMatrix<T>);
