//! Lazy row-major scans over the valid cells of a matrix

use core::iter::FusedIterator;

use crate::{Coordinate, SparseMatrix};

/// Row-major cursor over `width x height` cells
#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
    x: usize,
    y: usize,
}

impl Cursor {
    /// Advance to the next cell accepted by the validator
    fn next_valid<M>(&mut self, matrix: &M, width: usize, height: usize) -> Option<(usize, usize)>
    where
        M: SparseMatrix + ?Sized,
    {
        while self.y < height {
            if self.x >= width {
                self.x = 0;
                self.y += 1;
                continue;
            }
            let (x, y) = (self.x, self.y);
            self.x += 1;
            if matrix.validator(x, y) {
                return Some((x, y));
            }
        }
        None
    }

    /// Upper bound on the cells left to scan
    fn remaining(&self, width: usize, height: usize) -> usize {
        if self.y >= height {
            return 0;
        }
        (height - self.y)
            .saturating_mul(width)
            .saturating_sub(self.x.min(width))
    }
}

/// Iterator over the valid coordinates of a matrix, y outer, x inner
///
/// The scan is computed on the fly and asks the validator once per cell.
/// Calling [`SparseMatrix::indices`] again (or cloning) restarts it.
///
/// Only cells whose position fits a [`Coordinate`] are scanned: columns and
/// rows at or beyond [`Coordinate::AXIS_LIMIT`] are never yielded. Use
/// [`Values`] to visit every valid cell of a larger matrix.
pub struct Indices<'a, M: ?Sized> {
    matrix: &'a M,
    cursor: Cursor,
}

impl<'a, M: SparseMatrix + ?Sized> Indices<'a, M> {
    pub(crate) fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            cursor: Cursor::default(),
        }
    }

    fn extent(&self) -> (usize, usize) {
        let (width, height) = self.matrix.dimensions();
        (
            width.min(Coordinate::AXIS_LIMIT),
            height.min(Coordinate::AXIS_LIMIT),
        )
    }
}

impl<M: ?Sized> Clone for Indices<'_, M> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix,
            cursor: self.cursor,
        }
    }
}

impl<M: SparseMatrix + ?Sized> Iterator for Indices<'_, M> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let (width, height) = self.extent();
        let (x, y) = self.cursor.next_valid(self.matrix, width, height)?;
        Some(Coordinate::new(x as i32, y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (width, height) = self.extent();
        (0, Some(self.cursor.remaining(width, height)))
    }
}

impl<M: SparseMatrix + ?Sized> FusedIterator for Indices<'_, M> {}

/// Iterator over the values of all valid cells in row-major order
///
/// Scans the full shape of the matrix with its own position, so it is not
/// bounded by the [`Coordinate`] range.
pub struct Values<'a, M: ?Sized> {
    matrix: &'a M,
    cursor: Cursor,
}

impl<'a, M: SparseMatrix + ?Sized> Values<'a, M> {
    pub(crate) fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            cursor: Cursor::default(),
        }
    }
}

impl<M: ?Sized> Clone for Values<'_, M> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix,
            cursor: self.cursor,
        }
    }
}

impl<M: SparseMatrix + ?Sized> Iterator for Values<'_, M> {
    type Item = M::Element;

    fn next(&mut self) -> Option<M::Element> {
        let (width, height) = self.matrix.dimensions();
        // Cells whose read fails after the validator accepted them are skipped.
        loop {
            let (x, y) = self.cursor.next_valid(self.matrix, width, height)?;
            if let Ok(value) = self.matrix.read_cell(x, y) {
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (width, height) = self.matrix.dimensions();
        (0, Some(self.cursor.remaining(width, height)))
    }
}

impl<M: SparseMatrix + ?Sized> FusedIterator for Values<'_, M> {}
