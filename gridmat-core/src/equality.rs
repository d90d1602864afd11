//! Content equality across storage strategies
//!
//! Two matrices are content-equal when the cells outside their common overlap
//! are all sparse and, inside the overlap, validity and values agree cell by
//! cell. Shapes may differ as long as the extra area is empty. Two dense
//! matrices must have the same dimensions.

use crate::{Matrix, SparseMatrix};

/// Structural equality of two sparse matrices of any backend
pub fn content_equals<A, B>(a: &A, b: &B) -> bool
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
    A::Element: PartialEq<B::Element>,
{
    if a.is_dense() && b.is_dense() {
        return a.dimensions() == b.dimensions() && cells_equal(a, b);
    }

    let overlap_w = a.max_width().min(b.max_width());
    let overlap_h = a.max_height().min(b.max_height());

    if sticks_out(a, overlap_w, overlap_h) || sticks_out(b, overlap_w, overlap_h) {
        return false;
    }

    for y in 0..overlap_h {
        for x in 0..overlap_w {
            let valid = a.validator(x, y);
            if valid != b.validator(x, y) {
                return false;
            }
            if valid && !read_equal(a, b, x, y) {
                return false;
            }
        }
    }
    true
}

/// Dense equality: same dimensions and every cell equal
pub fn dense_content_equals<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
    A::Element: PartialEq<B::Element>,
{
    a.dimensions() == b.dimensions() && cells_equal(a, b)
}

/// Whether `m` has a valid cell outside `[0, overlap_w) x [0, overlap_h)`
///
/// Columns right of the overlap are scanned over the full height; rows below
/// it only under the overlap columns, so no cell is visited twice.
pub fn sticks_out<M>(m: &M, overlap_w: usize, overlap_h: usize) -> bool
where
    M: SparseMatrix + ?Sized,
{
    let (width, height) = m.dimensions();

    for x in overlap_w..width {
        if (0..height).any(|y| m.validator(x, y)) {
            return true;
        }
    }

    for y in overlap_h..height {
        if (0..overlap_w.min(width)).any(|x| m.validator(x, y)) {
            return true;
        }
    }
    false
}

// Caller guarantees equal dimensions and that every cell is valid
fn cells_equal<A, B>(a: &A, b: &B) -> bool
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
    A::Element: PartialEq<B::Element>,
{
    let (width, height) = a.dimensions();
    (0..height).all(|y| (0..width).all(|x| read_equal(a, b, x, y)))
}

fn read_equal<A, B>(a: &A, b: &B, x: usize, y: usize) -> bool
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
    A::Element: PartialEq<B::Element>,
{
    match (a.read_cell(x, y), b.read_cell(x, y)) {
        (Ok(va), Ok(vb)) => va == vb,
        _ => false,
    }
}
