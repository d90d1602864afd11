//! Matrix factories
//!
//! Each factory picks the cheapest storage strategy for the kind of input it
//! receives: constant values get [`SingleValueMatrix`] /
//! [`SingleValueSparseMatrix`], per-cell initializers get array storage, and
//! callbacks that should run on every read get the function-backed
//! strategies. Sparse array storage is chosen by element type through
//! [`MatrixElement`].

use gridmat_core::{Matrix, Result, SparseMatrix, SparseValue};
use tracing::debug;

use crate::element::{MatrixElement, SparseStorage};
use crate::storage::{
    ArrayMatrix, FunMatrix, FunSparseMatrix, SingleValueMatrix, SingleValueSparseMatrix,
};

/// Dense matrix materialized from `init(x, y)`
pub fn matrix<T, F>(width: usize, height: usize, init: F) -> Result<ArrayMatrix<T>>
where
    F: FnMut(i32, i32) -> T,
{
    debug!(strategy = "ArrayMatrix", width, height, "selected storage");
    ArrayMatrix::new(width, height, init)
}

/// Dense matrix with `value` in every cell, without per-cell storage
pub fn filled_matrix<T>(width: usize, height: usize, value: T) -> SingleValueMatrix<T> {
    debug!(strategy = "SingleValueMatrix", width, height, "selected storage");
    SingleValueMatrix::new(width, height, value)
}

/// Writable dense matrix with `value` in every cell
pub fn mutable_filled_matrix<T: Clone>(
    width: usize,
    height: usize,
    value: T,
) -> Result<ArrayMatrix<T>> {
    debug!(strategy = "ArrayMatrix", width, height, "selected storage");
    ArrayMatrix::filled(width, height, value)
}

/// Dense matrix computing `function(x, y)` on every read
pub fn function_matrix<T, F>(width: usize, height: usize, function: F) -> FunMatrix<T>
where
    F: Fn(i32, i32) -> T + 'static,
{
    debug!(strategy = "FunMatrix", width, height, "selected storage");
    FunMatrix::new(width, height, function)
}

/// Sparse matrix materialized from a validator and an initializer
///
/// The validator runs once per cell; `init` only for valid cells. Boolean
/// elements are packed, other elements use a slot per cell.
pub fn sparse_matrix<T, V, F>(
    width: usize,
    height: usize,
    mut validator: V,
    mut init: F,
) -> Result<T::SparseStorage>
where
    T: MatrixElement,
    V: FnMut(i32, i32) -> bool,
    F: FnMut(i32, i32) -> T,
{
    sparse_matrix_from_values(width, height, |x, y| {
        if validator(x, y) {
            SparseValue::Valid(init(x, y))
        } else {
            SparseValue::Sparse
        }
    })
}

/// Sparse matrix materialized from one combined initializer per cell
pub fn sparse_matrix_from_values<T, F>(
    width: usize,
    height: usize,
    init: F,
) -> Result<T::SparseStorage>
where
    T: MatrixElement,
    F: FnMut(i32, i32) -> SparseValue<T>,
{
    let strategy = <T::SparseStorage as SparseStorage<T>>::STRATEGY;
    debug!(strategy, width, height, "selected storage");
    <T::SparseStorage as SparseStorage<T>>::from_sparse_values(width, height, init)
}

/// Sparse matrix with `value` in every cell accepted by `validator`
pub fn filled_sparse_matrix<T, V>(
    width: usize,
    height: usize,
    value: T,
    validator: V,
) -> SingleValueSparseMatrix<T>
where
    V: Fn(i32, i32) -> bool + 'static,
{
    debug!(strategy = "SingleValueSparseMatrix", width, height, "selected storage");
    SingleValueSparseMatrix::new(width, height, value, validator)
}

/// Sparse matrix evaluating `validator` and `function` on every access
pub fn function_sparse_matrix<T, V, F>(
    width: usize,
    height: usize,
    validator: V,
    function: F,
) -> FunSparseMatrix<T>
where
    V: Fn(i32, i32) -> bool + 'static,
    F: Fn(i32, i32) -> T + 'static,
{
    debug!(strategy = "FunSparseMatrix", width, height, "selected storage");
    FunSparseMatrix::new(width, height, validator, function)
}

/// Sparse matrix evaluating one combined function on every access
pub fn function_sparse_matrix_from_values<T, F>(
    width: usize,
    height: usize,
    function: F,
) -> FunSparseMatrix<T>
where
    F: Fn(i32, i32) -> SparseValue<T> + 'static,
{
    debug!(strategy = "FunSparseMatrix", width, height, combined = true, "selected storage");
    FunSparseMatrix::from_sparse_values(width, height, function)
}

/// Independent copy of `source` in its own strategy
///
/// Array strategies duplicate their buffer; function-backed strategies share
/// their callbacks, and constant strategies clone one value.
pub fn copy_of<M>(source: &M) -> M
where
    M: SparseMatrix + Clone,
{
    let (width, height) = source.dimensions();
    debug!(width, height, "copying matrix");
    source.copy_of()
}

/// Writable dense copy of any dense matrix
pub fn mutable_copy_of<M>(source: &M) -> Result<ArrayMatrix<M::Element>>
where
    M: Matrix + ?Sized,
{
    let (width, height) = source.dimensions();
    debug!(strategy = "ArrayMatrix", width, height, "materializing copy");
    let mut data = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            data.push(source.read_cell(x, y)?);
        }
    }
    ArrayMatrix::from_parts(width, height, data)
}

/// Writable sparse copy of any matrix, keeping its validity layout
pub fn mutable_sparse_copy_of<M>(
    source: &M,
) -> Result<<M::Element as MatrixElement>::SparseStorage>
where
    M: SparseMatrix + ?Sized,
    M::Element: MatrixElement,
{
    map_sparse(source, |value| value)
}

/// Dense matrix holding `transform` of every cell of `source`
///
/// The result is materialized immediately; `source` is not referenced
/// afterwards.
pub fn map_matrix<M, R, F>(source: &M, mut transform: F) -> Result<ArrayMatrix<R>>
where
    M: Matrix + ?Sized,
    F: FnMut(M::Element) -> R,
{
    let (width, height) = source.dimensions();
    debug!(strategy = "ArrayMatrix", width, height, "mapping matrix");
    let mut data = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            data.push(transform(source.read_cell(x, y)?));
        }
    }
    ArrayMatrix::from_parts(width, height, data)
}

/// Sparse matrix holding `transform` of every valid cell of `source`
///
/// Cells sparse in `source` stay sparse. The storage strategy is chosen by
/// the result element type.
pub fn map_sparse<M, R, F>(source: &M, mut transform: F) -> Result<R::SparseStorage>
where
    M: SparseMatrix + ?Sized,
    R: MatrixElement,
    F: FnMut(M::Element) -> R,
{
    let (width, height) = source.dimensions();
    let strategy = <R::SparseStorage as SparseStorage<R>>::STRATEGY;
    debug!(strategy, width, height, "mapping sparse matrix");
    let mut slots = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            slots.push(if source.validator(x, y) {
                Some(transform(source.read_cell(x, y)?))
            } else {
                None
            });
        }
    }
    from_slots(width, height, slots)
}

/// Sparse matrix from a dense matrix of tagged cells
///
/// `Valid` cells become valid cells holding their value, `Sparse` cells
/// become sparse.
pub fn sparse_matrix_from_value_matrix<M, T>(source: &M) -> Result<T::SparseStorage>
where
    M: Matrix<Element = SparseValue<T>> + ?Sized,
    T: MatrixElement,
{
    let (width, height) = source.dimensions();
    let strategy = <T::SparseStorage as SparseStorage<T>>::STRATEGY;
    debug!(strategy, width, height, "unpacking value matrix");
    let mut slots = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            slots.push(source.read_cell(x, y)?.into_option());
        }
    }
    from_slots(width, height, slots)
}

/// Build element-selected sparse storage from row-major optional slots
fn from_slots<T: MatrixElement>(
    width: usize,
    height: usize,
    slots: Vec<Option<T>>,
) -> Result<T::SparseStorage> {
    let mut slots = slots.into_iter();
    <T::SparseStorage as SparseStorage<T>>::from_sparse_values(width, height, |_, _| {
        slots.next().flatten().into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmat_core::{MatrixError, MutableListView, MutableMatrix, MutableSparseMatrix};

    #[test]
    fn test_dense_factories() {
        let m = matrix(3, 3, |x, y| x + y * 3).unwrap();
        assert_eq!(m.get(2, 2), Ok(8));

        let constant = filled_matrix(2, 2, 'c');
        assert_eq!(constant.get(1, 1), Ok('c'));

        let mut writable = mutable_filled_matrix(2, 2, 0u8).unwrap();
        writable.set(1, 0, 5).unwrap();
        assert_eq!(writable.as_slice(), &[0, 5, 0, 0]);

        let lazy = function_matrix(2, 2, |x, y| x * y);
        assert!(lazy.content_equals(&matrix(2, 2, |x, y| x * y).unwrap()));
    }

    #[test]
    fn test_sparse_factories_pick_strategy_by_element() {
        let packed = sparse_matrix(3, 3, |x, y| x != y, |x, _| x > 0).unwrap();
        assert_eq!(packed.code_at(0, 0), Ok(-1));
        assert_eq!(packed.get(1, 0), Ok(true));

        let slots = sparse_matrix(3, 3, |x, y| x != y, |x, y| x * 3 + y).unwrap();
        assert_eq!(slots.valid_count(), 6);
        assert_eq!(slots.get(1, 1), Err(MatrixError::SparseAccess { x: 1, y: 1 }));

        let tagged = sparse_matrix_from_values(2, 2, |x, y| {
            if x == y {
                SparseValue::Valid(x as i64)
            } else {
                SparseValue::Sparse
            }
        })
        .unwrap();
        assert_eq!(tagged.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_function_and_constant_sparse_factories() {
        let constant = filled_sparse_matrix(3, 3, "x", |x, _| x == 1);
        assert_eq!(constant.iter().count(), 3);

        let split = function_sparse_matrix(3, 3, |x, _| x == 1, |_, _| "x");
        assert!(split.content_equals(&constant));

        let combined = function_sparse_matrix_from_values(3, 3, |x, _| {
            if x == 1 {
                SparseValue::Valid("x")
            } else {
                SparseValue::Sparse
            }
        });
        assert!(combined.content_equals(&split));
    }

    #[test]
    fn test_copies_are_independent() {
        let mut original = matrix(2, 2, |x, y| x + y).unwrap();
        let copy = copy_of(&original);
        original.fill(9).unwrap();
        assert_eq!(copy.get(1, 1), Ok(2));
        assert!(!copy.content_equals(&original));
    }

    #[test]
    fn test_mutable_copy_of_dense() {
        let lazy = function_matrix(3, 2, |x, y| x * 10 + y);
        let mut copy = mutable_copy_of(&lazy).unwrap();
        assert!(copy.content_equals(&lazy));
        copy.row_mut(0).unwrap().set(0, -1).unwrap();
        assert_eq!(copy.get(0, 0), Ok(-1));
        assert_eq!(lazy.get(0, 0), Ok(0));
    }

    #[test]
    fn test_mutable_sparse_copy_keeps_validity() {
        let source = function_sparse_matrix(3, 3, |x, y| (x + y) % 2 == 0, |x, y| x == y);
        let mut copy = mutable_sparse_copy_of(&source).unwrap();
        assert!(copy.content_equals(&source));
        assert_eq!(copy.set(1, 0, true), Err(MatrixError::SparseAccess { x: 1, y: 0 }));
        copy.set(2, 0, true).unwrap();
        assert!(!copy.content_equals(&source));
    }

    #[test]
    fn test_map_matrix_from_any_dense_backend() {
        let array = matrix(3, 2, |x, y| x + y * 3).unwrap();
        let doubled = map_matrix(&array, |v| v * 2).unwrap();
        assert_eq!(doubled.as_slice(), &[0, 2, 4, 6, 8, 10]);

        let constant = filled_matrix(2, 2, "ab");
        let lengths = map_matrix(&constant, str::len).unwrap();
        assert!(lengths.content_equals(&filled_matrix(2, 2, 2usize)));
        assert_eq!(lengths.dimensions(), (2, 2));
    }

    #[test]
    fn test_map_sparse_keeps_validity() {
        let slots = sparse_matrix(3, 3, |x, y| x != y, |x, y| x - y).unwrap();
        let positive = map_sparse(&slots, |v| v > 0).unwrap();
        assert_eq!(positive.code_at(1, 1), Ok(-1));
        assert_eq!(positive.get(1, 0), Ok(true));
        assert_eq!(positive.get(0, 1), Ok(false));
        assert!(positive.indices().eq(slots.indices()));

        let packed = sparse_matrix(2, 2, |x, _| x == 0, |_, y| y == 0).unwrap();
        let labels = map_sparse(&packed, |b| if b { "yes" } else { "no" }).unwrap();
        assert_eq!(labels.get(0, 0), Ok("yes"));
        assert_eq!(labels.get(0, 1), Ok("no"));
        assert!(labels.get(1, 0).is_err());

        let constant = filled_sparse_matrix(3, 1, 4u8, |x, _| x != 1);
        let widened = map_sparse(&constant, u32::from).unwrap();
        assert_eq!(widened.iter().collect::<Vec<_>>(), vec![4, 4]);
        assert!(!widened.is_valid(1, 0));
    }

    #[test]
    fn test_sparse_matrix_from_value_matrix() {
        let tagged = matrix(2, 2, |x, y| {
            if x == y {
                SparseValue::Valid(x * 10)
            } else {
                SparseValue::Sparse
            }
        })
        .unwrap();
        let sparse = sparse_matrix_from_value_matrix(&tagged).unwrap();
        assert_eq!(sparse.get(1, 1), Ok(10));
        assert_eq!(sparse.get(1, 0), Err(MatrixError::SparseAccess { x: 1, y: 0 }));
        assert_eq!(sparse.valid_count(), 2);

        let flags = function_matrix(2, 1, |x, _| {
            if x == 0 {
                SparseValue::Sparse
            } else {
                SparseValue::Valid(true)
            }
        });
        let packed = sparse_matrix_from_value_matrix(&flags).unwrap();
        assert_eq!(packed.codes(), &[-1, 1]);
    }
}
