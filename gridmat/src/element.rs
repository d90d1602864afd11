//! Element types and their sparse storage strategy
//!
//! The sparse factories pick a storage strategy at compile time from the
//! element type: `bool` is packed into [`CompactBoolMatrix`], every other
//! element type uses [`ArraySparseMatrix`].

use gridmat_core::{MutableSparseMatrix, Result, SparseValue};

use crate::storage::{ArraySparseMatrix, CompactBoolMatrix};

/// A writable sparse strategy that can be built from a combined initializer
pub trait SparseStorage<T>: MutableSparseMatrix<Element = T> + Clone {
    /// Strategy name used in log events
    const STRATEGY: &'static str;

    /// Build storage where `init(x, y)` decides value and validity of each cell
    fn from_sparse_values<F>(width: usize, height: usize, init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> SparseValue<T>;
}

impl<T: Clone> SparseStorage<T> for ArraySparseMatrix<T> {
    const STRATEGY: &'static str = "ArraySparseMatrix";

    fn from_sparse_values<F>(width: usize, height: usize, init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> SparseValue<T>,
    {
        ArraySparseMatrix::from_sparse_values(width, height, init)
    }
}

impl SparseStorage<bool> for CompactBoolMatrix {
    const STRATEGY: &'static str = "CompactBoolMatrix";

    fn from_sparse_values<F>(width: usize, height: usize, init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> SparseValue<bool>,
    {
        CompactBoolMatrix::from_sparse_values(width, height, init)
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Element types must be:
/// - Clone: reads hand out owned values
/// - PartialEq: needed by content equality and list search
/// - 'static: function-backed strategies hold them behind shared callbacks
pub trait MatrixElement: Clone + PartialEq + 'static {
    /// The storage strategy selected for validator-gated matrices
    type SparseStorage: SparseStorage<Self>;
}

impl MatrixElement for bool {
    type SparseStorage = CompactBoolMatrix;
}

macro_rules! array_backed_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                type SparseStorage = ArraySparseMatrix<$t>;
            }
        )*
    };
}

array_backed_element!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    char,
    String,
    &'static str,
);
