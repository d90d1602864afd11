//! Gridmat - dense and sparse 2D grids with pluggable storage
//!
//! This library provides fixed-size 2D grids in a dense flavor (every in-range
//! cell holds a value) and a sparse flavor (a validity predicate decides which
//! cells exist), backed by several storage strategies.
//!
//! ## Architecture
//!
//! Gridmat separates contracts from implementations:
//!
//! - **gridmat-core**: capability traits, coordinate codec, bounds validation,
//!   views, equality and text dump (`no_std`)
//! - **gridmat**: concrete storage strategies, factories and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmat::{factory, ListView, Matrix, MatrixError, SparseMatrix};
//!
//! fn example() -> Result<(), MatrixError> {
//!     let dense = factory::matrix(3, 3, |x, y| x + y * 3)?;
//!     assert_eq!(dense.get(2, 1)?, 5);
//!     assert_eq!(dense.row(1)?.to_vec(), vec![3, 4, 5]);
//!
//!     let sparse = factory::sparse_matrix(3, 3, |x, y| x != y, |x, y| x * y)?;
//!     assert!(sparse.get(1, 1).is_err());
//!     assert_eq!(sparse.iter().count(), 6);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Storage strategies
//!
//! - **ArrayMatrix**: dense row-major buffer, writable
//! - **ArraySparseMatrix**: one optional slot per cell, validity fixed at construction
//! - **CompactBoolMatrix**: packed `{sparse, false, true}` byte codes
//! - **FunMatrix / FunSparseMatrix**: computed on every read, never cached
//! - **SingleValueMatrix / SingleValueSparseMatrix**: one shared value, O(1) fill

// Re-export core abstractions
pub use gridmat_core::{
    // Core traits
    ListView, Matrix, MutableListView, MutableMatrix, MutableSparseMatrix, SparseMatrix,
    // Values and coordinates
    Coordinate, SparseValue,
    // Views
    ColumnView, ColumnViewMut, ConstantView, Indices, ListIter, RowView, RowViewMut, SubList,
    SubListMut, Values,
    // Text dump
    to_string_with_prefix, DumpOptions,
    // Error handling
    ErrorCategory, MatrixError, Result,
};
pub use gridmat_core::{equality, validation};

// Implementation modules
pub mod element;
pub mod factory;
pub mod storage;

// Public exports
pub use element::{MatrixElement, SparseStorage};
pub use storage::{
    ArrayMatrix, ArraySparseMatrix, CompactBoolMatrix, FunMatrix, FunSparseMatrix,
    SingleValueMatrix, SingleValueSparseMatrix, Validator, ValueFn,
};
