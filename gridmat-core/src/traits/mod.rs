//! Capability traits for grids and list views
//!
//! One trait per concern: reading a sparse grid, the dense refinement,
//! writing, and indexed list access. Shared algorithms are default methods
//! or free functions over these traits.

pub mod list;
pub mod matrix;

pub use list::{ListView, MutableListView};
pub use matrix::{Matrix, MutableMatrix, MutableSparseMatrix, SparseMatrix};
