//! Concrete storage strategies
//!
//! Every strategy implements the read primitives of
//! [`SparseMatrix`](gridmat_core::SparseMatrix); the writable ones also
//! implement [`MutableSparseMatrix`](gridmat_core::MutableSparseMatrix).
//! Validation, views, iteration and equality come from the shared trait
//! defaults.

use std::rc::Rc;

/// Shared validity predicate over signed cell coordinates
pub type Validator = Rc<dyn Fn(i32, i32) -> bool>;

/// Shared per-cell value function
pub type ValueFn<T> = Rc<dyn Fn(i32, i32) -> T>;

/// Write a matrix through the text dump, prefixed with its strategy name
macro_rules! impl_display {
    ($name:ident < $t:ident >) => {
        impl<$t> std::fmt::Display for $name<$t>
        where
            $t: std::fmt::Display,
            $name<$t>: gridmat_core::SparseMatrix<Element = $t>,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&gridmat_core::to_string_with_prefix(self, stringify!($name)))
            }
        }
    };
    ($name:ident) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&gridmat_core::to_string_with_prefix(self, stringify!($name)))
            }
        }
    };
}

pub(crate) use impl_display;

pub mod compact_bool;
pub mod dense;
pub mod function;
pub mod single_value;
pub mod sparse_array;

pub use compact_bool::CompactBoolMatrix;
pub use dense::ArrayMatrix;
pub use function::{FunMatrix, FunSparseMatrix};
pub use single_value::{SingleValueMatrix, SingleValueSparseMatrix};
pub use sparse_array::ArraySparseMatrix;
