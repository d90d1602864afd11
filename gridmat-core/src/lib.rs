#![no_std]

//! Gridmat Core - grid capability traits and shared algorithms
//!
//! This crate defines the contracts every grid storage strategy implements,
//! together with the algorithms built purely on those contracts: bounds
//! validation, row/column/sublist views, lazy index scans, cross-backend
//! content equality and (with `alloc`) the text dump.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod coordinate;
#[cfg(feature = "alloc")]
pub mod dump;
pub mod equality;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value;
pub mod view;

#[cfg(test)]
mod proptests;

pub use coordinate::Coordinate;
#[cfg(feature = "alloc")]
pub use dump::{to_string_with_prefix, DumpOptions};
pub use error::*;
pub use traits::*;
pub use value::SparseValue;
pub use view::{
    ColumnView, ColumnViewMut, ConstantView, Indices, ListIter, RowView, RowViewMut, SubList,
    SubListMut, Values,
};
