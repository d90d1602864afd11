//! Non-owning views and lazy iterators over matrices and lists

pub mod axis;
pub mod indices;
pub mod list;

pub use axis::{ColumnView, ColumnViewMut, ConstantView, RowView, RowViewMut};
pub use indices::{Indices, Values};
pub use list::{ListIter, SubList, SubListMut};
