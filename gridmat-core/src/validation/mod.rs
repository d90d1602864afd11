//! Bounds validation for grid coordinates, view indices and buffers
//!
//! Pure functions with no allocation; every storage strategy and view goes
//! through these before reading or writing.

pub mod bounds;

pub use bounds::{
    cell_index, check_buffer_len, check_coordinate, check_index, check_range, checked_area,
    linear_index,
};
