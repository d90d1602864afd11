//! Column-aligned text rendering of a matrix
//!
//! ```text
//! Matrix(0, 1, 2
//!        3, 4, 5)
//! ```
//!
//! Every cell is right-aligned to the widest rendered value. Continuation
//! rows are indented past the prefix and its opening parenthesis.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use crate::SparseMatrix;

/// Configuration for [`SparseMatrix`] text dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions<'a> {
    prefix: &'a str,
    sparse_placeholder: &'a str,
}

impl Default for DumpOptions<'_> {
    fn default() -> Self {
        Self {
            prefix: "",
            sparse_placeholder: "",
        }
    }
}

impl<'a> DumpOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written before the opening parenthesis
    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Text rendered for sparse cells, empty by default
    pub fn with_sparse_placeholder(mut self, placeholder: &'a str) -> Self {
        self.sparse_placeholder = placeholder;
        self
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    pub fn sparse_placeholder(&self) -> &'a str {
        self.sparse_placeholder
    }

    /// Render `matrix` with these options
    pub fn render<M>(&self, matrix: &M) -> String
    where
        M: SparseMatrix + ?Sized,
        M::Element: Display,
    {
        let (width, height) = matrix.dimensions();

        // Stringify every cell exactly once
        let mut cells: Vec<String> = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                let text = if matrix.validator(x, y) {
                    match matrix.read_cell(x, y) {
                        Ok(value) => value.to_string(),
                        Err(_) => self.sparse_placeholder.to_string(),
                    }
                } else {
                    self.sparse_placeholder.to_string()
                };
                cells.push(text);
            }
        }

        let column_width = cells.iter().map(|s| s.chars().count()).max().unwrap_or(0);

        // Continuation rows start under the first cell, one column past `(`.
        let mut separator = String::from("\n");
        separator.extend(core::iter::repeat(' ').take(self.prefix.chars().count() + 1));

        let mut out = String::new();
        out.push_str(self.prefix);
        out.push('(');
        if width > 0 {
            for (row_index, row) in cells.chunks(width).enumerate() {
                if row_index > 0 {
                    out.push_str(&separator);
                }
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let pad = column_width - cell.chars().count();
                    out.extend(core::iter::repeat(' ').take(pad));
                    out.push_str(cell);
                }
            }
        } else {
            // Zero-width rows still produce one empty line each
            for row_index in 0..height {
                if row_index > 0 {
                    out.push_str(&separator);
                }
            }
        }
        out.push(')');
        out
    }
}

/// Render `matrix` with the default options and the given prefix
pub fn to_string_with_prefix<M>(matrix: &M, prefix: &str) -> String
where
    M: SparseMatrix + ?Sized,
    M::Element: Display,
{
    DumpOptions::new().with_prefix(prefix).render(matrix)
}
