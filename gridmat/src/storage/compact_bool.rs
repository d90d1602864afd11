//! Packed tri-state boolean storage
//!
//! Each cell is one signed byte: `-1` for a sparse cell, `0` for `false` and
//! `1` for `true`. The sign bit alone decides validity. The raw codes can be
//! exchanged as bytes without copying through [`CompactBoolMatrix::as_bytes`].

use gridmat_core::equality::sticks_out;
use gridmat_core::validation::{check_buffer_len, check_coordinate, checked_area, linear_index};
use gridmat_core::{MatrixError, MutableSparseMatrix, Result, SparseMatrix, SparseValue};
use tracing::{trace, warn};

use super::impl_display;

/// Code of a cell that holds no value
pub const SPARSE: i8 = -1;
/// Code of a cell holding `false`
pub const FALSE: i8 = 0;
/// Code of a cell holding `true`
pub const TRUE: i8 = 1;
// Only produced for the other side of a comparison, never stored
const NON_BOOLEAN: i8 = -2;

/// Sparse boolean matrix with one byte per cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompactBoolMatrix {
    width: usize,
    height: usize,
    data: Vec<i8>,
}

const fn encode(value: bool) -> i8 {
    if value {
        TRUE
    } else {
        FALSE
    }
}

impl CompactBoolMatrix {
    /// Create a matrix whose valid cells are those accepted by `validator`
    pub fn new<V, F>(width: usize, height: usize, mut validator: V, mut init: F) -> Result<Self>
    where
        V: FnMut(i32, i32) -> bool,
        F: FnMut(i32, i32) -> bool,
    {
        Self::from_sparse_values(width, height, |x, y| {
            if validator(x, y) {
                SparseValue::Valid(init(x, y))
            } else {
                SparseValue::Sparse
            }
        })
    }

    /// Create a matrix where every in-range cell is valid
    pub fn from_fn<F>(width: usize, height: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> bool,
    {
        Self::from_sparse_values(width, height, |x, y| SparseValue::Valid(init(x, y)))
    }

    /// Create a matrix from one combined initializer per cell
    pub fn from_sparse_values<F>(width: usize, height: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> SparseValue<bool>,
    {
        let area = checked_area(width, height)?;
        let mut data = Vec::with_capacity(area);
        for y in 0..height {
            for x in 0..width {
                data.push(match init(x as i32, y as i32) {
                    SparseValue::Valid(value) => encode(value),
                    SparseValue::Sparse => SPARSE,
                });
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap raw row-major codes; every code must be `-1`, `0` or `1`
    pub fn from_codes(width: usize, codes: Vec<i8>) -> Result<Self> {
        let height = check_buffer_len(codes.len(), width).inspect_err(|_| {
            warn!(len = codes.len(), width, "code buffer does not split into rows");
        })?;
        if let Some(code) = codes.iter().find(|&&c| !matches!(c, SPARSE | FALSE | TRUE)) {
            warn!(code = *code, "packed boolean code outside {{-1, 0, 1}}");
            return Err(MatrixError::ConstructionContract(
                "packed boolean code outside {-1, 0, 1}",
            ));
        }
        Ok(Self {
            width,
            height,
            data: codes,
        })
    }

    /// Wrap raw codes given as bytes (`0xFF` is sparse)
    pub fn from_bytes(width: usize, bytes: &[u8]) -> Result<Self> {
        Self::from_codes(width, bytemuck::cast_slice::<u8, i8>(bytes).to_vec())
    }

    /// The raw codes in row-major order
    pub fn codes(&self) -> &[i8] {
        &self.data
    }

    /// The raw codes reinterpreted as bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// The raw code at `(x, y)`
    pub fn code_at(&self, x: i32, y: i32) -> Result<i8> {
        let (cx, cy) = check_coordinate(x, y, self.width, self.height)?;
        self.code(cx, cy).ok_or(MatrixError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    fn code(&self, x: usize, y: usize) -> Option<i8> {
        self.data.get(linear_index(x, y, self.width)).copied()
    }

    /// Comparison code of a foreign cell: sparse, false, true or neither
    fn foreign_code<M>(other: &M, x: usize, y: usize) -> i8
    where
        M: SparseMatrix + ?Sized,
        bool: PartialEq<M::Element>,
    {
        if !other.validator(x, y) {
            return SPARSE;
        }
        match other.read_cell(x, y) {
            Ok(value) if true == value => TRUE,
            Ok(value) if false == value => FALSE,
            _ => NON_BOOLEAN,
        }
    }
}

impl SparseMatrix for CompactBoolMatrix {
    type Element = bool;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, x: usize, y: usize) -> bool {
        matches!(self.code(x, y), Some(code) if code >= 0)
    }

    fn read_cell(&self, x: usize, y: usize) -> Result<bool> {
        match self.code(x, y) {
            Some(TRUE) => Ok(true),
            Some(FALSE) => Ok(false),
            _ => Err(MatrixError::SparseAccess {
                x: x as i32,
                y: y as i32,
            }),
        }
    }

    /// Compares native codes against the other matrix's cell states, without
    /// decoding this matrix's cells
    fn content_equals<M>(&self, other: &M) -> bool
    where
        M: SparseMatrix + ?Sized,
        Self::Element: PartialEq<M::Element>,
    {
        let overlap_w = self.width.min(other.max_width());
        let overlap_h = self.height.min(other.max_height());

        if sticks_out(self, overlap_w, overlap_h) || sticks_out(other, overlap_w, overlap_h) {
            return false;
        }

        for y in 0..overlap_h {
            for x in 0..overlap_w {
                if self.code(x, y) != Some(Self::foreign_code(other, x, y)) {
                    return false;
                }
            }
        }
        true
    }
}

impl MutableSparseMatrix for CompactBoolMatrix {
    fn write_cell(&mut self, x: usize, y: usize, value: bool) -> Result<bool> {
        match self.data.get_mut(linear_index(x, y, self.width)) {
            Some(code) if *code >= 0 => {
                let previous = *code == TRUE;
                *code = encode(value);
                Ok(previous)
            }
            _ => Err(MatrixError::SparseAccess {
                x: x as i32,
                y: y as i32,
            }),
        }
    }

    fn fill(&mut self, value: bool) -> Result<()> {
        trace!(cells = self.data.len(), "bulk fill of valid codes");
        let code = encode(value);
        for slot in self.data.iter_mut().filter(|c| **c >= 0) {
            *slot = code;
        }
        Ok(())
    }
}

impl_display!(CompactBoolMatrix);
