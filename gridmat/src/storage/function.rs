//! Function-backed storage
//!
//! Cells are computed on every read; nothing is cached. Copies share the
//! callbacks.

use std::fmt;
use std::rc::Rc;

use gridmat_core::validation::check_coordinate;
use gridmat_core::{ColumnView, Matrix, MatrixError, Result, RowView, SparseMatrix, SparseValue};

use super::{impl_display, Validator, ValueFn};

/// Dense matrix whose cell `(x, y)` is `function(x, y)`
pub struct FunMatrix<T> {
    width: usize,
    height: usize,
    function: ValueFn<T>,
}

impl<T> FunMatrix<T> {
    pub fn new<F>(width: usize, height: usize, function: F) -> Self
    where
        F: Fn(i32, i32) -> T + 'static,
    {
        Self {
            width,
            height,
            function: Rc::new(function),
        }
    }

    /// A lazily transformed matrix computing `mapper(function(x, y))`
    pub fn map<U, G>(&self, mapper: G) -> FunMatrix<U>
    where
        T: 'static,
        G: Fn(T) -> U + 'static,
    {
        let function = Rc::clone(&self.function);
        FunMatrix::new(self.width, self.height, move |x, y| mapper(function(x, y)))
    }
}

impl<T> Clone for FunMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            function: Rc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for FunMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<T> SparseMatrix for FunMatrix<T> {
    type Element = T;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, _x: usize, _y: usize) -> bool {
        true
    }

    fn read_cell(&self, x: usize, y: usize) -> Result<T> {
        Ok((self.function)(x as i32, y as i32))
    }

    fn is_dense(&self) -> bool {
        true
    }
}

impl<T> Matrix for FunMatrix<T> {
    type Row<'a>
        = RowView<'a, Self>
    where
        Self: 'a;
    type Column<'a>
        = ColumnView<'a, Self>
    where
        Self: 'a;

    fn row(&self, index: usize) -> Result<Self::Row<'_>> {
        RowView::new(self, index)
    }

    fn column(&self, index: usize) -> Result<Self::Column<'_>> {
        ColumnView::new(self, index)
    }
}

impl_display!(FunMatrix<T>);

enum Access<T> {
    /// Independent validity predicate and value function
    Split {
        validator: Validator,
        value: ValueFn<T>,
    },
    /// One function whose tag decides validity
    Combined(Rc<dyn Fn(i32, i32) -> SparseValue<T>>),
}

impl<T> Clone for Access<T> {
    fn clone(&self) -> Self {
        match self {
            Access::Split { validator, value } => Access::Split {
                validator: Rc::clone(validator),
                value: Rc::clone(value),
            },
            Access::Combined(function) => Access::Combined(Rc::clone(function)),
        }
    }
}

/// Sparse matrix computed from callbacks on every access
///
/// Built either from a validator plus a value function, or from one function
/// returning [`SparseValue`]. In the combined form a `get` evaluates the
/// function once and uses its tag for validity; validity queries evaluate it
/// too.
pub struct FunSparseMatrix<T> {
    width: usize,
    height: usize,
    access: Access<T>,
}

impl<T> FunSparseMatrix<T> {
    pub fn new<V, F>(width: usize, height: usize, validator: V, value: F) -> Self
    where
        V: Fn(i32, i32) -> bool + 'static,
        F: Fn(i32, i32) -> T + 'static,
    {
        Self {
            width,
            height,
            access: Access::Split {
                validator: Rc::new(validator),
                value: Rc::new(value),
            },
        }
    }

    /// Create a matrix from one combined function per cell
    pub fn from_sparse_values<F>(width: usize, height: usize, function: F) -> Self
    where
        F: Fn(i32, i32) -> SparseValue<T> + 'static,
    {
        Self {
            width,
            height,
            access: Access::Combined(Rc::new(function)),
        }
    }

    /// Whether validity and value come from one combined function
    pub fn is_combined(&self) -> bool {
        matches!(self.access, Access::Combined(_))
    }

    /// A lazily transformed matrix with the same validity
    pub fn map<U, G>(&self, mapper: G) -> FunSparseMatrix<U>
    where
        T: 'static,
        G: Fn(T) -> U + 'static,
    {
        let access = match &self.access {
            Access::Split { validator, value } => {
                let value = Rc::clone(value);
                Access::Split {
                    validator: Rc::clone(validator),
                    value: Rc::new(move |x, y| mapper(value(x, y))),
                }
            }
            Access::Combined(function) => {
                let function = Rc::clone(function);
                Access::Combined(Rc::new(move |x, y| function(x, y).map(&mapper)))
            }
        };
        FunSparseMatrix {
            width: self.width,
            height: self.height,
            access,
        }
    }
}

impl<T> Clone for FunSparseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            access: self.access.clone(),
        }
    }
}

impl<T> fmt::Debug for FunSparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunSparseMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("combined", &self.is_combined())
            .finish_non_exhaustive()
    }
}

impl<T> SparseMatrix for FunSparseMatrix<T> {
    type Element = T;

    fn max_width(&self) -> usize {
        self.width
    }

    fn max_height(&self) -> usize {
        self.height
    }

    fn validator(&self, x: usize, y: usize) -> bool {
        match &self.access {
            Access::Split { validator, .. } => validator(x as i32, y as i32),
            Access::Combined(function) => function(x as i32, y as i32).is_valid(),
        }
    }

    fn read_cell(&self, x: usize, y: usize) -> Result<T> {
        let (x, y) = (x as i32, y as i32);
        match &self.access {
            Access::Split { value, .. } => Ok(value(x, y)),
            Access::Combined(function) => match function(x, y) {
                SparseValue::Valid(value) => Ok(value),
                SparseValue::Sparse => Err(MatrixError::SparseAccess { x, y }),
            },
        }
    }

    fn get(&self, x: i32, y: i32) -> Result<T> {
        match &self.access {
            Access::Split { .. } => {
                let (cx, cy) = self.validate(x, y)?;
                self.read_cell(cx, cy)
            }
            Access::Combined(_) => {
                let (cx, cy) = check_coordinate(x, y, self.width, self.height)?;
                self.read_cell(cx, cy)
            }
        }
    }
}

impl_display!(FunSparseMatrix<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use gridmat_core::ListView;
    use std::cell::Cell;

    #[test]
    fn test_fun_matrix_reads() {
        let m = FunMatrix::new(3, 3, |x, y| x + y * 3);
        assert!((0..9).all(|i| m.get(i % 3, i / 3) == Ok(i)));
        assert!(m.get(3, 0).unwrap_err().is_out_of_range());
        assert_eq!(m.row(2).unwrap().to_vec(), vec![6, 7, 8]);
        assert_eq!(m.column(0).unwrap().to_vec(), vec![0, 3, 6]);
        assert!(m.is_dense());
    }

    #[test]
    fn test_values_are_not_cached() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let m = FunMatrix::new(2, 2, move |x, _| {
            counter.set(counter.get() + 1);
            x
        });
        m.get(1, 1).unwrap();
        m.get(1, 1).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_is_lazy() {
        let m = FunMatrix::new(2, 2, |x, y| x * y);
        let text = m.map(|v| format!("<{v}>"));
        assert_eq!(text.get(1, 1), Ok("<1>".to_string()));

        let sparse = FunSparseMatrix::new(3, 1, |x, _| x != 1, |x, _| x);
        let doubled = sparse.map(|v| v * 2);
        assert_eq!(doubled.get(2, 0), Ok(4));
        assert!(doubled.get(1, 0).is_err());
    }

    #[test]
    fn test_split_sparse_matrix() {
        let m = FunSparseMatrix::new(3, 3, |x, y| !(x == 1 && y == 1), |x, y| x + y * 3);
        assert!(!m.is_combined());
        assert_eq!(m.get(1, 1), Err(MatrixError::SparseAccess { x: 1, y: 1 }));
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_combined_function_runs_once_per_get() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let m = FunSparseMatrix::from_sparse_values(4, 4, move |x, y| {
            counter.set(counter.get() + 1);
            if x == y {
                SparseValue::Valid(x)
            } else {
                SparseValue::Sparse
            }
        });
        assert!(m.is_combined());

        assert_eq!(m.get(2, 2), Ok(2));
        assert_eq!(calls.get(), 1);
        assert_eq!(m.get(1, 2), Err(MatrixError::SparseAccess { x: 1, y: 2 }));
        assert_eq!(calls.get(), 2);
        // Range is checked before the function runs
        assert!(m.get(4, 0).is_err());
        assert_eq!(calls.get(), 2);

        assert!(m.is_valid(3, 3));
        assert!(!m.is_valid(0, 3));
        let mapped = m.map(|v| v + 10);
        assert_eq!(mapped.get(3, 3), Ok(13));
        assert!(mapped.get(0, 1).is_err());
    }

    #[test]
    fn test_copies_share_callbacks() {
        let m = FunSparseMatrix::new(2, 2, |x, _| x == 0, |_, y| y);
        let copy = m.copy_of();
        assert!(copy.content_equals(&m));
        assert_eq!(copy.dimensions(), (2, 2));
    }

    #[test]
    fn test_display() {
        let m = FunSparseMatrix::new(2, 2, |x, y| x == y, |x, _| x * 10);
        assert_eq!(
            m.to_string(),
            "FunSparseMatrix( 0,   \n                  , 10)"
        );
    }
}
