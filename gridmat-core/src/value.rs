//! Tagged cell initializers

/// The result of a combined initializer: either a value for the cell, or a
/// marker that the cell is sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparseValue<T> {
    /// The cell exists and holds this value
    Valid(T),
    /// The cell does not exist
    Sparse,
}

impl<T> SparseValue<T> {
    /// Whether this marks an existing cell
    pub const fn is_valid(&self) -> bool {
        matches!(self, SparseValue::Valid(_))
    }

    /// Whether this marks a sparse cell
    pub const fn is_sparse(&self) -> bool {
        !self.is_valid()
    }

    /// Convert into an `Option`, `None` for sparse cells
    pub fn into_option(self) -> Option<T> {
        match self {
            SparseValue::Valid(value) => Some(value),
            SparseValue::Sparse => None,
        }
    }

    /// Borrow the contained value
    pub const fn as_ref(&self) -> SparseValue<&T> {
        match self {
            SparseValue::Valid(value) => SparseValue::Valid(value),
            SparseValue::Sparse => SparseValue::Sparse,
        }
    }

    /// Transform the value of a valid cell, keeping sparse cells sparse
    pub fn map<R, F: FnOnce(T) -> R>(self, transform: F) -> SparseValue<R> {
        match self {
            SparseValue::Valid(value) => SparseValue::Valid(transform(value)),
            SparseValue::Sparse => SparseValue::Sparse,
        }
    }
}

impl<T> From<Option<T>> for SparseValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => SparseValue::Valid(value),
            None => SparseValue::Sparse,
        }
    }
}

impl<T> From<SparseValue<T>> for Option<T> {
    fn from(value: SparseValue<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_sparse() {
        assert_eq!(SparseValue::Valid(2).map(|v| v * 10), SparseValue::Valid(20));
        assert_eq!(SparseValue::<i32>::Sparse.map(|v| v * 10), SparseValue::Sparse);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(SparseValue::from(Some('a')), SparseValue::Valid('a'));
        assert!(SparseValue::<char>::from(None).is_sparse());
        assert_eq!(Option::from(SparseValue::Valid(1u8)), Some(1u8));
        assert_eq!(SparseValue::Valid(5).as_ref(), SparseValue::Valid(&5));
    }
}
