//! Fixed-size list views
//!
//! A [`ListView`] only needs `len` and `get`; containment, search, iteration
//! and sublists are derived from those two. Views never copy the underlying
//! data.

use crate::validation::{check_index, check_range};
use crate::view::{ListIter, SubList, SubListMut};
use crate::Result;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Read access to an indexed, fixed-size collection
pub trait ListView {
    /// The element type of the view
    type Item;

    /// Number of elements in the view
    fn len(&self) -> usize;

    /// Get the element at `index`
    ///
    /// Must succeed for every `index < len()`. Fails with [`IndexOutOfRange`](crate::MatrixError::IndexOutOfRange)
    /// carrying this view's own size when `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first element equal to `element`
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (0..self.len()).find(|&i| matches!(self.get(i), Ok(ref v) if v == element))
    }

    /// Position of the last element equal to `element`
    fn last_index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (0..self.len())
            .rev()
            .find(|&i| matches!(self.get(i), Ok(ref v) if v == element))
    }

    /// Linear scan for `element`
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Whether every element of `elements` is contained; O(n * m)
    fn contains_all<'e, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'e Self::Item>,
        Self::Item: PartialEq + 'e,
    {
        elements.into_iter().all(|e| self.contains(e))
    }

    /// Iterate over the view, front to back or back to front
    fn iter(&self) -> ListIter<'_, Self> {
        ListIter::new(self)
    }

    /// Iterate starting at `index`; `index == len()` yields an exhausted
    /// forward iterator
    fn iter_from(&self, index: usize) -> Result<ListIter<'_, Self>> {
        if index != self.len() {
            check_index(index, self.len())?;
        }
        Ok(ListIter::starting_at(self, index))
    }

    /// Lazily offset view on `from..to`
    fn sublist(&self, from: usize, to: usize) -> Result<SubList<'_, Self>> {
        check_range(from, to, self.len())?;
        Ok(SubList::new(self, from, to))
    }

    /// Copy the elements into a vector
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

/// A list view that allows replacing elements, but not adding or removing them
pub trait MutableListView: ListView {
    /// Replace the element at `index`, returning the previous one
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item>;

    /// Lazily offset mutable view on `from..to`
    fn sublist_mut(&mut self, from: usize, to: usize) -> Result<SubListMut<'_, Self>> {
        check_range(from, to, self.len())?;
        Ok(SubListMut::new(self, from, to))
    }
}
