//! Iterators and sublists over list views

use core::iter::FusedIterator;

use crate::validation::check_index;
use crate::{ListView, MutableListView, Result};

/// Double-ended iterator over a [`ListView`]
///
/// A failing `get` ends the iteration from both sides.
pub struct ListIter<'a, L: ?Sized> {
    list: &'a L,
    front: usize,
    back: usize,
}

impl<'a, L: ListView + ?Sized> ListIter<'a, L> {
    pub(crate) fn new(list: &'a L) -> Self {
        Self::starting_at(list, 0)
    }

    pub(crate) fn starting_at(list: &'a L, index: usize) -> Self {
        let back = list.len();
        Self {
            list,
            front: index.min(back),
            back,
        }
    }

    /// Index of the element the next call to `next` returns
    pub fn next_index(&self) -> usize {
        self.front
    }

    fn read(&mut self, index: usize) -> Option<L::Item> {
        match self.list.get(index) {
            Ok(item) => Some(item),
            Err(_) => {
                self.front = self.back;
                None
            }
        }
    }
}

impl<L: ?Sized> Clone for ListIter<'_, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
        }
    }
}

impl<L: ListView + ?Sized> Iterator for ListIter<'_, L> {
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        self.read(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<L: ListView + ?Sized> DoubleEndedIterator for ListIter<'_, L> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.read(self.back)
    }
}

impl<L: ListView + ?Sized> ExactSizeIterator for ListIter<'_, L> {}

impl<L: ListView + ?Sized> FusedIterator for ListIter<'_, L> {}

/// Read-only window `start..start + len` on another list view
pub struct SubList<'a, L: ?Sized> {
    base: &'a L,
    start: usize,
    len: usize,
}

impl<'a, L: ListView + ?Sized> SubList<'a, L> {
    pub(crate) fn new(base: &'a L, from: usize, to: usize) -> Self {
        Self {
            base,
            start: from,
            len: to - from,
        }
    }

    /// Offset of this window in the view it was taken from
    pub fn offset(&self) -> usize {
        self.start
    }
}

impl<L: ListView + ?Sized> ListView for SubList<'_, L> {
    type Item = L::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len)?;
        self.base.get(self.start + index)
    }
}

/// Writable window `start..start + len` on another mutable list view
pub struct SubListMut<'a, L: ?Sized> {
    base: &'a mut L,
    start: usize,
    len: usize,
}

impl<'a, L: MutableListView + ?Sized> SubListMut<'a, L> {
    pub(crate) fn new(base: &'a mut L, from: usize, to: usize) -> Self {
        Self {
            base,
            start: from,
            len: to - from,
        }
    }

    /// Offset of this window in the view it was taken from
    pub fn offset(&self) -> usize {
        self.start
    }
}

impl<L: MutableListView + ?Sized> ListView for SubListMut<'_, L> {
    type Item = L::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<Self::Item> {
        check_index(index, self.len)?;
        self.base.get(self.start + index)
    }
}

impl<L: MutableListView + ?Sized> MutableListView for SubListMut<'_, L> {
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item> {
        check_index(index, self.len)?;
        self.base.set(self.start + index, element)
    }
}
