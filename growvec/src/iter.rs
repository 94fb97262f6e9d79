#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

//! By-value iteration over a [`Vector`](crate::Vector).
//!
//! # Examples
//!
//! ```
//! use growvec::prelude::*;
//! let v = vector!["a".to_string(), "b".to_string(), "c".to_string()];
//! let mut iter = v.into_iter();
//! assert_eq!(iter.next().as_deref(), Some("a"));
//! assert_eq!(iter.next_back().as_deref(), Some("c"));
//! assert_eq!(iter.as_slice(), ["b"]);
//! // "b" is dropped along with the iterator.
//! ```

use crate::raw::RawStorage;
use core::iter::FusedIterator;

/// Owning iterator over the elements of a [`Vector`](crate::Vector).
///
/// Takes over the vector's storage, so creating it moves no element. Elements not yet
/// yielded are dropped with the iterator.
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    // Live values occupy `[start, end)`.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// # Safety
    ///
    /// The first `len` slots of `storage` hold live values, and ownership of them passes
    /// to the iterator.
    pub(crate) unsafe fn new(storage: RawStorage<T>, len: usize) -> Self {
        debug_assert!(len <= storage.capacity());
        IntoIter {
            storage,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // Safety: `[start, end)` holds live values.
        unsafe { core::slice::from_raw_parts(self.storage.slot(self.start), self.end - self.start) }
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: `[start, end)` holds live values, and `&mut self` guarantees uniqueness.
        unsafe {
            core::slice::from_raw_parts_mut(self.storage.slot(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // Safety: the slot is live, and leaves `[start, end)` right after the read.
        let value = unsafe { self.storage.slot(self.start).read() };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.end - self.start
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // Safety: the slot was live and is now outside `[start, end)`.
        Some(unsafe { self.storage.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Safety: `[start, end)` holds live values; the storage releases the block afterwards.
        unsafe { core::ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
