#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

//! The recoverable form of allocation failure.
//!
//! The infallible operations ([`Vector::reserve`](crate::Vector::reserve),
//! [`Vector::push`](crate::Vector::push), [`RawStorage::allocate`](crate::RawStorage::allocate)
//! and friends) treat allocation failure as fatal. The `try_*` variants hand back a
//! [`TryReserveError`] instead and leave the container untouched.

use core::alloc::Layout;
use thiserror::Error;

/// Reasons a fallible allocation can fail.
///
/// # Examples
///
/// ```
/// use growvec::prelude::*;
///
/// let mut v: Vector<u64> = Vector::new();
/// assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
/// assert_eq!(v.capacity(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TryReserveError {
    /// The requested number of slots does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator returned null.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError {
        /// Layout of the rejected request.
        layout: Layout,
    },
}

/// Result of a fallible reservation.
pub type Result<T> = core::result::Result<T, TryReserveError>;
