#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

#![doc = crate::doc_macro::layout_doc!(
    //! Ownership of a block of uninitialized memory, sized in elements.
    //!
    //! A [`RawStorage<T>`] knows how many `T` slots it owns, and nothing about which of
    //! them hold live values. It never constructs or drops a `T`: dropping a `RawStorage`
    //! releases the block and nothing else. Tracking element lifetimes is the job of the
    //! owner, typically a [`Vector<T>`](crate::Vector).
    //!
    //! ```svgbob
    //! "RawStorage<u32>"
    //! +-----------+--------------+
    //! | buffer    | capacity: 4  |
    //! +-----------+--------------+
    //!      |
    //!      |   +------+------+------+------+
    //!      '-> |  ?   |  ?   |  ?   |  ?   |
    //!          +------+------+------+------+
    //! ```
    //!
    //! # Examples
    //!
    //! ```
    //! use growvec::RawStorage;
    //!
    //! let storage: RawStorage<String> = RawStorage::allocate(2);
    //! unsafe {
    //!     storage.slot(0).write("hello".to_string());
    //!     assert_eq!(storage.get_unchecked(0), "hello");
    //!     // Slot 0 is ours to drop; the storage won't do it.
    //!     std::ptr::drop_in_place(storage.slot(0));
    //! }
    //! ```
)]

use crate::error::{Result, TryReserveError};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// An owned block of `capacity` uninitialized `T` slots.
///
/// Move-only: copying the handle would free the block twice.
///
/// ```compile_fail
/// use growvec::RawStorage;
/// let a: RawStorage<u8> = RawStorage::allocate(4);
/// let b: RawStorage<u8> = a.clone();
/// ```
pub struct RawStorage<T> {
    // Dangling when `capacity == 0` or `T` is zero-sized. No allocation backs it then.
    buffer: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// Safety: the storage owns its block exclusively, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

#[inline(never)]
#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> RawStorage<T> {
    /// An empty handle. Owns no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::RawStorage;
    /// let storage: RawStorage<u32> = RawStorage::new();
    /// assert_eq!(storage.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        RawStorage {
            buffer: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates room for `capacity` elements.
    ///
    /// Returns an empty handle for `capacity == 0`. Panics if the byte size overflows
    /// `isize::MAX`, and calls [`alloc::alloc::handle_alloc_error`] if the allocator fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::RawStorage;
    /// let storage: RawStorage<u32> = RawStorage::allocate(100);
    /// assert_eq!(storage.capacity(), 100);
    /// ```
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(storage) => storage,
            Err(TryReserveError::CapacityOverflow) => capacity_overflow(),
            Err(TryReserveError::AllocError { layout }) => {
                alloc::alloc::handle_alloc_error(layout)
            }
        }
    }

    /// Allocates room for `capacity` elements, reporting failure instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::{RawStorage, TryReserveError};
    /// let too_big = RawStorage::<u64>::try_allocate(usize::MAX / 4);
    /// assert_eq!(too_big.err(), Some(TryReserveError::CapacityOverflow));
    /// ```
    pub fn try_allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        if core::mem::size_of::<T>() == 0 {
            return Ok(RawStorage {
                buffer: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
        // Safety: `layout` has non-zero size, checked just above.
        let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
        let buffer = NonNull::new(ptr).ok_or(TryReserveError::AllocError { layout })?;
        Ok(RawStorage {
            buffer,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Number of slots, not bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of slot 0.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Mutable address of slot 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_ptr()
    }

    /// Raw pointer to slot `offset`. The one-past-the-end offset `capacity` is allowed.
    ///
    /// The range check is a debug assertion only. Nothing is assumed about whether the
    /// slot is initialized.
    #[inline]
    pub fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity);
        self.buffer.as_ptr().wrapping_add(offset)
    }

    /// Reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// * `index < capacity`. Only checked in debug builds.
    /// * the slot holds an initialized `T`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity);
        &*self.buffer.as_ptr().add(index)
    }

    /// Mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Same requirements as [`Self::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity);
        &mut *self.buffer.as_ptr().add(index)
    }

    /// Exchanges blocks with `other`. No element is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::RawStorage;
    /// let mut a: RawStorage<u8> = RawStorage::allocate(4);
    /// let mut b: RawStorage<u8> = RawStorage::new();
    /// a.swap(&mut b);
    /// assert_eq!((a.capacity(), b.capacity()), (0, 4));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.buffer, &mut other.buffer);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::RawStorage;
    /// let mut a: RawStorage<u8> = RawStorage::allocate(4);
    /// let b = a.take();
    /// assert_eq!((a.capacity(), b.capacity()), (0, 4));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    #[inline]
    fn allocated_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || core::mem::size_of::<T>() == 0 {
            return None;
        }
        // Safety: the same layout was accepted by `Layout::array` in `try_allocate`.
        Some(unsafe {
            Layout::from_size_align_unchecked(
                core::mem::size_of::<T>() * self.capacity,
                core::mem::align_of::<T>(),
            )
        })
    }
}

impl<T> Default for RawStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.allocated_layout() {
            // Safety: `buffer` came from `alloc` with exactly this layout.
            unsafe {
                alloc::alloc::dealloc(self.buffer.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

impl<T> core::fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("buffer", &self.buffer)
            .field("capacity", &self.capacity)
            .finish()
    }
}
