#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

#![doc = crate::doc_macro::layout_doc!(
    //! A growable, contiguous array of `T`, built on a [`RawStorage<T>`].
    //!
    //! The first `len` slots of the storage hold live values; the rest are uninitialized.
    //! A `Vector<u32>` holding `[7, 8]` with capacity 4:
    //!
    //! ```svgbob
    //! "Vector<u32>"
    //! +-----------+--------------+---------+
    //! | buffer    | capacity: 4  | len: 2  |
    //! +-----------+--------------+---------+
    //!      |
    //!      |   +------+------+------+------+
    //!      '-> |  7   |  8   |  ?   |  ?   |
    //!          +------+------+------+------+
    //! ```
    //!
    //! # Growth
    //!
    //! When an insertion finds the storage full, capacity doubles (starting from 1).
    //! [`Vector::resize`] grows to the larger of double the capacity and the requested
    //! length. [`Vector::reserve`] grows to exactly the requested capacity.
    //!
    //! Growing allocates a new block, places the new element (if any) at its final slot,
    //! moves the old elements across and releases the old block. Rust moves are bitwise
    //! and cannot fail, so relocation never clones. Constructors that can panic
    //! ([`Vector::push_with`], [`Vector::emplace_with`], [`Clone`]) run before the old
    //! storage is touched, so a panic leaves the vector exactly as it was.
    //!
    //! # Invalidation
    //!
    //! Any operation that changes the capacity moves every element. References into the
    //! vector are therefore invalidated, which the borrow checker enforces:
    //!
    //! ```compile_fail
    //! use growvec::prelude::*;
    //! let mut v = vector![1, 2, 3];
    //! let first = &v[0];
    //! v.reserve(100);
    //! assert_eq!(*first, 1);
    //! ```
    //!
    //! Raw pointers obtained from [`Vector::as_ptr`] or [`slice::as_ptr_range`] are not
    //! tracked and must not be used after such an operation.
    //!
    //! # Examples
    //!
    //! ```
    //! use growvec::prelude::*;
    //!
    //! let mut v: Vector<String> = Vector::new();
    //! v.push("hello".to_string());
    //! v.insert(0, "why".to_string());
    //! v.emplace_back("world".to_string());
    //! assert_eq!(v, ["why", "hello", "world"]);
    //! assert_eq!(v.capacity(), 4);
    //! ```
)]

use crate::error::Result;
use crate::iter::IntoIter;
use crate::raw::{capacity_overflow, RawStorage};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::SliceIndex;

/// A growable, contiguous array of `T`.
///
/// See the [module documentation](crate::vector) for the growth policy.
pub struct Vector<T> {
    storage: RawStorage<T>,
    len: usize,
}

#[inline(never)]
#[cold]
fn insert_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("insertion position (is {pos}) should be <= len (is {len})")
}

#[inline(never)]
#[cold]
fn remove_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("removal position (is {pos}) should be < len (is {len})")
}

#[inline]
fn doubled(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        n.checked_mul(2).unwrap_or_else(|| capacity_overflow())
    }
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let v: Vector<i32> = Vector::new();
    /// assert_eq!((v.len(), v.capacity()), (0, 0));
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Vector {
            storage: RawStorage::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let v: Vector<i32> = Vector::with_capacity(10);
    /// assert_eq!((v.len(), v.capacity()), (0, 10));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            storage: RawStorage::allocate(capacity),
            len: 0,
        }
    }

    /// Creates a vector of `len` default values, with capacity exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let v: Vector<i32> = Vector::with_len(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Vector::with_capacity(len);
        v.fill_to(len, T::default);
        v
    }

    /// Creates a vector of `len` clones of `elem`, with capacity exactly `len`.
    ///
    /// This is what `vector![elem; len]` expands to.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let v = vector!["ab".to_string(); 2];
    /// assert_eq!(v, ["ab", "ab"]);
    /// ```
    pub fn from_elem(elem: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut v = Vector::with_capacity(len);
        if len > 0 {
            v.fill_to(len - 1, || elem.clone());
            // Safety: one slot is left for the original.
            unsafe { v.push_within_capacity(elem) };
        }
        v
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots backed by the current allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the capacity to exactly `new_capacity`, if it is currently smaller.
    ///
    /// Note that `new_capacity` is the total capacity, not an additional amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1, 2];
    /// v.reserve(100500);
    /// assert_eq!(v.capacity(), 100500);
    /// v.reserve(3);
    /// assert_eq!(v.capacity(), 100500);
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        let target = RawStorage::allocate(new_capacity);
        self.relocate(target, None);
    }

    /// Like [`Self::reserve`], but reports allocation failure instead of aborting.
    /// On failure the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1u32];
    /// assert!(v.try_reserve(8).is_ok());
    /// assert_eq!(v.capacity(), 8);
    /// assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
    /// assert_eq!(v.capacity(), 8);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let target = RawStorage::try_allocate(new_capacity)?;
        self.relocate(target, None);
        Ok(())
    }

    /// Sets the length to `new_len`, filling new slots with values from `f`.
    ///
    /// Growing past the capacity reallocates to `max(2 * capacity, new_len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1, 2];
    /// let mut next = 10;
    /// v.resize_with(5, || { next += 1; next });
    /// assert_eq!(v, [1, 2, 11, 12, 13]);
    /// assert_eq!(v.capacity(), 5);
    /// v.resize_with(1, || unreachable!());
    /// assert_eq!(v, [1]);
    /// ```
    pub fn resize_with(&mut self, new_len: usize, f: impl FnMut() -> T) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        if new_len > self.capacity() {
            self.reserve(core::cmp::max(doubled(self.capacity()), new_len));
        }
        self.fill_to(new_len, f);
    }

    /// Sets the length to `new_len`, filling new slots with `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v: Vector<f64> = Vector::with_len(100500);
    /// v.resize(10000);
    /// assert_eq!((v.len(), v.capacity()), (10000, 100500));
    ///
    /// let mut w: Vector<f64> = Vector::new();
    /// w.resize(100500);
    /// assert_eq!((w.len(), w.capacity()), (100500, 100500));
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Drops every element from `new_len` onwards. Capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1, 2, 3, 4];
    /// v.truncate(1);
    /// assert_eq!(v, [1]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(self.storage.slot(new_len), self.len - new_len);
        // Shorten first: a panicking destructor must not leave dropped values in range.
        self.len = new_len;
        // Safety: the tail held live values and is now outside `[0, len)`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Appends `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = Vector::new();
    /// v.push(1);
    /// assert_eq!(v.capacity(), 1);
    /// v.push(2);
    /// v.push(3);
    /// assert_eq!(v.capacity(), 4);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_with(|| value)
    }

    /// Appends the value produced by `f`.
    ///
    /// When the vector is full, the value is constructed straight into the new storage
    /// before any existing element moves, so if `f` panics the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1];
    /// let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    ///     v.push_with(|| panic!("no value today"));
    /// }));
    /// assert!(result.is_err());
    /// assert_eq!((v.len(), v.capacity()), (1, 1));
    /// ```
    pub fn push_with(&mut self, f: impl FnOnce() -> T) {
        if self.len == self.capacity() {
            let target: RawStorage<T> = RawStorage::allocate(doubled(self.capacity()));
            // Safety: the new block has room for at least `len + 1` values.
            unsafe { target.slot(self.len).write(f()) };
            self.relocate(target, Some(self.len));
        } else {
            // Safety: `len < capacity`, so the slot is in bounds and uninitialized.
            unsafe { self.storage.slot(self.len).write(f()) };
        }
        self.len += 1;
    }

    /// Removes and returns the last element. Capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = Vector::new();
    /// v.push(vec![34, 122]);
    /// assert_eq!(v.pop(), Some(vec![34, 122]));
    /// assert_eq!(v.pop(), None);
    /// assert_eq!((v.len(), v.capacity()), (0, 1));
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safety: the slot held the last live value and is now outside `[0, len)`.
        Some(unsafe { self.storage.slot(self.len).read() })
    }

    /// Inserts the value produced by `f` at `pos`, shifting later elements right.
    /// Returns `pos`.
    ///
    /// If the vector is full it reallocates to twice its length (or 1), regardless of
    /// `pos`. As with [`Self::push_with`], a panic in `f` leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector!['a', 'c'];
    /// let pos = v.emplace_with(1, || 'b');
    /// assert_eq!(&v[pos], &'b');
    /// assert_eq!(v, ['a', 'b', 'c']);
    /// ```
    pub fn emplace_with(&mut self, pos: usize, f: impl FnOnce() -> T) -> usize {
        if pos > self.len {
            insert_out_of_bounds(pos, self.len);
        }
        if self.len == self.capacity() {
            let target: RawStorage<T> = RawStorage::allocate(doubled(self.len));
            // Safety: the new block has room for at least `len + 1` values and `pos <= len`.
            unsafe { target.slot(pos).write(f()) };
            self.relocate(target, Some(pos));
        } else if pos == self.len {
            // Safety: `len < capacity`, so the slot is in bounds and uninitialized.
            unsafe { self.storage.slot(pos).write(f()) };
        } else {
            let value = f();
            let last = self.len - 1;
            // Safety: `pos < len < capacity`. Every slot in `[pos, len]` is read only while
            // it holds a live value, and written only after its value has moved on.
            unsafe {
                let base = self.storage.slot(0);
                base.add(self.len).write(base.add(last).read());
                ptr::copy(base.add(pos), base.add(pos + 1), last - pos);
                base.add(pos).write(value);
            }
        }
        self.len += 1;
        pos
    }

    /// Places `value` at `pos`, shifting later elements right. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1, 3];
    /// v.emplace(1, 2);
    /// v.emplace(3, 4);
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn emplace(&mut self, pos: usize, value: T) -> usize {
        self.emplace_with(pos, || value)
    }

    /// Inserts `value` at `pos`, shifting later elements right. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v: Vector<i32> = Vector::with_len(10);
    /// let pos = v.insert(1, 34);
    /// assert_eq!(v[pos], 34);
    /// assert_eq!((v.len(), v.capacity()), (11, 20));
    /// ```
    #[inline]
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        self.emplace(pos, value)
    }

    /// Appends the value produced by `f`, returning a reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v: Vector<String> = Vector::new();
    /// v.emplace_back_with(|| "Ivan".to_string()).push_str("!");
    /// assert_eq!(v, ["Ivan!"]);
    /// ```
    pub fn emplace_back_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        let pos = self.emplace_with(self.len, f);
        // Safety: `pos` was just filled.
        unsafe { self.storage.get_unchecked_mut(pos) }
    }

    /// Appends `value`, returning a reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v: Vector<String> = Vector::new();
    /// let elem: *const String = v.emplace_back("Ivan".to_string());
    /// assert_eq!((v.len(), v.capacity()), (1, 1));
    /// assert_eq!(elem, &v[0] as *const String);
    /// ```
    #[inline]
    pub fn emplace_back(&mut self, value: T) -> &mut T {
        self.emplace_back_with(|| value)
    }

    /// Removes the element at `pos`, shifting later elements left, and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector![1, 2, 3];
    /// assert_eq!(v.remove(0), 1);
    /// assert_eq!(v, [2, 3]);
    /// ```
    pub fn remove(&mut self, pos: usize) -> T {
        if pos >= self.len {
            remove_out_of_bounds(pos, self.len);
        }
        // Safety: `pos < len`. The value is read out before its slot is overwritten, and
        // the vacated last slot falls outside `[0, len)` once `len` shrinks.
        unsafe {
            let base = self.storage.slot(0);
            let value = base.add(pos).read();
            ptr::copy(base.add(pos + 1), base.add(pos), self.len - pos - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at `pos`, shifting later elements left. Returns `pos`, which now
    /// indexes the element that followed the erased one (or equals `len`).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v = vector!["a", "b", "c"];
    /// let next = v.erase(1);
    /// assert_eq!(v[next], "c");
    /// assert_eq!(v, ["a", "c"]);
    /// ```
    pub fn erase(&mut self, pos: usize) -> usize {
        drop(self.remove(pos));
        pos
    }

    /// Exchanges contents with `other` without touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut a = vector![1, 2, 3];
    /// let mut b = Vector::with_capacity(10);
    /// a.swap(&mut b);
    /// assert_eq!((a.len(), a.capacity()), (0, 10));
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut a = vector![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Reference to the element at `index`, without a release-mode bounds check.
    ///
    /// # Safety
    ///
    /// `index < len`. Only checked in debug builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        self.storage.get_unchecked(index)
    }

    /// Mutable reference to the element at `index`, without a release-mode bounds check.
    ///
    /// # Safety
    ///
    /// `index < len`. Only checked in debug builds.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        self.storage.get_unchecked_mut(index)
    }

    /// Address of the first element (dangling when nothing is allocated).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable address of the first element (dangling when nothing is allocated).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: `[0, len)` holds live values, and the pointer is aligned and non-null
        // even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as for `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { core::slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    // Bumping `len` after every write keeps the vector valid if a constructor panics.
    //
    // Safety: `len < capacity`.
    #[inline]
    unsafe fn push_within_capacity(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        self.storage.slot(self.len).write(value);
        self.len += 1;
    }

    fn fill_to(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            // Safety: `len < new_len <= capacity`.
            unsafe { self.push_within_capacity(f()) };
        }
    }

    fn extend_cloned_within_capacity(&mut self, items: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.len + items.len() <= self.capacity());
        for item in items {
            // Safety: the caller reserved room for every item.
            unsafe { self.push_within_capacity(item.clone()) };
        }
    }

    // Moves every live element into `target` and swaps it in. With `gap = Some(pos)`,
    // elements from `pos` onwards land one slot further right, leaving `pos` to the caller.
    // The old block is released when `target` drops at the end of this call; no
    // destructor runs, since the values now live in the new block.
    fn relocate(&mut self, mut target: RawStorage<T>, gap: Option<usize>) {
        log::trace!(
            "relocating {} elements of {} from capacity {} to {}",
            self.len,
            core::any::type_name::<T>(),
            self.capacity(),
            target.capacity()
        );
        let src = self.storage.as_ptr();
        let dst = target.as_mut_ptr();
        // Safety: distinct blocks, and `target` has room for `len` values plus the gap.
        unsafe {
            match gap {
                None => {
                    debug_assert!(target.capacity() >= self.len);
                    ptr::copy_nonoverlapping(src, dst, self.len);
                }
                Some(pos) => {
                    debug_assert!(pos <= self.len && target.capacity() > self.len);
                    ptr::copy_nonoverlapping(src, dst, pos);
                    ptr::copy_nonoverlapping(src.add(pos), dst.add(pos + 1), self.len - pos);
                }
            }
        }
        self.storage.swap(&mut target);
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Safety: `[0, len)` holds live values; the storage releases the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies allocate exactly `len` slots.
///
/// [`Clone::clone_from`] reuses the existing storage when it is large enough, overwriting
/// the shared prefix in place. Otherwise it builds a full copy first and swaps it in, so a
/// panicking `T::clone` leaves the destination unchanged.
///
/// # Examples
///
/// ```
/// use growvec::prelude::*;
/// let medium: Vector<i32> = Vector::with_len(100);
/// let mut large: Vector<i32> = Vector::with_len(250);
/// large.clone_from(&medium);
/// assert_eq!((large.len(), large.capacity()), (100, 250));
///
/// let mut small: Vector<i32> = Vector::with_len(100);
/// small.clone_from(&Vector::with_len(250));
/// assert_eq!((small.len(), small.capacity()), (250, 250));
/// ```
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy = Vector::with_capacity(self.len);
        copy.extend_cloned_within_capacity(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut copy = source.clone();
            self.swap(&mut copy);
            return;
        }
        let shared = core::cmp::min(self.len, source.len);
        for (dst, src) in self.as_mut_slice()[..shared].iter_mut().zip(&source[..shared]) {
            dst.clone_from(src);
        }
        self.truncate(source.len);
        self.extend_cloned_within_capacity(&source[shared..]);
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: core::hash::Hash> core::hash::Hash for Vector<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Vector::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(array: [T; N]) -> Self {
        let mut v = Vector::with_capacity(N);
        for item in array {
            // Safety: `v` has room for all `N` items.
            unsafe { v.push_within_capacity(item) };
        }
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        let mut v = Vector::with_capacity(slice.len());
        v.extend_cloned_within_capacity(slice);
        v
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Takes over the storage; no element moves.
    fn into_iter(mut self) -> IntoIter<T> {
        let len = core::mem::replace(&mut self.len, 0);
        // Safety: the first `len` slots of the storage hold live values.
        unsafe { IntoIter::new(self.storage.take(), len) }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Creates a [`Vector`] from a list of elements or from `elem; len`.
///
/// # Examples
///
/// ```
/// use growvec::prelude::*;
/// let empty: Vector<u8> = vector![];
/// assert!(empty.is_empty());
/// let listed = vector![1, 2, 3];
/// assert_eq!((listed.len(), listed.capacity()), (3, 3));
/// let repeated = vector![0u8; 4];
/// assert_eq!(repeated, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => (
        $crate::Vector::new()
    );
    ($elem:expr; $len:expr) => (
        $crate::Vector::from_elem($elem, $len)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Vector::from([$($x),+])
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::format;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;
    use std::string::{String, ToString};
    use std::vec::Vec;

    // Counts live instances through a shared cell.
    struct Tracked<'a> {
        live: &'a Cell<usize>,
        id: usize,
    }

    impl<'a> Tracked<'a> {
        fn new(live: &'a Cell<usize>, id: usize) -> Self {
            live.set(live.get() + 1);
            Tracked { live, id }
        }
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            Tracked::new(self.live, self.id)
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn ids(v: &Vector<Tracked<'_>>) -> Vec<usize> {
        v.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_vector_does_not_allocate() {
        let v: Vector<String> = Vector::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v.as_slice(), &[] as &[String]);
    }

    #[test]
    fn push_doubles_only_when_full() {
        let mut v = Vector::new();
        let mut seen = Vec::new();
        for i in 0..33u32 {
            let before = v.capacity();
            v.push(i);
            if before != v.capacity() {
                assert_eq!(v.len(), before + 1);
                seen.push(v.capacity());
            }
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 32, 64]);
        assert_eq!(v.iter().copied().sum::<u32>(), (0..33).sum());
    }

    #[test]
    fn push_onto_full_default_vector() {
        let mut v: Vector<i32> = Vector::with_len(100500);
        v.push(i32::from(b'A'));
        assert_eq!(v.len(), 100501);
        assert_eq!(v.capacity(), 201000);
        assert_eq!(v[100500], 65);
    }

    #[test]
    fn resize_grows_at_least_by_doubling() {
        let mut v: Vector<u8> = Vector::with_len(10);
        v.resize(11);
        assert_eq!(v.capacity(), 20);
        v.resize(50);
        assert_eq!(v.capacity(), 50);
        assert!(v.iter().all(|&b| b == 0));
    }

    #[test]
    fn pop_and_truncate_drop_elements() {
        let live = Cell::new(0);
        let mut v = Vector::new();
        for id in 0..5 {
            v.push(Tracked::new(&live, id));
        }
        assert_eq!(live.get(), 5);
        drop(v.pop());
        assert_eq!(live.get(), 4);
        v.truncate(2);
        assert_eq!(live.get(), 2);
        assert_eq!(ids(&v), [0, 1]);
        v.clear();
        assert_eq!(live.get(), 0);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn drop_runs_each_destructor_once() {
        let live = Cell::new(0);
        {
            let mut v = Vector::new();
            for id in 0..9 {
                v.push(Tracked::new(&live, id));
            }
            v.insert(3, Tracked::new(&live, 100));
            v.erase(0);
            assert_eq!(live.get(), 9);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn insert_with_spare_capacity_shuffles_tail() {
        let live = Cell::new(0);
        let mut v = Vector::with_capacity(8);
        for id in 0..5 {
            v.push(Tracked::new(&live, id));
        }
        let ptr = v.as_ptr();
        assert_eq!(v.insert(1, Tracked::new(&live, 9)), 1);
        assert_eq!(ids(&v), [0, 9, 1, 2, 3, 4]);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.insert(5, Tracked::new(&live, 8)), 5);
        assert_eq!(ids(&v), [0, 9, 1, 2, 3, 8, 4]);
        assert_eq!(v.insert(7, Tracked::new(&live, 7)), 7);
        assert_eq!(ids(&v), [0, 9, 1, 2, 3, 8, 4, 7]);
        assert_eq!(live.get(), 8);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_when_full_grows_to_twice_len() {
        let mut v = vector![1, 2, 3];
        v.insert(0, 0);
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(v.capacity(), 6);

        let mut e: Vector<i32> = Vector::new();
        e.insert(0, 5);
        assert_eq!(e.capacity(), 1);
    }

    #[test]
    fn closures_construct_on_both_growth_paths() {
        let mut v: Vector<u32> = Vector::new();
        v.push_with(|| 1);
        v.push_with(|| 2);
        assert_eq!(v.emplace_with(0, || 0), 0);
        assert_eq!(v, [0, 1, 2]);
        assert_eq!(v.capacity(), 4);

        assert_eq!(v.emplace_with(2, || 9), 2);
        assert_eq!(v, [0, 1, 9, 2]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn boundary_cases() {
        let mut units = Vector::new();
        units.push(());
        units.insert(0, ());
        assert_eq!(units.into_iter().count(), 2);

        let mut empty: Vector<String> = Vector::new();
        empty.clone_from(&Vector::new());
        assert_eq!((empty.len(), empty.capacity()), (0, 0));

        let mut bytes: Vector<u8> = Vector::new();
        assert_eq!(
            bytes.try_reserve(isize::MAX as usize + 1),
            Err(crate::error::TryReserveError::CapacityOverflow)
        );
        assert_eq!(bytes.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "insertion position (is 4) should be <= len (is 3)")]
    fn insert_past_end_panics() {
        let mut v = vector![1, 2, 3];
        v.insert(4, 0);
    }

    #[test]
    #[should_panic(expected = "removal position (is 3) should be < len (is 3)")]
    fn erase_at_end_panics() {
        let mut v = vector![1, 2, 3];
        v.erase(3);
    }

    #[test]
    fn erase_returns_following_position() {
        let mut v = vector![10, 20, 30, 40];
        let next = v.erase(1);
        assert_eq!(next, 1);
        assert_eq!(v[next], 30);
        let next = v.erase(2);
        assert_eq!(next, v.len());
        assert_eq!(v, [10, 30]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn emplace_back_returns_new_element() {
        let mut v: Vector<String> = Vector::with_capacity(1);
        v.push("a".to_string());
        v.emplace_back("b".to_string()).push('!');
        assert_eq!(v, ["a", "b!"]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn panicking_constructor_during_growth_leaves_vector_unchanged() {
        let live = Cell::new(0);
        let mut v = Vector::new();
        for id in 0..4 {
            v.push(Tracked::new(&live, id));
        }
        let ptr = v.as_ptr();
        let result = catch_unwind(AssertUnwindSafe(|| {
            v.emplace_with(2, || panic!("construction failed"));
        }));
        assert!(result.is_err());
        assert_eq!(ids(&v), [0, 1, 2, 3]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(live.get(), 4);
    }

    #[test]
    fn panicking_constructor_in_place_leaves_vector_unchanged() {
        let mut v = Vector::with_capacity(4);
        v.push(1);
        v.push(2);
        let result = catch_unwind(AssertUnwindSafe(|| {
            v.emplace_with(0, || panic!("construction failed"));
        }));
        assert!(result.is_err());
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn panicking_resize_keeps_constructed_prefix() {
        let mut v: Vector<u32> = Vector::new();
        let mut n = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            v.resize_with(10, || {
                n += 1;
                if n == 4 {
                    panic!("fourth value");
                }
                n
            });
        }));
        assert!(result.is_err());
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn clone_has_exact_capacity() {
        let mut v: Vector<String> = Vector::with_capacity(10);
        v.extend(["x".to_string(), "y".to_string()]);
        let c = v.clone();
        assert_eq!(c, v);
        assert_eq!(c.capacity(), 2);
    }

    #[test]
    fn clone_from_reuses_storage_when_it_fits() {
        let mut small: Vector<f64> = Vector::with_len(50);
        small.reserve(101);
        let ptr = small.as_ptr();
        let source: Vector<f64> = (0..100i32).map(f64::from).collect();
        small.clone_from(&source);
        assert_eq!(small, source);
        assert_eq!(small.capacity(), 101);
        assert_eq!(small.as_ptr(), ptr);

        let shorter = vector![7.0];
        small.clone_from(&shorter);
        assert_eq!(small, [7.0]);
        assert_eq!(small.capacity(), 101);
    }

    #[test]
    fn clone_from_drops_surplus_elements() {
        let live = Cell::new(0);
        let mut dst: Vector<Tracked<'_>> = (0..6).map(|id| Tracked::new(&live, id)).collect();
        let src: Vector<Tracked<'_>> = (10..12).map(|id| Tracked::new(&live, id)).collect();
        dst.clone_from(&src);
        assert_eq!(ids(&dst), [10, 11]);
        assert_eq!(live.get(), 4);
    }

    #[test]
    fn swap_and_take_move_without_element_work() {
        let shared = Rc::new(());
        let mut a = vector![shared.clone(), shared.clone()];
        let mut b = Vector::with_capacity(7);
        let a_ptr = a.as_ptr();
        a.swap(&mut b);
        assert_eq!((a.len(), a.capacity()), (0, 7));
        assert_eq!((b.len(), b.capacity(), b.as_ptr()), (2, 2, a_ptr));
        let c = b.take();
        assert_eq!((b.len(), b.capacity()), (0, 0));
        assert_eq!(c.as_ptr(), a_ptr);
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..10 {
            v.push(());
        }
        v.insert(3, ());
        assert_eq!(v.len(), 11);
        assert_eq!(v.capacity(), 16);
        assert_eq!(v.remove(0), ());
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn slices_and_iteration_cover_live_elements() {
        let mut v = vector![1, 2, 3, 4];
        v.reserve(10);
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(&v[1..3], &[20, 30]);
        let range = v.as_ptr_range();
        assert_eq!(range.end as usize - range.start as usize, 4 * core::mem::size_of::<i32>());
        assert_eq!((&v).into_iter().rev().copied().collect::<Vec<_>>(), [40, 30, 20, 10]);
        v.as_mut_slice().reverse();
        assert_eq!(v, [40, 30, 20, 10]);
    }

    #[test]
    fn debug_and_eq() {
        let v = vector!["a", "b"];
        assert_eq!(format!("{:?}", v), r#"["a", "b"]"#);
        assert!(v == ["a", "b"][..]);
        assert_ne!(v, vector!["a"]);

        let mut set = std::collections::HashSet::new();
        set.insert(v.clone());
        assert!(set.contains(&vector!["a", "b"]));
        assert!(!set.contains(&vector!["b", "a"]));
    }

    #[test]
    fn from_elem_clones_all_but_last() {
        let shared = Rc::new(());
        let v = Vector::from_elem(shared.clone(), 3);
        assert_eq!(Rc::strong_count(&shared), 4);
        drop(v);
        let empty = Vector::from_elem(shared.clone(), 0);
        assert!(empty.is_empty());
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Pop,
            Insert(usize, i32),
            Erase(usize),
            Reserve(usize),
            Resize(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Push),
                Just(Op::Pop),
                (any::<usize>(), any::<i32>()).prop_map(|(p, x)| Op::Insert(p, x)),
                any::<usize>().prop_map(Op::Erase),
                (0usize..64).prop_map(Op::Reserve),
                (0usize..64).prop_map(Op::Resize),
            ]
        }

        proptest! {
            #[test]
            fn behaves_like_std_vec(ops in proptest::collection::vec(op(), 0..200)) {
                let mut v: Vector<i32> = Vector::new();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Push(x) => { v.push(x); model.push(x); }
                        Op::Pop => { prop_assert_eq!(v.pop(), model.pop()); }
                        Op::Insert(p, x) => {
                            let p = p % (model.len() + 1);
                            prop_assert_eq!(v.insert(p, x), p);
                            model.insert(p, x);
                        }
                        Op::Erase(p) => {
                            if !model.is_empty() {
                                let p = p % model.len();
                                prop_assert_eq!(v.erase(p), p);
                                model.remove(p);
                            }
                        }
                        Op::Reserve(n) => {
                            let before = v.capacity();
                            v.reserve(n);
                            prop_assert_eq!(v.capacity(), core::cmp::max(before, n));
                        }
                        Op::Resize(n) => { v.resize(n); model.resize(n, 0); }
                    }
                    prop_assert!(v.len() <= v.capacity());
                    prop_assert_eq!(v.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn capacity_after_pushes_is_next_power_of_two(n in 1usize..2000) {
                let mut v = Vector::new();
                for i in 0..n {
                    v.push(i);
                }
                prop_assert_eq!(v.capacity(), n.next_power_of_two());
            }

            #[test]
            fn insert_then_erase_restores_content(
                items in proptest::collection::vec(any::<u16>(), 0..50),
                pos in any::<usize>(),
                value in any::<u16>(),
            ) {
                let mut v: Vector<u16> = items.iter().copied().collect();
                let pos = pos % (items.len() + 1);
                v.insert(pos, value);
                prop_assert_eq!(v[pos], value);
                v.erase(pos);
                prop_assert_eq!(v.as_slice(), items.as_slice());
            }

            #[test]
            fn clone_from_matches_source(
                dst in proptest::collection::vec(any::<i64>(), 0..40),
                extra in 0usize..40,
                src in proptest::collection::vec(any::<i64>(), 0..40),
            ) {
                let mut a: Vector<i64> = dst.iter().copied().collect();
                a.reserve(dst.len() + extra);
                let before = a.capacity();
                let b: Vector<i64> = src.iter().copied().collect();
                a.clone_from(&b);
                prop_assert_eq!(&a, &b);
                let expected = if before >= src.len() { before } else { src.len() };
                prop_assert_eq!(a.capacity(), expected);
            }
        }
    }
}
