#![doc = crate::doc_macro::layout_doc!(
//! # `growvec`
//! A growable contiguous array, built directly on raw memory.
//!
//! 1. [Summary](#summary)
//! 1. [Overview of types](#overview-of-types)
//! 1. [Failure behavior](#failure-behavior)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! `growvec` provides [`Vector<T>`], an equivalent of the standard library's [`Vec<T>`]
//! written from the allocator up. It is split into two layers that never overlap in
//! responsibility:
//!
//! * [`RawStorage<T>`] owns a block of uninitialized memory, sized in elements. It
//!   allocates, releases, swaps and hands out raw slot pointers. It never constructs or
//!   drops a `T`.
//! * [`Vector<T>`] owns a `RawStorage<T>` plus a length, and is responsible for every
//!   element's lifetime: exactly the first `len` slots are live.
//!
//! ```svgbob
//! "Vector<T>"                              "RawStorage<T>"
//! +-------------------------+---------+
//! | storage                 | len: 2  |
//! | +--------+-------------+|         |
//! | | buffer | capacity: 4 ||         |
//! | +--------+-------------+|         |
//! +-----|-------------------+---------+
//!       |   +------+------+------+------+
//!       '-> | live | live |  ?   |  ?   |
//!           +------+------+------+------+
//! ```
//!
//! # Examples
//!
//! ```
//! use growvec::prelude::*;
//!
//! let mut v = Vector::new();
//! for word in ["alpha", "beta", "gamma"] {
//!     v.push(word.to_string());
//! }
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.insert(1, "between".to_string());
//! v.erase(0);
//! assert_eq!(v, ["between", "beta", "gamma"]);
//!
//! let mut copy: Vector<String> = Vector::with_capacity(10);
//! copy.clone_from(&v);
//! assert_eq!((copy.len(), copy.capacity()), (3, 10));
//! ```
//!
//! # Overview of types
//!
//! | Type                     | Role                                                   |
//! |--------------------------|--------------------------------------------------------|
//! | [`RawStorage<T>`]        | Owned block of `capacity` uninitialized slots          |
//! | [`Vector<T>`]            | Growable array; owns its elements and its storage      |
//! | [`IntoIter<T>`]          | By-value iterator that takes over a vector's storage   |
//! | [`TryReserveError`]      | Allocation failure, from the `try_*` operations        |
//!
//! # Failure behavior
//!
//! * Allocation failure is fatal ([`alloc::alloc::handle_alloc_error`]) unless the `try_*`
//!   variant is used, which reports a [`TryReserveError`] and changes nothing.
//! * Indexing out of bounds panics. [`Vector::get_unchecked`] skips the check in release
//!   builds and only asserts it in debug builds.
//! * A panic while constructing an element during growth leaves the vector as it was.
//!   Rust moves cannot fail, so moving existing elements into a new block never does.
//!
//! # Feature flags
//!
//! * `doc`: renders the memory-layout diagrams in this documentation as SVG. Adds a
//!   dependency on `svgbobdoc`.
//!
//! The crate is `no_std` and needs only `core` and `alloc`. Reallocations are reported
//! through the [`log`] facade at `trace` level.
)]

#![no_std]
extern crate alloc;

#[cfg(any(test, doc))]
extern crate std;
#[cfg(doc)]
use std::vec::Vec;

pub mod error;
pub mod iter;
pub mod prelude;
pub mod raw;
pub mod vector;

mod doc_macro;

pub use error::TryReserveError;
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use vector::Vector;
