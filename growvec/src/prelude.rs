//! Single module with all `growvec` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use growvec::prelude::*;
//! let v: Vector<u8> = vector![1, 2];
//! assert_eq!(v.len(), 2);
//! ```
//!
//! Import all, named:
//!
//! ```
//! use growvec::prelude as g;
//! let v: g::Vector<u8> = g::Vector::new();
//! assert!(v.is_empty());
//! ```

pub use crate::error::TryReserveError;
pub use crate::iter::IntoIter;
pub use crate::raw::RawStorage;
pub use crate::vector;
pub use crate::vector::Vector;
