//! An owned dynamic array with explicit growth.
//!
//! [`DynArray<T>`] keeps its elements in one exclusively owned heap
//! buffer, doubling capacity on append and reallocating to exact sizes
//! on request.
//!
//! This crate provides:
//!
//! [`DynArray<T>`]: the container
//! [`dyn_array!`]: literal and repeat construction
//! [`CapacityError`] and [`ReadError`]: allocation and stream failures
//!
//! # Features
//!
//! - Amortized constant-time append with `max(1, capacity * 2)` growth
//! - Exact reallocation via `resize`, front removal, bulk `assign`
//! - Whitespace-token reads into pre-sized slots, space-trailed writes
//! - Fallible allocation surfaced as [`CapacityError`]
//!
//! # Examples
//!
//! ```rust
//! use jono_mem::{DynArray, dyn_array};
//!
//! let mut arr: DynArray<i32> = dyn_array![2, 3, 5];
//! arr.push(7)?;
//! assert_eq!(arr, [2, 3, 5, 7]);
//! arr.pop_front();
//! assert_eq!(arr.front(), Some(&3));
//! # Ok::<(), jono_mem::CapacityError>(())
//! ```

mod capacity_error;
mod dyn_array;
mod iter;
mod macros;
mod raw_buf;
mod text;

pub use capacity_error::CapacityError;
pub use dyn_array::DynArray;
pub use iter::{IntoIter, Iter, IterMut};
pub use text::ReadError;
