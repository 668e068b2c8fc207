//! Sorted-array priority queue over [`mem::DynArray`].
//!
//! See [`SortedQueue`] for the queue itself and [`jono_mem`] for the
//! backing container.

mod sorted_queue;

pub use jono_mem as mem;

pub use sorted_queue::SortedQueue;
pub use mem::{dyn_array, CapacityError, DynArray, ReadError};
