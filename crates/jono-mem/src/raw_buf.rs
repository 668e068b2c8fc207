use core::ptr::NonNull;

use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};

use crate::capacity_error::CapacityError;

use CapacityError::{AllocFailed, CapacityOverflow, ZeroSizedElement};

/// Owns a heap allocation of `cap` elements. Dropping a `RawBuf` frees
/// the memory but never the elements in it.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {

    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    pub(crate) fn allocate(cap: usize) -> Result<Self, CapacityError> {
        if cap == 0 {
            return Ok(Self::dangling())
        }
        if size_of::<T>() == 0 {
            return Err(ZeroSizedElement)
        }
        let layout = Layout::array::<T>(cap)
            .map_err(|_| CapacityOverflow { requested: cap })?;
        let ptr = unsafe { alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, cap }),
            None => Err(AllocFailed { new_capacity: cap }),
        }
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline(always)]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {

    fn drop(&mut self) {
        if self.cap == 0 {
            return
        }
        let layout = match Layout::array::<T>(self.cap) {
            Ok(l) => l,
            Err(_) => return,
        };
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
    }
}

/// For surfaces with no error channel. Allocation failure goes to the
/// global hook, anything else panics.
pub(crate) fn handle_capacity_error<T>(err: CapacityError, cap: usize) -> ! {
    match err {
        AllocFailed { .. } => {
            let layout = Layout::array::<T>(cap).unwrap_or(Layout::new::<u8>());
            handle_alloc_error(layout)
        },
        other => panic!("{}", other),
    }
}
