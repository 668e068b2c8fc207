use core::{
    fmt,
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::{Index, IndexMut, Deref},
    ptr,
    slice,
};

use std::ops::DerefMut;

use crate::{
    capacity_error::CapacityError,
    iter::{IntoIter, Iter, IterMut},
    raw_buf::{RawBuf, handle_capacity_error},
    const_assert,
};

/// Growable array over one exclusively owned heap buffer.
///
/// Spare capacity past `len` is uninitialized. Only `push` makes a slot
/// visible, only `clear`, truncation and drops take one away.
///
/// Any mutation that reallocates or shifts elements (`push` at capacity,
/// `resize`, `assign`, `pop_front`, `clear`) invalidates every pointer
/// previously obtained through [`as_ptr`](Self::as_ptr) or
/// [`as_mut_ptr`](Self::as_mut_ptr). References are already covered by
/// the borrow rules.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
    _marker: PhantomData<T>,
}

const_assert!(size_of::<DynArray<u32>>() == size_of::<Option<DynArray<u32>>>());

unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T> DynArray<T> {

    pub const fn new() -> Self {
        Self {
            buf: RawBuf::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn with_len(len: usize, value: T) -> Result<Self, CapacityError>
        where
            T: Clone,
    {
        Self::with_len_with(len, || value.clone())
    }

    pub fn with_len_default(len: usize) -> Result<Self, CapacityError>
        where
            T: Default,
    {
        Self::with_len_with(len, T::default)
    }

    pub fn with_len_with<F>(len: usize, mut f: F) -> Result<Self, CapacityError>
        where
            F: FnMut() -> T,
    {
        let buf = RawBuf::allocate(len)?;
        for i in 0..len {
            unsafe { buf.ptr().add(i).write(f()) };
        }
        Ok(Self {
            buf,
            len,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Appends `value`, doubling capacity when full. Returns a reference
    /// to the written slot.
    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<&mut T, CapacityError> {
        if self.len >= self.capacity() {
            if self.capacity() == 0 {
                self.grow(1)?
            }
            else {
                self.grow(self.capacity() * 2)?
            }
        }
        let mut ptr = unsafe { self.buf.ptr().add(self.len) };
        unsafe { ptr.write(value) };
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    /// Removes and returns the first element, shifting the rest down by
    /// one. O(n).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        let ptr = self.buf.ptr();
        let front = unsafe { ptr.read() };
        self.len -= 1;
        unsafe { ptr.add(1).copy_to(ptr, self.len) };
        Some(front)
    }

    /// Reallocates to a buffer of exactly `new_len` slots, keeping the
    /// first `min(len, new_len)` elements. Shrinking drops the cut off
    /// tail. Growing leaves the extra slots as spare capacity, `len`
    /// does not change. The old buffer is always released, even when
    /// `new_len == capacity`.
    pub fn resize(&mut self, new_len: usize) -> Result<(), CapacityError> {
        let new_buf = RawBuf::allocate(new_len)?;
        let keep = self.len.min(new_len);
        let cut = self.len - keep;
        // truncate before the tail drops, unwinding must not see the old len
        self.len = keep;
        unsafe {
            self.buf.ptr().copy_to_nonoverlapping(new_buf.ptr(), keep);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().as_ptr().add(keep),
                cut,
            ));
        }
        self.buf = new_buf;
        Ok(())
    }

    /// Replaces the contents with `n` clones of `value` in a buffer of
    /// exactly `n` slots.
    pub fn assign(&mut self, n: usize, value: T) -> Result<(), CapacityError>
        where
            T: Clone,
    {
        let new_buf = RawBuf::allocate(n)?;
        for i in 0..n {
            unsafe { new_buf.ptr().add(i).write(value.clone()) };
        }
        self.clear_elements();
        self.buf = new_buf;
        self.len = n;
        Ok(())
    }

    /// Drops every element and releases the buffer.
    pub fn clear(&mut self) {
        self.clear_elements();
        self.buf = RawBuf::dangling();
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.buf.ptr().as_ref() })
        }
    }

    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.buf.ptr().as_mut() })
        }
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.buf.ptr().add(self.len - 1).as_ref() })
        }
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.buf.ptr().add(self.len - 1).as_mut() })
        }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Caller must ensure `index < len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.buf.ptr().add(index).as_ref() }
    }

    /// Caller must ensure `index < len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.buf.ptr().add(index).as_mut() }
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe {
            let ptr = self.buf.ptr();
            let end = ptr.add(self.len);
            Iter::new(ptr, end)
        }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe {
            let ptr = self.buf.ptr();
            let end = ptr.add(self.len);
            IterMut::new(ptr, end)
        }
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        debug_assert!(new_capacity >= self.len);
        let new_buf = RawBuf::allocate(new_capacity)?;
        unsafe { self.buf.ptr().copy_to_nonoverlapping(new_buf.ptr(), self.len) };
        self.buf = new_buf;
        Ok(())
    }

    fn clear_elements(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().as_ptr(), len));
        }
    }
}

impl<T> Drop for DynArray<T> {

    #[inline(always)]
    fn drop(&mut self) {
        self.clear_elements()
    }
}

impl<T> Default for DynArray<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynArray<T> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.buf.ptr().add(index).as_ref() }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.buf.ptr().add(index).as_mut() }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Deref for DynArray<T> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl<T> DerefMut for DynArray<T> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut()
    }
}

/// A clone owns a fresh buffer with `capacity == len`, slack capacity
/// does not carry over.
impl<T: Clone> Clone for DynArray<T> {

    fn clone(&self) -> Self {
        let buf = match RawBuf::allocate(self.len) {
            Ok(buf) => buf,
            Err(err) => handle_capacity_error::<T>(err, self.len),
        };
        for (i, value) in self.iter().enumerate() {
            unsafe { buf.ptr().add(i).write(value.clone()) };
        }
        Self {
            buf,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {

    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {

    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynArray<T> {

    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {

    fn from(values: [T; N]) -> Self {
        let buf = match RawBuf::allocate(N) {
            Ok(buf) => buf,
            Err(err) => handle_capacity_error::<T>(err, N),
        };
        let values = ManuallyDrop::new(values);
        unsafe { values.as_ptr().copy_to_nonoverlapping(buf.ptr().as_ptr(), N) };
        Self {
            buf,
            len: N,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {

    fn from(values: &[T]) -> Self {
        let buf = match RawBuf::allocate(values.len()) {
            Ok(buf) => buf,
            Err(err) => handle_capacity_error::<T>(err, values.len()),
        };
        for (i, value) in values.iter().enumerate() {
            unsafe { buf.ptr().add(i).write(value.clone()) };
        }
        Self {
            buf,
            len: values.len(),
            _marker: PhantomData,
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut array = Self::new();
        if upper == Some(lower) && lower > 0 {
            array.buf = match RawBuf::allocate(lower) {
                Ok(buf) => buf,
                Err(err) => handle_capacity_error::<T>(err, lower),
            };
        }
        for value in iter {
            if let Err(err) = array.push(value) {
                handle_capacity_error::<T>(err, array.len + 1);
            }
        }
        array
    }
}

impl<T> Extend<T> for DynArray<T> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push(value) {
                handle_capacity_error::<T>(err, self.len + 1);
            }
        }
    }
}

impl<T> IntoIterator for DynArray<T> {

    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let me = ManuallyDrop::new(self);
        let len = me.len;
        let buf = unsafe { ptr::read(&me.buf) };
        unsafe { IntoIter::new(buf, len) }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {

    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {

    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
