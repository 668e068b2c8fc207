use core::{
    iter::FusedIterator,
    marker::PhantomData,
    ptr::{self, NonNull},
};

use crate::raw_buf::RawBuf;

#[inline(always)]
fn distance<T>(ptr: NonNull<T>, end: NonNull<T>) -> usize {
    let size = size_of::<T>();
    if size == 0 {
        return 0
    }
    (end.as_ptr() as usize - ptr.as_ptr() as usize) / size
}

pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {

    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            end,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = distance(self.ptr, self.end);
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_ref() })
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {

    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            end,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_mut() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = distance(self.ptr, self.end);
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_mut() })
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator. Elements not yet yielded are dropped with it, the
/// allocation is released by the buffer it carries.
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _buf: RawBuf<T>,
}

impl<T> IntoIter<T> {

    #[inline(always)]
    pub(crate) unsafe fn new(buf: RawBuf<T>, len: usize) -> Self {
        let ptr = buf.ptr();
        let end = unsafe { ptr.add(len) };
        Self {
            ptr,
            end,
            _buf: buf,
        }
    }
}

impl<T> Iterator for IntoIter<T> {

    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.ptr == self.end {
            None
        }
        else {
            let value = unsafe { self.ptr.read() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(value)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = distance(self.ptr, self.end);
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {

    fn next_back(&mut self) -> Option<T> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.read() })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {

    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            self.ptr.as_ptr(),
            distance(self.ptr, self.end),
        );
        unsafe { ptr::drop_in_place(remaining) };
    }
}
