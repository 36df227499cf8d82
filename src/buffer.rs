use core::cmp::max;

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;
use crate::error::Result;
use crate::TERMINATOR;

// The storage shared by every SharedString and cursor that refers to it.
//
// data always holds the string bytes followed by a single terminator, so
// data.len() == len() + 1. capacity is the logical capacity, excluding the
// terminator, and only changes through ensure_capacity (or when an oversized
// initial literal is adopted).
#[derive(Debug)]
pub (crate) struct Buffer {
    pub (crate) data: Vec<u8>,
    pub (crate) capacity: usize,
    pub (crate) growth_allowed: bool,
    pub (crate) initial_growth_increment: usize,
}

impl Buffer {
    pub (crate) fn new(capacity: usize, growth_allowed: bool) -> Self {
        Self::from_slice(b"", capacity, growth_allowed)
    }

    // An initial literal longer than capacity is always accepted, and the
    // capacity is raised to fit it, even when growth is not allowed.
    pub (crate) fn from_slice(s: &[u8], capacity: usize, growth_allowed: bool) -> Self {
        let cap = max(s.len(), capacity);
        let mut data = Vec::with_capacity(cap + 1);
        data.extend_from_slice(s);
        data.push(TERMINATOR);
        Buffer { data: data, capacity: cap, growth_allowed: growth_allowed, initial_growth_increment: capacity }
    }

    #[inline]
    pub (crate) fn len(&self) -> usize {
        self.data.len() - 1
    }

    #[inline]
    pub (crate) fn bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    #[inline]
    pub (crate) fn bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.data[..len]
    }

    // make room for additional more bytes beyond the current length.
    // growth steps by max(additional, initial_growth_increment) rather than
    // doubling, so capacities are predictable.
    // A size that overflows usize, or that the allocator refuses, is denied
    // like any other growth, before the buffer changes.
    pub (crate) fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        let len = self.len();
        let denied = Error::CapacityDenied { requested: additional, capacity: self.capacity };
        let needed = len.checked_add(additional).ok_or_else(|| denied.clone())?;
        if needed <= self.capacity { return Ok(()) }
        if !self.growth_allowed {
            log::warn!("capacity growth of {} bytes denied (len={}, capacity={})", additional, len, self.capacity);
            return Err(denied);
        }
        let newcap = self.capacity
            .checked_add(max(additional, self.initial_growth_increment))
            .ok_or_else(|| denied.clone())?;
        if self.data.try_reserve_exact(newcap - len).is_err() {
            log::warn!("could not reserve {} bytes (capacity={})", newcap, self.capacity);
            return Err(denied);
        }
        log::debug!("grew buffer capacity {} -> {}", self.capacity, newcap);
        self.capacity = newcap;
        Ok(())
    }

    // resize the storage to newlen bytes plus terminator. Bytes exposed by
    // growing are zero until the caller overwrites them.
    pub (crate) fn set_len(&mut self, newlen: usize) {
        debug_assert!(newlen <= self.capacity);
        self.data.resize(newlen + 1, 0);
        self.terminate();
    }

    #[inline]
    pub (crate) fn terminate(&mut self) {
        let len = self.len();
        self.data[len] = TERMINATOR;
    }

    pub (crate) fn clear(&mut self) {
        self.set_len(0);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        log::trace!("releasing buffer (len={}, capacity={})", self.len(), self.capacity);
    }
}

#[test]
fn test_from_slice() {
    let b = Buffer::from_slice(b"test", 10, true);
    assert_eq!(b.bytes(), b"test");
    assert_eq!(b.data, b"test\0");
    assert_eq!(b.capacity, 10);
    assert!(b.data.capacity() >= 11);

    let b = Buffer::from_slice(b"the quick brown fox", 5, false);
    assert_eq!(b.len(), 19);
    assert_eq!(b.capacity, 19);
    assert_eq!(b.initial_growth_increment, 5);
}

#[test]
fn test_ensure_capacity() {
    let mut b = Buffer::new(20, true);
    assert_eq!(b.ensure_capacity(20), Ok(()));
    assert_eq!(b.capacity, 20);
    assert_eq!(b.ensure_capacity(21), Ok(()));
    assert_eq!(b.capacity, 41);
    b.set_len(41);
    assert_eq!(b.ensure_capacity(1), Ok(()));
    assert_eq!(b.capacity, 61);
    assert!(b.data.capacity() >= 62);

    let mut b = Buffer::new(5, false);
    assert_eq!(b.ensure_capacity(5), Ok(()));
    assert_eq!(b.ensure_capacity(6), Err(Error::CapacityDenied { requested: 6, capacity: 5 }));
    assert_eq!(b.capacity, 5);
}

#[test]
fn test_ensure_capacity_overflow() {
    let mut b = Buffer::from_slice(b"abc", 5, false);
    assert_eq!(b.ensure_capacity(usize::MAX), Err(Error::CapacityDenied { requested: usize::MAX, capacity: 5 }));

    // the sum fits in usize but no allocator can satisfy it
    let mut b = Buffer::from_slice(b"abc", 5, true);
    assert_eq!(b.ensure_capacity(usize::MAX / 2), Err(Error::CapacityDenied { requested: usize::MAX / 2, capacity: 5 }));
    assert_eq!(b.capacity, 5);
    assert_eq!(b.data, b"abc\0");
}

#[test]
fn test_set_len_terminates() {
    let mut b = Buffer::from_slice(b"abcdef", 10, true);
    b.set_len(3);
    assert_eq!(b.data, b"abc\0");
    b.set_len(5);
    assert_eq!(b.data, b"abc\0\0\0");
    b.clear();
    assert_eq!(b.data, b"\0");
}
