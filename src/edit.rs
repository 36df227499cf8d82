//! The editing algorithms behind SharedString.
//!
//! Each edit works out the final length first, checks its arguments and
//! the buffer's capacity, and only then moves bytes. An edit that returns an
//! error has not changed the buffer.

use core::cmp::max;
use core::cmp::min;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::error::Result;
use crate::NOT_FOUND;
use crate::NPOS;

/// Width, justification and repetition for insert and append.
///
/// When the inserted text (content repeated `count` times) is shorter than
/// `min_width` it is padded with the string's pad byte. With `left_justify`
/// set (the default) the padding goes in front of the text, otherwise it
/// follows it:
///
/// ```
/// use sharedstring::{SharedString, InsertOptions};
/// let mut s = SharedString::new();
/// s.append_with("Hello", InsertOptions::new().width(7)).unwrap();
/// assert_eq!(s, "  Hello");
/// s.append_with(b'a', InsertOptions::new().width(6).left_justify(false).repeat(5)).unwrap();
/// assert_eq!(s, "  Helloaaaaa ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOptions {
    pub min_width: usize,
    pub left_justify: bool,
    pub count: usize,
}

impl InsertOptions {
    pub const fn new() -> Self {
        InsertOptions { min_width: 0, left_justify: true, count: 1 }
    }

    pub const fn width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub const fn left_justify(mut self, left: bool) -> Self {
        self.left_justify = left;
        self
    }

    /// number of times the content is written.
    pub const fn repeat(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

impl Default for InsertOptions {
    #[inline]
    fn default() -> InsertOptions {
        Self::new()
    }
}

impl Buffer {
    pub (crate) fn insert(&mut self, content: &[u8], position: usize, opts: InsertOptions, pad: u8) -> Result<usize> {
        let len = self.len();
        let position = if position == NPOS { len } else { position };
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        let textlen = match content.len().checked_mul(opts.count) {
            Some(n) => n,
            None => return Err(Error::CapacityDenied { requested: NPOS, capacity: self.capacity }),
        };
        let total = max(textlen, opts.min_width);
        self.ensure_capacity(total)?;

        self.set_len(len + total);
        self.data.copy_within(position..len, position + total);
        let padlen = total - textlen;
        let (padstart, textstart) = if opts.left_justify {
            (position, position + padlen)
        } else {
            (position + textlen, position)
        };
        self.data[padstart..padstart + padlen].fill(pad);
        if !content.is_empty() {
            for chunk in self.data[textstart..textstart + textlen].chunks_exact_mut(content.len()) {
                chunk.copy_from_slice(content);
            }
        }
        Ok(total)
    }

    // length == 0 means "as long as content", NPOS means "to the end".
    // Replacing past the end is allowed and grows the string.
    pub (crate) fn replace(&mut self, content: &[u8], position: usize, length: usize) -> Result<usize> {
        let len = self.len();
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        let length = match length {
            NPOS => len - position,
            0 => content.len(),
            n => n,
        };
        let spanend = min(position.saturating_add(length), len);
        let newlen = position + content.len() + (len - spanend);
        if newlen > len {
            self.ensure_capacity(newlen - len)?;
        }

        if newlen > len {
            self.set_len(newlen);
        }
        self.data.copy_within(spanend..len, position + content.len());
        self.data[position..position + content.len()].copy_from_slice(content);
        self.set_len(newlen);
        Ok(spanend - position)
    }

    pub (crate) fn remove(&mut self, position: usize, count: usize) -> Result<usize> {
        let len = self.len();
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        let count = if count == NPOS { len - position } else { count };
        if position.saturating_add(count) > len {
            return Err(Error::InvalidArgument { position, count, len });
        }
        self.data.copy_within(position + count..len, position);
        self.set_len(len - count);
        Ok(count)
    }

    // check that a window of count bytes at position fits inside the string.
    fn check_window(&self, position: usize, count: usize) -> Result<()> {
        let len = self.len();
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        if position.saturating_add(count) > len {
            return Err(Error::InvalidArgument { position, count, len });
        }
        Ok(())
    }

    pub (crate) fn find(&self, needle: &[u8], start: usize) -> Result<usize> {
        self.check_window(start, needle.len())?;
        if needle.is_empty() { return Ok(start) }
        let found = self.bytes()[start..].windows(needle.len()).position(|w| w == needle);
        Ok(found.map_or(NOT_FOUND, |i| i + start))
    }

    // from_end skips that many candidate positions at the end of the string.
    pub (crate) fn rfind(&self, needle: &[u8], from_end: usize) -> Result<usize> {
        self.check_window(from_end, needle.len())?;
        let last = self.len() - needle.len() - from_end;
        if needle.is_empty() { return Ok(last) }
        let found = self.bytes()[..last + needle.len()].windows(needle.len()).rposition(|w| w == needle);
        Ok(found.unwrap_or(NOT_FOUND))
    }

    pub (crate) fn substr_range(&self, position: usize, count: usize) -> Result<&[u8]> {
        let len = self.len();
        if position > len {
            return Err(Error::OutOfBounds { position, len });
        }
        let count = if count == NPOS { len - position } else { count };
        if position.saturating_add(count) > len {
            return Err(Error::OutOfBounds { position: position.saturating_add(count), len });
        }
        Ok(&self.bytes()[position..position + count])
    }

    pub (crate) fn to_upper(&mut self) {
        self.bytes_mut().make_ascii_uppercase();
    }

    pub (crate) fn to_lower(&mut self) {
        self.bytes_mut().make_ascii_lowercase();
    }

    pub (crate) fn is_number(&self) -> bool {
        is_number(self.bytes())
    }

    // h = h * 31 + byte, wrapping at 32 bits.
    pub (crate) fn hash_code(&self) -> u32 {
        self.bytes().iter().fold(0u32, |h, &b| h.wrapping_mul(31).wrapping_add(b as u32))
    }
}

// Leading spaces are skipped. After that: an optional '-' at the first
// non-space byte, then digits, ',' and '.' in any order (both are accepted as
// grouping or decimal marks), then optional trailing spaces. Only the empty
// sequence is rejected outright, so "   ", "-" and "." all pass.
fn is_number(s: &[u8]) -> bool {
    if s.is_empty() { return false }
    let start = match s.iter().position(|&c| c != b' ') {
        Some(p) => p,
        None => return true,
    };
    let mut trailing = false;
    for (i, &c) in s.iter().enumerate().skip(start) {
        match c {
            b' ' => trailing = true,
            _ if trailing => return false, // "123 4"
            b'0'..=b'9' => {},
            b'-' if i == start => {},
            b',' | b'.' => {},
            _ => return false,
        }
    }
    true
}

#[test]
fn test_is_number() {
    assert!(is_number(b"123456789"));
    assert!(is_number(b"   1234   "));
    assert!(is_number(b" -1234"));
    assert!(is_number(b"1,234,567"));
    assert!(is_number(b"100.100,00"));
    assert!(is_number(b"   -1,234.5678 "));
    assert!(is_number(b"   "));
    assert!(is_number(b"-"));
    assert!(is_number(b","));
    assert!(is_number(b"."));
    assert!(is_number(b" -,"));
    assert!(!is_number(b""));
    assert!(!is_number(b"1234-"));
    assert!(!is_number(b"--1"));
    assert!(!is_number(b" 1234 ,5"));
    assert!(!is_number(b"a123"));
    assert!(!is_number(b"1234a"));
}

#[test]
fn test_insert_keeps_terminator() {
    let mut b = Buffer::from_slice(b"Hello", 8, true);
    assert_eq!(b.insert(b"World", NPOS, InsertOptions::new().width(6), b' '), Ok(6));
    assert_eq!(b.data, b"Hello World\0");
    assert_eq!(b.capacity, 16);
    assert_eq!(b.insert(b"-", 5, InsertOptions::new().repeat(3), b' '), Ok(3));
    assert_eq!(b.data, b"Hello--- World\0");
}

#[test]
fn test_failed_edit_leaves_buffer_alone() {
    let mut b = Buffer::from_slice(b"abcde", 5, false);
    assert_eq!(b.insert(b"x", 0, InsertOptions::new(), b' '), Err(Error::CapacityDenied { requested: 1, capacity: 5 }));
    assert_eq!(b.replace(b"xyz", 4, 1), Err(Error::CapacityDenied { requested: 2, capacity: 5 }));
    assert_eq!(b.remove(2, 4), Err(Error::InvalidArgument { position: 2, count: 4, len: 5 }));
    assert_eq!(b.data, b"abcde\0");
    assert_eq!(b.replace(b"xyz", 1, 3), Ok(3));
    assert_eq!(b.data, b"axyze\0");
}
