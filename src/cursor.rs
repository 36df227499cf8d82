//! Forward and reverse cursors over a SharedString's buffer.
//!
//! A cursor holds its own reference to the buffer, so it counts towards
//! `SharedString::share_count` and keeps the bytes alive after every
//! SharedString referring to them has been dropped. Cursors never edit the
//! buffer, but they do see edits made through any SharedString sharing it.
//! Range checks are made against the buffer's length at the time of each
//! call, so a cursor over a string that shrank reports that it has no more
//! bytes, and `next_byte` returns an error rather than panicking.

use core::cell::RefCell;

extern crate alloc;
use alloc::rc::Rc;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::error::Result;
use crate::SharedString;

/// Operations shared by Cursor and ReverseCursor.
pub trait StringCursor {
    /// false if the cursor is unattached or has run off the end.
    fn has_next(&self) -> bool;
    /// Returns the byte at the current position and moves on.
    fn next_byte(&mut self) -> Result<u8>;
    /// Moves back to the starting position.
    fn reset(&mut self) -> Result<()>;
    fn current_index(&self) -> isize;
    fn is_valid(&self) -> bool;
}

#[derive(Debug, Clone)]
struct CursorState {
    buf: Option<Rc<RefCell<Buffer>>>,
    index: isize,
}

impl CursorState {
    const fn unattached() -> Self {
        CursorState { buf: None, index: -1 }
    }

    fn attach(s: &SharedString, index: isize) -> Self {
        CursorState { buf: Some(Rc::clone(&s.buf)), index: index }
    }

    fn buffer(&self) -> Result<&Rc<RefCell<Buffer>>> {
        self.buf.as_ref().ok_or(Error::IteratorInvalid)
    }

    fn len(&self) -> Option<isize> {
        self.buf.as_ref().map(|b| b.borrow().len() as isize)
    }

    fn in_range(&self) -> bool {
        match self.len() {
            Some(len) => self.index >= 0 && self.index < len,
            None => false,
        }
    }

    fn read(&self) -> Result<u8> {
        let buf = self.buffer()?.borrow();
        let len = buf.len();
        match usize::try_from(self.index) {
            Ok(i) if i < len => Ok(buf.data[i]),
            Ok(i) => Err(Error::OutOfBounds { position: i, len: len }),
            Err(_) => Err(Error::OutOfBounds { position: crate::NPOS, len: len }),
        }
    }
}

/// Walks a string from its first byte to its last.
#[derive(Debug, Clone)]
pub struct Cursor {
    state: CursorState,
}

impl Cursor {
    pub fn new(s: &SharedString) -> Self {
        Cursor { state: CursorState::attach(s, 0) }
    }
}

impl Default for Cursor {
    /// An unattached cursor, every positional call on it fails.
    fn default() -> Self {
        Cursor { state: CursorState::unattached() }
    }
}

impl StringCursor for Cursor {
    fn has_next(&self) -> bool {
        self.state.in_range()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let c = self.state.read()?;
        self.state.index += 1;
        Ok(c)
    }

    fn reset(&mut self) -> Result<()> {
        self.state.buffer()?;
        self.state.index = 0;
        Ok(())
    }

    fn current_index(&self) -> isize {
        self.state.index
    }

    fn is_valid(&self) -> bool {
        self.state.buf.is_some()
    }
}

impl Iterator for Cursor {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        if !self.has_next() { return None }
        self.next_byte().ok()
    }
}

/// Walks a string from its last byte to its first.
#[derive(Debug, Clone)]
pub struct ReverseCursor {
    state: CursorState,
}

impl ReverseCursor {
    pub fn new(s: &SharedString) -> Self {
        ReverseCursor { state: CursorState::attach(s, s.len() as isize - 1) }
    }
}

impl Default for ReverseCursor {
    /// An unattached cursor, every positional call on it fails.
    fn default() -> Self {
        ReverseCursor { state: CursorState::unattached() }
    }
}

impl StringCursor for ReverseCursor {
    fn has_next(&self) -> bool {
        self.state.in_range()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let c = self.state.read()?;
        self.state.index -= 1;
        Ok(c)
    }

    fn reset(&mut self) -> Result<()> {
        let len = self.state.buffer()?.borrow().len();
        self.state.index = len as isize - 1;
        Ok(())
    }

    fn current_index(&self) -> isize {
        self.state.index
    }

    fn is_valid(&self) -> bool {
        self.state.buf.is_some()
    }
}

impl Iterator for ReverseCursor {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        if !self.has_next() { return None }
        self.next_byte().ok()
    }
}

/// Starts walking backwards from wherever the forward cursor is.
impl From<&Cursor> for ReverseCursor {
    fn from(c: &Cursor) -> Self {
        ReverseCursor { state: c.state.clone() }
    }
}

impl From<&ReverseCursor> for Cursor {
    fn from(c: &ReverseCursor) -> Self {
        Cursor { state: c.state.clone() }
    }
}

impl SharedString {
    /// A cursor positioned on the first byte.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    /// A cursor positioned on the last byte.
    pub fn reverse_cursor(&self) -> ReverseCursor {
        ReverseCursor::new(self)
    }
}

#[test]
fn test_read_after_shrink() {
    let mut s = SharedString::from("abcdef");
    let mut c = s.cursor();
    for _ in 0..4 { c.next_byte().unwrap(); }
    s.remove(2).unwrap();
    assert!(!c.has_next());
    assert_eq!(c.next_byte(), Err(Error::OutOfBounds { position: 4, len: 2 }));
    assert_eq!(c.current_index(), 4);
}
