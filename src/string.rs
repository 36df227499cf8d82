use core::cell::Ref;
use core::cell::RefMut;
use core::cell::RefCell;
use core::hash::Hasher;
use core::hash::Hash;
use core::fmt;

extern crate alloc;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::Buffer;
use crate::config::Config;
use crate::content::Content;
use crate::edit::InsertOptions;
use crate::error::Error;
use crate::error::Result;
use crate::NPOS;

/// A growable byte string whose buffer is shared between clones.
///
/// Cloning a SharedString does not copy the bytes, the clone refers to the
/// same buffer and edits made through either handle are seen by both (and by
/// any cursor over the buffer). Use `deep_clone` to get an independent copy.
///
/// Each handle carries its own pad byte, used when an insert or append asks
/// for a minimum width.
pub struct SharedString {
    pub (crate) buf: Rc<RefCell<Buffer>>,
    pad: u8,
}

impl SharedString {
    /// Creates an empty SharedString with the default capacity (64) that
    /// may grow.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Creates an empty SharedString, the buffer is allocated up front.
    pub fn with_capacity(cap: usize, growth_allowed: bool) -> Self {
        Self::with_config(Config::new().with_capacity(cap).growth(growth_allowed))
    }

    pub fn with_config(config: Config) -> Self {
        SharedString {
            buf: Rc::new(RefCell::new(Buffer::new(config.initial_capacity, config.growth_allowed))),
            pad: config.pad_byte,
        }
    }

    /// Creates a SharedString holding a copy of s, with the default capacity.
    pub fn from_slice(s: &[u8]) -> Self {
        Self::from_slice_with_config(s, Config::new())
    }

    /// Creates a SharedString holding a copy of s.
    /// If s is longer than cap the capacity is raised to s.len(), this is
    /// done even when growth_allowed is false.
    pub fn from_slice_with(s: &[u8], cap: usize, growth_allowed: bool) -> Self {
        Self::from_slice_with_config(s, Config::new().with_capacity(cap).growth(growth_allowed))
    }

    pub fn from_slice_with_config(s: &[u8], config: Config) -> Self {
        SharedString {
            buf: Rc::new(RefCell::new(Buffer::from_slice(s, config.initial_capacity, config.growth_allowed))),
            pad: config.pad_byte,
        }
    }

    /// Creates a SharedString from the first len bytes of s.
    pub fn from_prefix(s: &[u8], len: usize, cap: usize, growth_allowed: bool) -> Result<Self> {
        if len > s.len() {
            return Err(Error::InvalidArgument { position: 0, count: len, len: s.len() });
        }
        Ok(Self::from_slice_with(&s[..len], cap, growth_allowed))
    }

    /// Copies the bytes into a new buffer that is not shared with self.
    /// The copy has the same capacity, growth policy and pad byte.
    pub fn deep_clone(&self) -> Self {
        let buf = self.buf.borrow();
        let mut copy = Buffer::from_slice(buf.bytes(), buf.capacity, buf.growth_allowed);
        copy.initial_growth_increment = buf.initial_growth_increment;
        SharedString { buf: Rc::new(RefCell::new(copy)), pad: self.pad }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.borrow().capacity
    }

    #[inline]
    pub fn growth_allowed(&self) -> bool {
        self.buf.borrow().growth_allowed
    }

    /// The number of SharedStrings and attached cursors referring to this
    /// string's buffer, including self.
    #[inline]
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.buf)
    }

    pub fn shares_buffer_with(&self, other: &SharedString) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }

    #[inline]
    pub fn pad_byte(&self) -> u8 {
        self.pad
    }

    /// Sets the pad byte used by this handle only.
    pub fn set_pad_byte(&mut self, pad: u8) {
        self.pad = pad;
    }

    /// Returns the byte at index. index == len() returns the terminator.
    pub fn byte_at(&self, index: usize) -> Result<u8> {
        let buf = self.buf.borrow();
        if index > buf.len() {
            return Err(Error::OutOfBounds { position: index, len: buf.len() });
        }
        Ok(buf.data[index])
    }

    /// Borrows the bytes. While the view is alive, edits through any handle
    /// sharing the buffer fail with `Error::BufferBorrowed`.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.buf.borrow(), |b| b.bytes())
    }

    /// Borrows the bytes including the trailing terminator.
    pub fn bytes_with_nul(&self) -> Ref<'_, [u8]> {
        Ref::map(self.buf.borrow(), |b| &b.data[..])
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Returns count bytes starting at position as a new, unshared string
    /// with the default capacity (or exactly enough room, if that is more).
    /// count == NPOS copies to the end of the string.
    pub fn substr(&self, position: usize, count: usize) -> Result<SharedString> {
        let buf = self.buf.borrow();
        let s = buf.substr_range(position, count)?;
        Ok(Self::from_slice(s))
    }

    /// Recomputes a 32-bit hash of the bytes on every call.
    pub fn hash_code(&self) -> u32 {
        self.buf.borrow().hash_code()
    }

    /// empties the string, keeping its capacity.
    pub fn clear(&mut self) -> Result<()> {
        self.buffer_mut()?.clear();
        Ok(())
    }

    // Every edit borrows the buffer through here. A `bytes()` view held on
    // any handle sharing the buffer makes the edit fail with BufferBorrowed.
    pub (crate) fn buffer_mut(&self) -> Result<RefMut<'_, Buffer>> {
        self.buf.try_borrow_mut().map_err(|_| Error::BufferBorrowed)
    }

    /// Inserts content at position, position == NPOS appends.
    /// Returns the number of bytes inserted.
    pub fn insert<C: Content>(&mut self, content: C, position: usize) -> Result<usize> {
        self.insert_with(content, position, InsertOptions::new())
    }

    pub fn insert_with<C: Content>(&mut self, content: C, position: usize, opts: InsertOptions) -> Result<usize> {
        let pad = self.pad;
        content.with_bytes(|c| self.buffer_mut()?.insert(c, position, opts, pad))
    }

    pub fn append<C: Content>(&mut self, content: C) -> Result<usize> {
        self.insert_with(content, NPOS, InsertOptions::new())
    }

    pub fn append_with<C: Content>(&mut self, content: C, opts: InsertOptions) -> Result<usize> {
        self.insert_with(content, NPOS, opts)
    }

    /// Overwrites content.len() bytes at position with content.
    /// Writing past the end of the string extends it.
    pub fn replace<C: Content>(&mut self, content: C, position: usize) -> Result<usize> {
        self.replace_len(content, position, 0)
    }

    /// Replaces length bytes at position with content, the string grows or
    /// shrinks to fit. length == NPOS replaces to the end of the string,
    /// length == 0 replaces content.len() bytes. Returns the number of bytes
    /// of the old string that were replaced.
    pub fn replace_len<C: Content>(&mut self, content: C, position: usize, length: usize) -> Result<usize> {
        content.with_bytes(|c| self.buffer_mut()?.replace(c, position, length))
    }

    /// Removes everything from position to the end of the string.
    pub fn remove(&mut self, position: usize) -> Result<usize> {
        self.remove_len(position, NPOS)
    }

    pub fn remove_len(&mut self, position: usize, count: usize) -> Result<usize> {
        self.buffer_mut()?.remove(position, count)
    }

    /// Returns the index of the first match at or after start, or NOT_FOUND.
    pub fn find<C: Content>(&self, needle: C, start: usize) -> Result<usize> {
        needle.with_bytes(|n| self.buf.borrow().find(n, start))
    }

    /// Searches backwards. from_end counts from the end of the string, so
    /// rfind(x, 0) considers every position and rfind(x, k) ignores matches
    /// starting in the last k candidate positions.
    pub fn rfind<C: Content>(&self, needle: C, from_end: usize) -> Result<usize> {
        needle.with_bytes(|n| self.buf.borrow().rfind(n, from_end))
    }

    /// ASCII only, other bytes are left alone.
    pub fn to_upper(&mut self) -> Result<()> {
        self.buffer_mut()?.to_upper();
        Ok(())
    }

    pub fn to_lower(&mut self) -> Result<()> {
        self.buffer_mut()?.to_lower();
        Ok(())
    }

    /// Returns true if the string looks like a number, e.g. "42", " -100",
    /// "3,145.87" or "100.100,00". ',' and '.' are interchangeable and their
    /// placement is not checked. Leading and trailing spaces are allowed.
    /// No digit is required: only the empty string is never a number.
    pub fn is_number(&self) -> bool {
        self.buf.borrow().is_number()
    }

    /// Joins together an iterator of strings, using self as a separator.
    pub fn join<T, I>(&self, iter: I) -> Result<SharedString>
    where
        I: IntoIterator<Item = T>,
        T: Content,
    {
        crate::join::join_internal(self, iter)
    }
}

impl Clone for SharedString {
    /// Shares the buffer, the bytes are not copied.
    fn clone(&self) -> Self {
        SharedString { buf: Rc::clone(&self.buf), pad: self.pad }
    }
}

impl Default for SharedString {
    #[inline]
    fn default() -> SharedString {
        Self::new()
    }
}

/// Writes s as a byte string literal, escaping anything that is not
/// printable ascii.
pub (crate) fn bytes_debug(s: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("b\"")?;
    let mut groupstart = 0;
    for (p, &c) in s.iter().enumerate() {
        if (0x20..=0x7E).contains(&c) && c != b'\\' && c != b'\"' { continue }
        // flush the printable run before this byte
        if groupstart < p {
            f.write_str(&String::from_utf8_lossy(&s[groupstart..p]))?;
        }
        match c {
            b'\\' => f.write_str("\\\\")?,
            b'\"' => f.write_str("\\\"")?,
            b'\n' => f.write_str("\\n")?,
            b'\t' => f.write_str("\\t")?,
            _ => write!(f, "\\x{:02x}", c)?,
        }
        groupstart = p + 1;
    }
    if groupstart < s.len() {
        f.write_str(&String::from_utf8_lossy(&s[groupstart..]))?;
    }
    f.write_str("\"")
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bytes_debug(&self.bytes(), f)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(&self.bytes()), f)
    }
}

impl PartialEq for SharedString {
    fn eq(&self, other: &SharedString) -> bool {
        if self.shares_buffer_with(other) { return true }
        *self.bytes() == *other.bytes()
    }
}
impl Eq for SharedString {}

impl PartialEq<[u8]> for SharedString {
    fn eq(&self, other: &[u8]) -> bool {
        *self.bytes() == *other
    }
}

impl PartialEq<&[u8]> for SharedString {
    fn eq(&self, other: &&[u8]) -> bool {
        *self.bytes() == **other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for SharedString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        *self.bytes() == other[..]
    }
}

impl PartialEq<str> for SharedString {
    fn eq(&self, other: &str) -> bool {
        *self.bytes() == *other.as_bytes()
    }
}

impl PartialEq<&str> for SharedString {
    fn eq(&self, other: &&str) -> bool {
        *self.bytes() == *other.as_bytes()
    }
}

impl PartialEq<SharedString> for &str {
    fn eq(&self, other: &SharedString) -> bool {
        *self.as_bytes() == *other.bytes()
    }
}

impl PartialEq<SharedString> for &[u8] {
    fn eq(&self, other: &SharedString) -> bool {
        **self == *other.bytes()
    }
}

impl Hash for SharedString {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.bytes()).hash(state);
    }
}

impl PartialOrd for SharedString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SharedString {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        if self.shares_buffer_with(other) { return core::cmp::Ordering::Equal }
        (*self.bytes()).cmp(&*other.bytes())
    }
}

impl From<&[u8]> for SharedString {
    #[inline]
    fn from(s: &[u8]) -> Self {
        Self::from_slice(s)
    }
}

impl<const N: usize> From<&[u8; N]> for SharedString {
    #[inline]
    fn from(s: &[u8; N]) -> Self {
        Self::from_slice(s)
    }
}

impl From<&str> for SharedString {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for SharedString {
    #[inline]
    fn from(s: Vec<u8>) -> Self {
        Self::from_slice(&s)
    }
}

impl From<String> for SharedString {
    #[inline]
    fn from(s: String) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

/// Shares the buffer, like clone.
impl From<&SharedString> for SharedString {
    #[inline]
    fn from(s: &SharedString) -> Self {
        s.clone()
    }
}

impl From<SharedString> for Vec<u8> {
    #[inline]
    fn from(s: SharedString) -> Self {
        s.to_vec()
    }
}

#[test]
fn test_bytes_debug() {
    let s = SharedString::from(&b"a\"b\\c\x01\n"[..]);
    assert_eq!(alloc::format!("{:?}", s), "b\"a\\\"b\\\\c\\x01\\n\"");
    assert_eq!(alloc::format!("{:?}", SharedString::new()), "b\"\"");
}

#[test]
fn test_edit_during_view() {
    let s = SharedString::from("abc");
    let mut t = s.clone();
    {
        let view = s.bytes();
        assert_eq!(t.append(&*view), Err(Error::BufferBorrowed));
        assert_eq!(t.remove(0), Err(Error::BufferBorrowed));
        assert_eq!(t.to_upper(), Err(Error::BufferBorrowed));
        assert_eq!(t.clear(), Err(Error::BufferBorrowed));
        assert_eq!(&*view, b"abc");
    }
    // the view has been dropped, so the same edit now goes through
    let copy = s.to_vec();
    assert_eq!(t.append(&copy), Ok(3));
    assert_eq!(s, "abcabc");
}

#[test]
fn test_borrow_released() {
    let mut s = SharedString::from("abc");
    let t = s.clone();
    s.append(&t).unwrap();
    assert_eq!(s, "abcabc");
    assert_eq!(t, "abcabc");
}
