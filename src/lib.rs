//! SharedString, a growable byte string with shared, mutable storage.
//!
//! A SharedString is a handle to a reference counted buffer. Cloning the
//! handle does not copy the bytes: the clone refers to the same buffer, and
//! an edit made through any handle is immediately visible through all the
//! others. There is no copy-on-write. `deep_clone` gives
//! an independent copy when one is wanted.
//!
//! The buffer tracks its length and a logical capacity, and always keeps a
//! zero terminator after the last byte. Capacity is only ever raised by an
//! edit that needs more room, and then by the larger of the room needed and
//! the capacity the string was created with, so a string created with a
//! capacity of 20 grows to 40, then 60 and so on. A buffer may also be
//! created with growth disabled, in which case an edit that would need more
//! room fails with `Error::CapacityDenied` and leaves the string unchanged.
//!
//! Edits (insert, append, replace, remove, case conversion) and searches
//! (find, rfind) take byte positions. `NPOS` stands for "the end of the
//! string" where a position or length is expected, and `NOT_FOUND` (the
//! same value) is what a search returns when there is no match. Every
//! operation checks its arguments before touching the buffer, and reports
//! problems as an `Error` rather than clamping.
//!
//! `Cursor` and `ReverseCursor` walk a string's buffer without editing it,
//! and hold their own reference to it. `share_count` counts handles and
//! cursors alike, the buffer is freed when the last of them goes away.
//!
//! `Tokenizer` splits a string on a set of delimiter bytes.
//!
//! The model is byte oriented (no UTF-8 awareness) and single threaded:
//! SharedString is neither Send nor Sync.
//!
//! ```
//! use sharedstring::SharedString;
//! let mut a = SharedString::from("Hello");
//! let b = a.clone();
//! a.append(" World").unwrap();
//! assert_eq!(b, "Hello World");
//! assert_eq!(b.share_count(), 2);
//! ```

#![no_std]
extern crate alloc;

mod buffer;
mod config;
mod content;
mod cursor;
mod edit;
mod error;
mod format;
mod fromiter;
mod join;
mod string;
mod tokenizer;

pub use config::Config;
pub use content::Content;
pub use cursor::Cursor;
pub use cursor::ReverseCursor;
pub use cursor::StringCursor;
pub use edit::InsertOptions;
pub use error::Error;
pub use error::Result;
pub use format::DEFAULT_DECIMALS;
pub use string::SharedString;
pub use tokenizer::Tokenizer;
pub use tokenizer::WHITESPACE;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 64;

/// Byte used to pad inserts up to their minimum width.
pub const DEFAULT_PAD_BYTE: u8 = b' ';

/// Position or length meaning "to the end of the string".
pub const NPOS: usize = usize::MAX;

/// Returned by find and rfind when there is no match.
pub const NOT_FOUND: usize = usize::MAX;

/// Stored after the last byte of every buffer.
pub const TERMINATOR: u8 = 0;
