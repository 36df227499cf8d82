use thiserror::Error;

/// The ways an operation on a SharedString, or on a cursor over one, can fail.
///
/// Every operation checks its arguments before touching the buffer, so an
/// error always means the string was left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position argument lies past the end of the string.
    #[error("position {position} is past the end of the string (len={len})")]
    OutOfBounds { position: usize, len: usize },
    /// The position was fine, but position + count runs past the end.
    #[error("{count} bytes starting at {position} run past the end of the string (len={len})")]
    InvalidArgument { position: usize, count: usize, len: usize },
    /// The cursor has no string attached.
    #[error("Invalid iterator")]
    IteratorInvalid,
    /// More room was needed but the buffer does not allow growth.
    #[error("growing capacity by {requested} bytes is not allowed (capacity={capacity})")]
    CapacityDenied { requested: usize, capacity: usize },
    /// An edit was attempted while a `bytes()` view of the same buffer,
    /// taken through this or any sharing handle, was still alive.
    #[error("the buffer is borrowed by a live bytes() view")]
    BufferBorrowed,
}

pub type Result<T> = core::result::Result<T, Error>;
