extern crate alloc;
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::SharedString;

/// Types whose bytes can be inserted into, appended to, searched for in or
/// used to replace part of a SharedString.
///
/// A SharedString argument is copied out of its buffer before the edit
/// starts, so a string can safely be inserted into itself, or into another
/// handle that shares its buffer.
pub trait Content {
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R;
}

macro_rules! impl_content_bytelike {
    ($t:ty) => {
        impl Content for $t {
            #[inline]
            fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
                f(AsRef::<[u8]>::as_ref(self))
            }
        }
    }
}

macro_rules! impl_content_strlike {
    ($t:ty) => {
        impl Content for $t {
            #[inline]
            fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
                f(self.as_bytes())
            }
        }
    }
}

impl_content_bytelike!([u8]);
impl_content_bytelike!(Vec<u8>);
impl_content_bytelike!(Box<[u8]>);
impl_content_bytelike!(Cow<'_, [u8]>);
impl_content_strlike!(str);
impl_content_strlike!(String);
impl_content_strlike!(Box<str>);
impl_content_strlike!(Cow<'_, str>);

impl<const N: usize> Content for [u8; N] {
    #[inline]
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
        f(self)
    }
}

impl Content for u8 {
    #[inline]
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
        f(core::slice::from_ref(self))
    }
}

impl Content for SharedString {
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
        // snapshot so the buffer is not borrowed while the edit runs
        let snapshot = self.to_vec();
        f(&snapshot)
    }
}

impl<T: Content + ?Sized> Content for &T {
    #[inline]
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
        (**self).with_bytes(f)
    }
}

impl<T: Content + ?Sized> Content for &mut T {
    #[inline]
    fn with_bytes<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
        (**self).with_bytes(f)
    }
}
