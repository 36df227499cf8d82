extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::SharedString;

// Collecting builds the bytes in a Vec first, so the resulting string gets
// the default capacity (or exactly enough room if that is more) no matter
// how the items arrived.
macro_rules! impl_fromiter_bytelike {
    ($t:ty) => {
        impl<'a> FromIterator<$t> for SharedString {
            fn from_iter<I>(iter: I) -> SharedString
            where
                I: IntoIterator<Item = $t>
            {
                let bytes: Vec<u8> = iter.into_iter().map(|c| *core::borrow::Borrow::<u8>::borrow(&c)).collect();
                SharedString::from_slice(&bytes)
            }
        }
    }
}

macro_rules! impl_fromiter_stringlike {
    ($t:ty) => {
        impl<'a> FromIterator<$t> for SharedString {
            fn from_iter<I>(iter: I) -> SharedString
            where
                I: IntoIterator<Item = $t>
            {
                let mut bytes = Vec::new();
                for s in iter {
                    bytes.extend_from_slice(AsRef::<[u8]>::as_ref(&s));
                }
                SharedString::from_slice(&bytes)
            }
        }
    }
}

impl_fromiter_bytelike!(u8);
impl_fromiter_bytelike!(&'a u8);
impl_fromiter_stringlike!(&'a [u8]);
impl_fromiter_stringlike!(&'a str);
impl_fromiter_stringlike!(Vec<u8>);
impl_fromiter_stringlike!(String);

impl FromIterator<SharedString> for SharedString {
    fn from_iter<I>(iter: I) -> SharedString
    where
        I: IntoIterator<Item = SharedString>
    {
        let mut bytes = Vec::new();
        for s in iter {
            bytes.extend_from_slice(&s.bytes());
        }
        SharedString::from_slice(&bytes)
    }
}

#[test]
fn test_collect() {
    let s: SharedString = b"hello".iter().collect();
    assert_eq!(s, "hello");
    let s: SharedString = s.reverse_cursor().collect();
    assert_eq!(s, "olleh");
    let s: SharedString = ["ab", "cd", "ef"].into_iter().collect();
    assert_eq!(s, "abcdef");
    assert_eq!(s.capacity(), 64);
}
