use crate::content::Content;
use crate::error::Result;
use crate::SharedString;

const ITERBLOCKLEN: usize = 8;

// Items are pulled in blocks so the result's capacity can be grown once per
// block instead of once per item.
pub (super) fn join_internal<T, I>(joiner: &SharedString, iter: I) -> Result<SharedString>
where
    I: IntoIterator<Item = T>,
    T: Content,
{
    let joiner = joiner.to_vec();
    let mut iter = iter.into_iter();
    let mut result = SharedString::new();
    let mut first = true;

    loop {
        let mut block: [Option<T>; ITERBLOCKLEN] = Default::default();
        let mut blocklen = 0;
        while blocklen < ITERBLOCKLEN {
            match iter.next() {
                Some(item) => { block[blocklen] = Some(item); blocklen += 1; },
                None => break,
            }
        }
        let block = &block[..blocklen];

        let mut extra = 0;
        for (i, item) in block.iter().flatten().enumerate() {
            if !first || i > 0 { extra += joiner.len(); }
            extra += item.with_bytes(|b| b.len());
        }
        result.buffer_mut()?.ensure_capacity(extra)?;

        for item in block.iter().flatten() {
            if first {
                first = false;
            } else {
                result.append(&joiner)?;
            }
            result.append(item)?;
        }
        if blocklen < ITERBLOCKLEN { break }
    }
    Ok(result)
}

#[test]
fn test_join() {
    let sep = SharedString::from(", ");
    assert_eq!(sep.join(["a", "b", "c"]).unwrap(), "a, b, c");
    assert_eq!(sep.join(core::iter::empty::<&str>()).unwrap(), "");
    let words = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
    let joined = SharedString::from(b"-").join(words).unwrap();
    assert_eq!(joined, "one-two-three-four-five-six-seven-eight-nine");
    assert_eq!(joined.capacity(), 64);
}
