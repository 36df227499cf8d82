use sharedstring::Error;
use sharedstring::InsertOptions;
use sharedstring::SharedString;
use sharedstring::DEFAULT_DECIMALS;

#[test]
fn test_append_int() {
    let mut s = SharedString::new();
    assert_eq!(s.append_int(18, InsertOptions::new().repeat(4)), Ok(8));
    assert_eq!(s, "18181818");
    s.clear().unwrap();
    s.append_int(-42, InsertOptions::new()).unwrap();
    assert_eq!(s, "-42");
    s.clear().unwrap();
    s.append_int(10, InsertOptions::new().width(5)).unwrap();
    assert_eq!(s, "   10");
}

#[test]
fn test_append_long() {
    let mut s = SharedString::new();
    s.append_long(1234567890, InsertOptions::new().repeat(5)).unwrap();
    assert_eq!(s, "12345678901234567890123456789012345678901234567890");
    s.clear().unwrap();
    s.append_long(i64::MIN, InsertOptions::new()).unwrap();
    assert_eq!(s, "-9223372036854775808");
}

#[test]
fn test_append_float() {
    let mut s = SharedString::new();
    s.append_float(22.0 / 7.0, DEFAULT_DECIMALS, InsertOptions::new()).unwrap();
    assert_eq!(s, "3.14286");
    s.clear().unwrap();
    s.append_float(22.0 / 7.0, 2, InsertOptions::new()).unwrap();
    assert_eq!(s, "3.14");
    s.clear().unwrap();
    s.append_float(22.0 / 7.0, 2, InsertOptions::new().width(6)).unwrap();
    assert_eq!(s, "  3.14");
    s.clear().unwrap();
    s.append_float(5.0, 0, InsertOptions::new()).unwrap();
    assert_eq!(s, "5");
}

#[test]
fn test_append_bool() {
    let mut s = SharedString::new();
    s.append_bool(true, false, InsertOptions::new().repeat(2)).unwrap();
    assert_eq!(s, "11");
    s.clear().unwrap();
    s.append_bool(false, false, InsertOptions::new().repeat(3)).unwrap();
    assert_eq!(s, "000");
    s.clear().unwrap();
    s.append_bool(true, true, InsertOptions::new()).unwrap();
    s.append_bool(false, true, InsertOptions::new()).unwrap();
    assert_eq!(s, "truefalse");
    s.clear().unwrap();
    s.append_bool(true, false, InsertOptions::new().width(2).left_justify(false)).unwrap();
    assert_eq!(s, "1 ");
}

#[test]
fn test_append_hex() {
    let mut s = SharedString::new();
    s.append_hex(4293844428u32 as i32, InsertOptions::new()).unwrap();
    assert_eq!(s, "FFEEDDCC");
    s.clear().unwrap();
    s.append_hex(-1, InsertOptions::new()).unwrap();
    assert_eq!(s, "FFFFFFFF");
    s.clear().unwrap();
    s.append_hex(255, InsertOptions::new().width(4)).unwrap();
    assert_eq!(s, "  FF");
}

#[test]
fn test_insert_typed() {
    let mut s = SharedString::from("Hello World");
    s.insert_int(12, 5, InsertOptions::new()).unwrap();
    assert_eq!(s, "Hello12 World");
    s.insert_bool(true, true, 0, InsertOptions::new()).unwrap();
    assert_eq!(s, "trueHello12 World");
    s.insert_hex(0xab, 4, InsertOptions::new()).unwrap();
    assert_eq!(s, "trueABHello12 World");
    s.insert_long(7, s.len(), InsertOptions::new()).unwrap();
    assert_eq!(s, "trueABHello12 World7");
    s.insert_float(0.5, 1, 0, InsertOptions::new()).unwrap();
    assert_eq!(s, "0.5trueABHello12 World7");
}

#[test]
fn test_typed_errors() {
    let mut s = SharedString::from("abc");
    assert_eq!(s.insert_int(1, 4, InsertOptions::new()), Err(Error::OutOfBounds { position: 4, len: 3 }));

    let mut fixed = SharedString::with_capacity(4, false);
    fixed.append("ab").unwrap();
    assert_eq!(
        fixed.append_long(123, InsertOptions::new()),
        Err(Error::CapacityDenied { requested: 3, capacity: 4 })
    );
    assert_eq!(fixed, "ab");
}
