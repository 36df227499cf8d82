use sharedstring::SharedString;
use sharedstring::Tokenizer;
use sharedstring::WHITESPACE;

#[test]
fn test_tokenizer() {
    let mut tok = Tokenizer::new("This is a \t test    string \t", " \t");
    for expected in ["This", "is", "a", "test"] {
        assert!(tok.has_more_tokens());
        assert_eq!(tok.next_token().unwrap(), expected);
    }
    // trailing delimiters end the input along with the last token
    assert!(tok.has_more_tokens());
    assert_eq!(tok.next_token().unwrap(), "string");
    assert!(!tok.has_more_tokens());
    assert_eq!(tok.next_token().unwrap(), "");
    assert_eq!(tok.next_token().unwrap(), "");
}

#[test]
fn test_no_delimiter_in_input() {
    let mut tok = Tokenizer::new("This is a \t test    string \t", "x");
    assert_eq!(tok.next_token().unwrap(), "This is a \t test    string \t");
    assert!(!tok.has_more_tokens());
    assert_eq!(tok.next_token().unwrap(), "");
}

#[test]
fn test_empty_delimiters() {
    let tokens: Vec<SharedString> = Tokenizer::new("a b", "").collect();
    assert_eq!(tokens, ["a b"]);
}

#[test]
fn test_whitespace() {
    let tok = Tokenizer::whitespace("one\ttwo  three");
    let tokens: Vec<SharedString> = tok.collect();
    assert_eq!(tokens, ["one", "two", "three"]);
    assert_eq!(WHITESPACE, b" \t");
}

#[test]
fn test_leading_delimiter() {
    let tokens: Vec<SharedString> = Tokenizer::new("  ab,cd", " ,").collect();
    assert_eq!(tokens, ["", "ab", "cd"]);
}

#[test]
fn test_empty_input() {
    let mut tok = Tokenizer::whitespace("");
    assert!(tok.has_more_tokens());
    assert_eq!(tok.next_token().unwrap(), "");
    assert!(!tok.has_more_tokens());
    assert_eq!(tok.next(), None);
}

#[test]
fn test_shared_source() {
    let mut s = SharedString::from("a,b,c");
    let mut tok = Tokenizer::new(s.clone(), ",");
    assert_eq!(s.share_count(), 2);
    let first = tok.next_token().unwrap();
    assert_eq!(first, "a");
    assert_eq!(first.share_count(), 1);

    // the tokenizer sees edits made through the other handle
    s.append(",d").unwrap();
    let rest: Vec<SharedString> = tok.collect();
    assert_eq!(rest, ["b", "c", "d"]);
    assert_eq!(s.share_count(), 1);
}

#[test]
fn test_delimiters_from_shared_string() {
    let delims = SharedString::from(";");
    let tokens: Vec<SharedString> = Tokenizer::new("x;y", delims.clone()).collect();
    assert_eq!(tokens, ["x", "y"]);
    assert_eq!(delims.share_count(), 1);
}

#[test]
fn test_source_shrinks_under_tokenizer() {
    let mut s = SharedString::from("ab,cdef");
    let mut tok = Tokenizer::new(s.clone(), ",");
    assert_eq!(tok.next(), Some(SharedString::from("ab")));
    s.remove(1).unwrap();

    let mut again = tok.clone();
    assert!(matches!(again.next_token(), Err(sharedstring::Error::OutOfBounds { position: 3, len: 1 })));

    assert!(tok.has_more_tokens());
    assert_eq!(tok.next(), None);
    assert!(!tok.has_more_tokens());
    assert_eq!(tok.next_token().unwrap(), "");
}
