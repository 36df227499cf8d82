use sharedstring::InsertOptions;
use sharedstring::SharedString;
use sharedstring::StringCursor;
use sharedstring::Tokenizer;
fn main() {
    let mut foo = SharedString::from("hello");
    println!("{} {}",foo,foo.share_count());
    let bar = foo.clone();
    foo.append(" world").unwrap();
    println!("{} {}",foo,foo.share_count());
    println!("{} {}",bar,bar.share_count());

    let baz = bar.deep_clone();
    foo.to_upper().unwrap();
    println!("{} {}",bar,bar.share_count());
    println!("{} {}",baz,baz.share_count());

    let mut c = foo.cursor();
    println!("{} {}",foo,foo.share_count());
    while c.has_next() {
        print!("{}",c.next_byte().unwrap() as char);
    }
    println!();
    let r: SharedString = foo.reverse_cursor().collect();
    println!("{}",r);

    let mut n = SharedString::with_capacity(20, true);
    n.append_int(10, InsertOptions::new().width(5)).unwrap();
    n.append_float(22.0 / 7.0, 2, InsertOptions::new().width(6)).unwrap();
    n.append_hex(-1, InsertOptions::new()).unwrap();
    println!("{:?} {}",n,n.capacity());

    for token in Tokenizer::whitespace("the quick \t brown fox") {
        println!("{}",token);
    }
}
