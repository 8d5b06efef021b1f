use scanlet::prelude::*;

/// cargo run --example quotes
///
/// RUST_LOG=scanlet=trace cargo run --example quotes
///
///

fn main() {
    env_logger::init();

    let source = "Programs must be written for people to read, \
                  and only incidentally for machines to execute. \
                  -- Harold Abelson";

    let cur = source.scan('P');
    println!("single element: {:?}", cur.peek());

    let cur = cur.scan_text("rograms m");
    println!("range of elements: {:?}", cur.peek());

    let cur = cur.scan_if(|c| c == 'u');
    println!("predicate: {:?}", cur.peek());

    let source = "Talk is cheap. Show me the code. -- Linus Torvalds";

    let cur = source.scan_not('Q');
    println!("single element: {:?}", cur.peek());

    let cur = cur.scan_text_not("alks");
    println!("range of elements: {:?}", cur.peek());

    let cur = cur.scan_if_not(|c| c == 'f');
    println!("predicate: {:?}", cur.peek());
}

#[cfg(test)]
mod tests {
    use scanlet::prelude::*;
    use test_log::test;

    #[test]
    fn test_abelson() {
        let source = "Programs must be written";
        let cur = source.scan('P');
        assert_eq!(cur.peek(), Some('r'));
        let cur = cur.scan_text("rograms m");
        assert_eq!(cur.peek(), Some('u'));
        let cur = cur.scan_if(|c| c == 'u');
        assert_eq!(cur.peek(), Some('s'));
    }

    #[test]
    fn test_torvalds() {
        let source = "Talk is cheap.";
        // 'T' is not 'Q', so scan_not advances one
        let cur = source.scan_not('Q');
        assert_eq!(cur.peek(), Some('a'));
        // "alks" does not fully match "alk is...", so one more step
        let cur = cur.scan_text_not("alks");
        assert_eq!(cur.peek(), Some('l'));
        // 'l' is not 'f', so the negated predicate advances
        let cur = cur.scan_if_not(|c| c == 'f');
        assert_eq!(cur.peek(), Some('k'));
    }
}
