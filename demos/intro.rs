use scanlet::prelude::*;

/// cargo test --example intro
///
/// RUST_LOG=trace cargo test --example intro -- --nocapture
///
///

fn main() {
    let c = "Hello, world!".scan('H').scan_text("ello");
    println!("rest: {:?}", c);
}
