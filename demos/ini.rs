use scanlet::contrib::scanners;
use scanlet::prelude::*;

/// A hand-written lexer for "key = value" lines, built from the scanning
/// primitives plus the selection cursor.
///
/// RUST_LOG=scanlet=trace cargo run --example ini
///
///

const CONF: &str = "\
# dimensions
width = 320
height = 240
title = hello world
";

fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let c = sl::Cursor::from(line).debug_context("pair");
    let c = scanners::whitespace(c);

    let c = c.selection_start();
    let after_key = scanners::identifier(c.clone());
    if after_key == c {
        return None; // no key here
    }
    let after_key = after_key.selection_end();
    let key = after_key.selection();

    let c = scanners::whitespace(after_key);
    let eq = c.clone().scan('=');
    if eq == c {
        return None;
    }
    let c = scanners::whitespace(eq);

    let c = c
        .selection_start()
        .scan_while_excluding(|c: sl::Cursor| c.scan('\n'))
        .selection_end();
    Some((key, c.selection().trim_end()))
}

fn parse(conf: &str) -> Vec<(&str, &str)> {
    conf.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(parse_pair)
        .collect()
}

fn main() {
    env_logger::init();
    for (key, value) in parse(CONF) {
        println!("{key} -> {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_pair};
    use test_log::test;

    #[test]
    fn test_pair() {
        assert_eq!(parse_pair("width = 320"), Some(("width", "320")));
        assert_eq!(parse_pair("  title = hello world"), Some(("title", "hello world")));
        assert_eq!(parse_pair("title hello"), None);
        assert_eq!(parse_pair("= 320"), None);
        assert_eq!(parse_pair(""), None);
    }

    #[test]
    fn test_conf() {
        let pairs = parse(super::CONF);
        assert_eq!(
            pairs,
            vec![
                ("width", "320"),
                ("height", "240"),
                ("title", "hello world"),
            ]
        );
    }
}
