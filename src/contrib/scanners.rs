//! Ready-made scanners assembled purely from the public primitives. Each one
//! follows the same contract as the primitives themselves: no match means
//! the cursor comes back untouched.

use once_cell::sync::Lazy;

use crate::prelude::*;

/// Consume a run of whitespace. Zero whitespace is still a match.
pub fn whitespace<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    c.scan_while_excluding(|c: C| c.scan_if_not(char::is_whitespace))
}

/// Consume a run of ascii digits. Zero digits is still a match.
pub fn digits<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    c.scan_while_excluding(|c: C| c.scan_if_not(|ch: char| ch.is_ascii_digit()))
}

/// Consume an identifier: an alphabetic or underscore, then any run of
/// alphanumerics or underscores. Holds if the first element does not
/// qualify.
pub fn identifier<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    let origin = c.clone();
    let c = c.scan_if(|ch| ch.is_alphabetic() || ch == '_');
    if c == origin {
        return origin;
    }
    c.scan_while_excluding(|c: C| c.scan_if_not(|ch: char| ch.is_alphanumeric() || ch == '_'))
}

/// Consume a double-quoted string, both quotes included. Holds on a missing
/// opening quote and on an unterminated body.
pub fn double_quoted<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    let origin = c.clone();
    let c = c.scan('"');
    if c == origin {
        return origin;
    }
    let body = c.scan_while_excluding(|c: C| c.scan('"'));
    let closed = body.clone().scan('"');
    if closed == body {
        return origin; // unterminated
    }
    closed
}

/// Consume a `//` comment up to (not including) the end of the line.
pub fn line_comment<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    let origin = c.clone();
    let c = c.scan_text("//");
    if c == origin {
        return origin;
    }
    c.scan_while_excluding(|c: C| c.scan('\n'))
}

// \b[A-Z0-9._%+-]+@[A-Z0-9.-]+\b
static NAME: Lazy<Vec<char>> = Lazy::new(|| {
    ('a'..='z')
        .chain('0'..='9')
        .chain(['.', '_', '%', '+', '-'])
        .collect()
});
static DOMAIN: Lazy<Vec<char>> =
    Lazy::new(|| ('a'..='z').chain('0'..='9').chain(['.', '-']).collect());

/// Consume an email-shaped token: name, '@', domain. All or nothing.
pub fn email<C>(c: C) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    let origin = c.clone();
    let c = char_run(origin.clone(), &NAME);
    if c == origin {
        return origin;
    }
    let at = c.clone().scan('@');
    if at == c {
        return origin;
    }
    let end = char_run(at.clone(), &DOMAIN);
    if end == at {
        return origin;
    }
    end
}

fn char_run<C>(c: C, set: &'static [char]) -> C
where
    C: Scannable<Item = char> + Clone + PartialEq,
{
    c.scan_while_excluding(move |c: C| {
        c.scan_if_not(|ch: char| set.contains(&ch.to_ascii_lowercase()))
    })
}
