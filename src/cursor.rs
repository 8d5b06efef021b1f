use std::fmt;

use crate::logging::Loggable;
use crate::prelude::Scannable;
use crate::util;

/// A `char` cursor over a `&str` that also records a selection, so a lexer
/// can recover the text a chain of scanners consumed.
///
/// Without explicit marks the selection tracks the most recent step; marking
/// with [`selection_start`](Cursor::selection_start) /
/// [`selection_end`](Cursor::selection_end) pins it to an explicit span.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    rest: &'a str,
    selection: Selection<'a>,
}

#[derive(Debug, Clone, PartialEq)]
enum Selection<'a> {
    Defaulted(&'a str),
    Marked(&'a str, Option<&'a str>),
    Last(&'a str, &'a str),
}

// position equality only; selection marks never affect whether a
// combinator sees a match
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rest.as_ptr() == other.rest.as_ptr() && self.rest.len() == other.rest.len()
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        let cur = Self {
            source: s,
            rest: s,
            selection: Selection::Defaulted(s),
        };
        cur.log_hold("Cursor::from", "");
        cur
    }
}

impl<'a> From<Cursor<'a>> for &'a str {
    #[inline]
    fn from(c: Cursor<'a>) -> Self {
        c.rest
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cursor(@{}, {})", self.offset(), util::snippet(self.rest))
    }
}

impl<'a> Cursor<'a> {
    /// The unconsumed suffix of the source.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// How many bytes of the source have been consumed.
    pub fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    /// Mark the current position as the start of the selection.
    pub fn selection_start(self) -> Self {
        let cur = Self {
            selection: Selection::Marked(self.rest, None),
            ..self
        };
        cur.log_hold("selection_start", "");
        cur
    }

    /// Mark the current position as the end of the selection.
    pub fn selection_end(self) -> Self {
        let cur = Self {
            selection: Selection::Marked(self.selection.start(), Some(self.rest)),
            ..self
        };
        cur.log_hold("selection_end", "");
        cur
    }

    /// The selected span: the marked region, or the text consumed by the
    /// most recent step when nothing was marked.
    pub fn selection(&self) -> &'a str {
        let (s, e) = self.selection.span(self.rest);
        &s[..s.len() - e.len()]
    }
}

impl<'a> Selection<'a> {
    fn start(&self) -> &'a str {
        match self {
            Selection::Defaulted(s) => s,
            Selection::Marked(s, _) => s,
            Selection::Last(s, _) => s,
        }
    }

    fn advanced(self, to: &'a str) -> Self {
        match self {
            Selection::Defaulted(s) => Selection::Last(s, to),
            Selection::Marked(..) => self,
            Selection::Last(_s, e) => Selection::Last(e, to),
        }
    }

    fn span(&self, cur: &'a str) -> (&'a str, &'a str) {
        match self {
            Selection::Defaulted(s) => (s, cur),
            Selection::Marked(s, opt_e) => (s, opt_e.unwrap_or(cur)),
            Selection::Last(s, e) => (s, e),
        }
    }
}

impl Scannable for Cursor<'_> {
    type Item = char;

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    #[inline]
    fn bump(self) -> Self {
        match self.rest.chars().next() {
            Some(ch) => {
                let to = &self.rest[ch.len_utf8()..];
                Self {
                    source: self.source,
                    rest: to,
                    selection: self.selection.advanced(to),
                }
            }
            None => self,
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.rest.is_empty()
    }
}

/// Caps how many elements of an inner cursor are visible: the cap is an
/// extra boundary carried alongside the position, and scanning treats it
/// exactly like the end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<C> {
    inner: C,
    cap: usize,
}

impl<C> Bounded<C> {
    pub fn new(inner: C, cap: usize) -> Self {
        Self { inner, cap }
    }

    /// Remaining elements visible before the cap.
    pub fn remaining(&self) -> usize {
        self.cap
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Scannable> Scannable for Bounded<C> {
    type Item = C::Item;

    #[inline]
    fn peek(&self) -> Option<C::Item> {
        if self.cap == 0 {
            None
        } else {
            self.inner.peek()
        }
    }

    #[inline]
    fn bump(self) -> Self {
        if self.cap == 0 {
            return self;
        }
        Self {
            inner: self.inner.bump(),
            cap: self.cap - 1,
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.cap == 0 || self.inner.at_end()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_cursor_round_trip() {
        let s = "Hello World!";
        let c1 = sl::Cursor::from(s);
        let c2: sl::Cursor = s.into();

        assert_eq!(c1.rest(), s);
        let s2: &str = c2.into();
        assert_eq!(s2, s);
    }

    #[test]
    fn test_cursor_scans_like_str() {
        let c = sl::Cursor::from("Hello, world!");
        let c = c.scan('H').scan_text("ello").scan(',').scan(' ');
        assert_eq!(c.rest(), "world!");
        assert_eq!(c.offset(), 7);

        // no match leaves the position alone
        let c = c.scan('X').scan_text("planet");
        assert_eq!(c.rest(), "world!");
    }

    #[test]
    fn test_cursor_equality_is_position_only() {
        let a = sl::Cursor::from("abc").scan('a');
        let b = sl::Cursor::from("abc");
        assert_ne!(a.clone(), b);

        // same position, different selection marks
        let marked = a.clone().selection_start();
        assert_eq!(a, marked);
    }

    #[test]
    fn test_selection_marks() {
        let c = sl::Cursor::from("key = value")
            .selection_start()
            .scan_while_excluding(|c: sl::Cursor| c.scan_if(|ch| !ch.is_alphanumeric()))
            .selection_end();
        assert_eq!(c.selection(), "key");
        assert_eq!(c.rest(), " = value");

        // a second mark replaces the first
        let c = c
            .scan_text(" = ")
            .selection_start()
            .scan_text("value")
            .selection_end();
        assert_eq!(c.selection(), "value");
        assert_eq!(c.rest(), "");
    }

    #[test]
    fn test_selection_tracks_last_step() {
        let c = sl::Cursor::from("abcd").scan('a');
        assert_eq!(c.selection(), "a");
        let c = c.scan('b');
        assert_eq!(c.selection(), "b");
    }

    #[test]
    fn test_bounded_caps_the_scan() {
        let b = sl::Bounded::new("Hello, world!", 3);
        // the cap behaves as the end of input
        assert_eq!(b.clone().scan_text("Hello").remaining(), 3);
        let b = b.scan_text("Hel");
        assert_eq!(b.remaining(), 0);
        assert!(b.at_end());
        assert_eq!(b.clone().scan('l').remaining(), 0);
        assert_eq!(b.into_inner(), "lo, world!");
    }

    #[test]
    fn test_bounded_composes_with_combinators() {
        let b = sl::Bounded::new("alpha beta", 5);
        let b = b.scan_while_excluding(|c: sl::Bounded<&str>| c.scan(' '));
        assert_eq!(b.into_inner(), " beta");
    }
}
