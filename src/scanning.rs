use std::fmt::Debug;

use log::log_enabled;
use log::Level::Trace;

use crate::logging::Loggable;
use crate::{LABEL, LOG_TARGET};

/// Any callable of shape `FnMut(C) -> C` acts as a scanner: it receives a
/// cursor and returns either the same position (no match) or a position
/// advanced past whatever it matched. The combinators
/// [`Scannable::scan_excluding`] and [`Scannable::scan_while_excluding`] are
/// generic over this shape, so user-defined scanners compose without any
/// registration. Extra scanner arguments are closure captures.
pub trait Scanner<C>: FnMut(C) -> C {}

impl<C, F: FnMut(C) -> C> Scanner<C> for F {}

/// One step of every elementary matcher: look at the current element, advance
/// by one if the test holds, stay put otherwise. Empty input never matches.
#[inline]
fn step<C, A, F>(cur: C, action: &'static str, args: &A, test: F) -> C
where
    C: Scannable,
    A: Debug + ?Sized,
    F: FnOnce(C::Item) -> bool,
{
    match cur.peek() {
        Some(item) => {
            if test(item) {
                let next = cur.bump();
                next.log_advance(action, args);
                next
            } else {
                cur.log_hold(action, args);
                cur
            }
        }
        None => {
            cur.log_hold(action, args);
            cur
        }
    }
}

/// Lookahead walk for the sub-sequence matchers. Pairs the source elements
/// with the pattern elements until the pattern runs out (full match, returns
/// the advanced cursor) or a pair fails / the source runs out (returns None,
/// the caller still holds the original position). The pattern only needs to
/// be traversable once.
fn walk_seq<C, P, F>(origin: &C, pattern: P, mut matches: F) -> Option<C>
where
    C: Scannable + Clone,
    P: IntoIterator,
    F: FnMut(C::Item, P::Item) -> bool,
{
    let mut ahead = origin.clone();
    for expected in pattern {
        match ahead.peek() {
            Some(item) => {
                if matches(item, expected) {
                    ahead = ahead.bump();
                } else {
                    return None;
                }
            }
            None => return None,
        }
    }
    Some(ahead)
}

/// A forward position in a borrowed sequence.
///
/// Implementors supply three things: a guarded look at the current element
/// (`peek`, `None` once the input is exhausted), a single forward step
/// (`bump`), and an end test (`at_end`). Everything else - the `scan_*`
/// family below - is provided on top of those.
///
/// Every provided method upholds one invariant: the returned cursor is either
/// the input position untouched (no match, or empty input) or the position
/// advanced by exactly the verified match length. "No match" is never an
/// error; callers and combinators detect it by comparing positions.
///
/// The sub-sequence matchers and the combinators additionally require
/// `Clone + PartialEq`: a saved copy of the position must survive a failed
/// lookahead, and positions must be comparable. Cursors over the same
/// sequence compare equal exactly when they sit at the same place.
pub trait Scannable: Sized {
    type Item: Debug;

    /// The element under the cursor, or `None` at the end of input.
    fn peek(&self) -> Option<Self::Item>;

    /// Step past the current element. Stepping at the end of input is a
    /// no-op, never an out-of-bounds access.
    fn bump(self) -> Self;

    fn at_end(&self) -> bool;

    /// Labels subsequent trace output, as an aid to debugging composed
    /// scanners. See the `RUST_LOG=scanlet=trace` examples.
    #[inline]
    fn debug_context(self, span_name: &'static str) -> Self {
        if log_enabled!(target: LOG_TARGET, Trace) {
            LABEL.with(|f| f.set("")); // blank the span name before logging
            self.log_hold("debug_context", span_name);
            LABEL.with(|f| f.set(span_name));
        }
        self
    }

    // ------------------------------------------------------------------
    // single element
    // ------------------------------------------------------------------

    /// Advance by one if the current element equals `value`.
    fn scan(self, value: Self::Item) -> Self
    where
        Self::Item: PartialEq,
    {
        step(self, "scan", &value, |item| item == value)
    }

    /// Advance by one if `cmp(current, value)` holds.
    fn scan_by<T, F>(self, value: &T, mut cmp: F) -> Self
    where
        T: Debug + ?Sized,
        F: FnMut(Self::Item, &T) -> bool,
    {
        step(self, "scan_by", value, |item| cmp(item, value))
    }

    /// Advance by one if the projected current element equals `value`.
    fn scan_key<K, F>(self, value: K, mut proj: F) -> Self
    where
        K: PartialEq + Debug,
        F: FnMut(Self::Item) -> K,
    {
        step(self, "scan_key", &value, |item| proj(item) == value)
    }

    /// Exact complement of [`scan`](Scannable::scan): advance by one if the
    /// current element does NOT equal `value`. Empty input still never
    /// matches.
    fn scan_not(self, value: Self::Item) -> Self
    where
        Self::Item: PartialEq,
    {
        step(self, "scan_not", &value, |item| item != value)
    }

    fn scan_not_by<T, F>(self, value: &T, mut cmp: F) -> Self
    where
        T: Debug + ?Sized,
        F: FnMut(Self::Item, &T) -> bool,
    {
        step(self, "scan_not_by", value, |item| !cmp(item, value))
    }

    fn scan_not_key<K, F>(self, value: K, mut proj: F) -> Self
    where
        K: PartialEq + Debug,
        F: FnMut(Self::Item) -> K,
    {
        step(self, "scan_not_key", &value, |item| proj(item) != value)
    }

    // ------------------------------------------------------------------
    // predicate
    // ------------------------------------------------------------------

    /// Advance by one if the predicate holds for the current element.
    fn scan_if<F>(self, mut pred: F) -> Self
    where
        F: FnMut(Self::Item) -> bool,
    {
        step(self, "scan_if", "", |item| pred(item))
    }

    /// Advance by one if the predicate holds for the projected element.
    fn scan_if_key<K, P, F>(self, mut pred: P, mut proj: F) -> Self
    where
        P: FnMut(K) -> bool,
        F: FnMut(Self::Item) -> K,
    {
        step(self, "scan_if_key", "", |item| pred(proj(item)))
    }

    /// Exact complement of [`scan_if`](Scannable::scan_if).
    fn scan_if_not<F>(self, mut pred: F) -> Self
    where
        F: FnMut(Self::Item) -> bool,
    {
        step(self, "scan_if_not", "", |item| !pred(item))
    }

    fn scan_if_not_key<K, P, F>(self, mut pred: P, mut proj: F) -> Self
    where
        P: FnMut(K) -> bool,
        F: FnMut(Self::Item) -> K,
    {
        step(self, "scan_if_not_key", "", |item| !pred(proj(item)))
    }

    // ------------------------------------------------------------------
    // sub-sequence
    // ------------------------------------------------------------------

    /// Advance past `pattern` if every pattern element matches a source
    /// element in order. On any mismatch, or if the source runs out first,
    /// the original position is returned. An empty pattern always matches
    /// and consumes nothing.
    fn scan_seq<P>(self, pattern: P) -> Self
    where
        Self: Clone,
        Self::Item: PartialEq,
        P: IntoIterator<Item = Self::Item>,
    {
        match walk_seq(&self, pattern, |item, expected| item == expected) {
            Some(next) => {
                next.log_advance("scan_seq", "");
                next
            }
            None => {
                self.log_hold("scan_seq", "");
                self
            }
        }
    }

    /// Sub-sequence match under a caller-supplied pairwise comparison. The
    /// pattern elements may be a different type from the source elements.
    fn scan_seq_by<P, F>(self, pattern: P, cmp: F) -> Self
    where
        Self: Clone,
        P: IntoIterator,
        F: FnMut(Self::Item, P::Item) -> bool,
    {
        match walk_seq(&self, pattern, cmp) {
            Some(next) => {
                next.log_advance("scan_seq_by", "");
                next
            }
            None => {
                self.log_hold("scan_seq_by", "");
                self
            }
        }
    }

    /// Sub-sequence match with a projection applied to each side
    /// independently before comparing. Asymmetric projections can be written
    /// with [`scan_seq_by`](Scannable::scan_seq_by).
    fn scan_seq_key<P, K, F>(self, pattern: P, mut proj: F) -> Self
    where
        Self: Clone,
        P: IntoIterator<Item = Self::Item>,
        K: PartialEq,
        F: FnMut(Self::Item) -> K,
    {
        match walk_seq(&self, pattern, |item, expected| proj(item) == proj(expected)) {
            Some(next) => {
                next.log_advance("scan_seq_key", "");
                next
            }
            None => {
                self.log_hold("scan_seq_key", "");
                self
            }
        }
    }

    /// Advance by exactly one element if `pattern` does NOT fully match at
    /// the current position; stay put if it does. The advance is always a
    /// single step, no matter how far the failed lookahead got. At the end
    /// of input the position is returned unchanged.
    fn scan_seq_not<P>(self, pattern: P) -> Self
    where
        Self: Clone,
        Self::Item: PartialEq,
        P: IntoIterator<Item = Self::Item>,
    {
        if self.at_end() {
            self.log_hold("scan_seq_not", "");
            return self;
        }
        match walk_seq(&self, pattern, |item, expected| item == expected) {
            Some(_) => {
                self.log_hold("scan_seq_not", "");
                self
            }
            None => {
                let next = self.bump();
                next.log_advance("scan_seq_not", "");
                next
            }
        }
    }

    fn scan_seq_not_by<P, F>(self, pattern: P, cmp: F) -> Self
    where
        Self: Clone,
        P: IntoIterator,
        F: FnMut(Self::Item, P::Item) -> bool,
    {
        if self.at_end() {
            self.log_hold("scan_seq_not_by", "");
            return self;
        }
        match walk_seq(&self, pattern, cmp) {
            Some(_) => {
                self.log_hold("scan_seq_not_by", "");
                self
            }
            None => {
                let next = self.bump();
                next.log_advance("scan_seq_not_by", "");
                next
            }
        }
    }

    fn scan_seq_not_key<P, K, F>(self, pattern: P, mut proj: F) -> Self
    where
        Self: Clone,
        P: IntoIterator<Item = Self::Item>,
        K: PartialEq,
        F: FnMut(Self::Item) -> K,
    {
        if self.at_end() {
            self.log_hold("scan_seq_not_key", "");
            return self;
        }
        match walk_seq(&self, pattern, |item, expected| proj(item) == proj(expected)) {
            Some(_) => {
                self.log_hold("scan_seq_not_key", "");
                self
            }
            None => {
                let next = self.bump();
                next.log_advance("scan_seq_not_key", "");
                next
            }
        }
    }

    /// [`scan_seq`](Scannable::scan_seq) over the chars of a literal, for
    /// `char` cursors.
    fn scan_text(self, text: &str) -> Self
    where
        Self: Scannable<Item = char> + Clone,
    {
        match walk_seq(&self, text.chars(), |item, expected| item == expected) {
            Some(next) => {
                next.log_advance("scan_text", text);
                next
            }
            None => {
                self.log_hold("scan_text", text);
                self
            }
        }
    }

    /// [`scan_seq_not`](Scannable::scan_seq_not) over the chars of a
    /// literal, for `char` cursors.
    fn scan_text_not(self, text: &str) -> Self
    where
        Self: Scannable<Item = char> + Clone,
    {
        if self.at_end() {
            self.log_hold("scan_text_not", text);
            return self;
        }
        match walk_seq(&self, text.chars(), |item, expected| item == expected) {
            Some(_) => {
                self.log_hold("scan_text_not", text);
                self
            }
            None => {
                let next = self.bump();
                next.log_advance("scan_text_not", text);
                next
            }
        }
    }

    // ------------------------------------------------------------------
    // combinators
    // ------------------------------------------------------------------

    /// Advance by one only if `scanner` does NOT match at the current
    /// position. Inverts "did the scanner match here" into "skip a single
    /// element of filler". At the end of input the position is returned
    /// unchanged.
    fn scan_excluding<F>(self, mut scanner: F) -> Self
    where
        Self: Clone + PartialEq,
        F: Scanner<Self>,
    {
        if self.at_end() {
            self.log_hold("scan_excluding", "");
            return self;
        }
        if scanner(self.clone()) != self {
            self.log_hold("scan_excluding", "");
            return self;
        }
        let next = self.bump();
        next.log_advance("scan_excluding", "");
        next
    }

    /// Greedily repeat the [`scan_excluding`](Scannable::scan_excluding)
    /// step: consume elements one at a time up to (but not past) the first
    /// position where `scanner` matches, or the end of input. Terminates
    /// because every iteration moves exactly one element forward.
    fn scan_while_excluding<F>(self, mut scanner: F) -> Self
    where
        Self: Clone + PartialEq,
        F: Scanner<Self>,
    {
        let mut cur = self;
        while !cur.at_end() && scanner(cur.clone()) == cur {
            cur = cur.bump();
        }
        cur.log_hold("scan_while_excluding", "stop");
        cur
    }
}

impl Scannable for &str {
    type Item = char;

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars().next()
    }

    #[inline]
    fn bump(self) -> Self {
        match self.chars().next() {
            Some(ch) => &self[ch.len_utf8()..],
            None => self,
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.is_empty()
    }
}

impl<'a, T: Debug> Scannable for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn peek(&self) -> Option<&'a T> {
        self.first()
    }

    #[inline]
    fn bump(self) -> Self {
        if self.is_empty() {
            self
        } else {
            &self[1..]
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.is_empty()
    }
}
