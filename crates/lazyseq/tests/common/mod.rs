//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use lazyseq::{Comparer, Predicate, Transformer};

/// Capability object that records how often it was invoked.
///
/// Implements every capability trait by forwarding to the wrapped function,
/// so the same type can stand in for a predicate, a transformer or a comparer.
pub struct Mock<F> {
    f: F,
    calls: Cell<usize>,
}

impl<F> Mock<F> {
    pub fn new(f: F) -> Self {
        Mock {
            f,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<F> fmt::Debug for Mock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mock")
            .field("calls", &self.calls.get())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Predicate<T> for Mock<F> {
    fn is_match(&self, value: &T) -> bool {
        self.record();
        (self.f)(value)
    }
}

impl<S, R, F: Fn(S) -> R> Transformer<S, R> for Mock<F> {
    fn transform(&self, value: S) -> R {
        self.record();
        (self.f)(value)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for Mock<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.record();
        (self.f)(lhs, rhs)
    }
}

/// Matches integers whose decimal representation contains `digit`.
#[derive(Debug, Clone, Copy)]
pub struct DigitPredicate {
    pub digit: u32,
}

impl DigitPredicate {
    pub fn contains(&self, value: i32) -> bool {
        let mut rest = value.unsigned_abs();
        loop {
            if rest % 10 == self.digit {
                return true;
            }
            rest /= 10;
            if rest == 0 {
                return false;
            }
        }
    }
}

impl Predicate<i32> for DigitPredicate {
    fn is_match(&self, value: &i32) -> bool {
        self.contains(*value)
    }
}

/// Renders the IEEE 754 binary64 layout of `value` as 64 `0`/`1` characters.
pub fn ieee754(value: f64) -> String {
    format!("{:064b}", value.to_bits())
}

/// Quiet NaN with the sign bit set.
pub fn negative_quiet_nan() -> f64 {
    f64::from_bits(0xFFF8_0000_0000_0000)
}

/// Smallest positive subnormal value.
pub fn min_subnormal() -> f64 {
    f64::from_bits(1)
}

/// Doubles covering signs, extremes, subnormals and special values.
pub fn special_doubles() -> Vec<f64> {
    vec![
        -255.255,
        255.255,
        4294967295.0,
        f64::MIN,
        f64::MAX,
        min_subnormal(),
        negative_quiet_nan(),
        f64::NEG_INFINITY,
        f64::INFINITY,
        -0.0,
        0.0,
    ]
}

/// Bit strings of [`special_doubles`], index for index.
pub fn special_double_bits() -> Vec<&'static str> {
    vec![
        "1100000001101111111010000010100011110101110000101000111101011100",
        "0100000001101111111010000010100011110101110000101000111101011100",
        "0100000111101111111111111111111111111111111000000000000000000000",
        "1111111111101111111111111111111111111111111111111111111111111111",
        "0111111111101111111111111111111111111111111111111111111111111111",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "1111111111111000000000000000000000000000000000000000000000000000",
        "1111111111110000000000000000000000000000000000000000000000000000",
        "0111111111110000000000000000000000000000000000000000000000000000",
        "1000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ]
}

/// Journal entry with a natural ordering by author, then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Note {
    pub author: String,
    pub text: String,
}

impl Note {
    pub fn new(author: &str, text: &str) -> Self {
        Note {
            author: author.to_string(),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}

/// Orders notes by their natural ordering.
pub fn compare_notes(lhs: &Note, rhs: &Note) -> Ordering {
    lhs.cmp(rhs)
}
