//! Adapters turning plain functions into capabilities.
//!
//! [`PredicateAdapter`] and [`ComparerAdapter`] own a closure and forward
//! every call to it unchanged, so combinators can be written once against
//! [`Predicate`] and [`Comparer`] and still accept bare functions.

use std::cmp::Ordering;
use std::fmt;

use crate::capability::{Comparer, Predicate};
use crate::error::{require, Result};

/// Wraps a unary function as a [`Predicate`].
///
/// # Example
///
/// ```
/// use lazyseq::{Predicate, PredicateAdapter};
///
/// let negative = PredicateAdapter::new(|x: &i32| *x < 0);
/// assert!(negative.is_match(&-4));
/// assert!(!negative.is_match(&4));
/// ```
#[derive(Clone, Copy)]
pub struct PredicateAdapter<F> {
    predicate: F,
}

impl<F> PredicateAdapter<F> {
    /// Wraps `predicate`.
    pub fn new(predicate: F) -> Self {
        PredicateAdapter { predicate }
    }

    /// Wraps `predicate`, failing with
    /// [`InvalidArgument`](crate::SequenceError::InvalidArgument) when it is
    /// absent.
    pub fn try_new(predicate: Option<F>) -> Result<Self> {
        require(predicate, "predicate").map(Self::new)
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.predicate
    }
}

impl<T: ?Sized, F> Predicate<T> for PredicateAdapter<F>
where
    F: Fn(&T) -> bool,
{
    fn is_match(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<F> fmt::Debug for PredicateAdapter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateAdapter").finish_non_exhaustive()
    }
}

/// Wraps a binary ordering function as a [`Comparer`].
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use lazyseq::{Comparer, ComparerAdapter};
///
/// let by_len = ComparerAdapter::new(|a: &String, b: &String| a.len().cmp(&b.len()));
/// let (long, short) = (String::from("qwe"), String::from("1"));
/// assert_eq!(by_len.compare(&long, &short), Ordering::Greater);
/// ```
#[derive(Clone, Copy)]
pub struct ComparerAdapter<F> {
    comparer: F,
}

impl<F> ComparerAdapter<F> {
    /// Wraps `comparer`.
    pub fn new(comparer: F) -> Self {
        ComparerAdapter { comparer }
    }

    /// Wraps `comparer`, failing with
    /// [`InvalidArgument`](crate::SequenceError::InvalidArgument) when it is
    /// absent.
    pub fn try_new(comparer: Option<F>) -> Result<Self> {
        require(comparer, "comparer").map(Self::new)
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.comparer
    }
}

impl<T: ?Sized, F> Comparer<T> for ComparerAdapter<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.comparer)(lhs, rhs)
    }
}

impl<F> fmt::Debug for ComparerAdapter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparerAdapter").finish_non_exhaustive()
    }
}
