//! Capability traits consumed by the combinators.
//!
//! Each trait describes one callable behavior a caller supplies: a
//! [`Predicate`] classifies elements, a [`Transformer`] maps them and a
//! [`Comparer`] orders them. Plain functions are turned into capabilities with
//! the adapters in [`crate::adapter`].

use std::cmp::Ordering;

/// Classifies a value as matching or not.
///
/// Combinators call [`is_match`](Predicate::is_match) once per element, in
/// iteration order.
///
/// # Example
///
/// ```
/// use lazyseq::{Predicate, Sequence};
///
/// struct Even;
///
/// impl Predicate<i32> for Even {
///     fn is_match(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// let evens: Vec<i32> = vec![1, 2, 3, 4].filter_by(Even).collect();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `value` satisfies the condition.
    fn is_match(&self, value: &T) -> bool;
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn is_match(&self, value: &T) -> bool {
        (**self).is_match(value)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    fn is_match(&self, value: &T) -> bool {
        (**self).is_match(value)
    }
}

/// Maps a source value to a result value.
pub trait Transformer<S, R> {
    /// Transforms `value`.
    fn transform(&self, value: S) -> R;
}

impl<S, R, T: Transformer<S, R> + ?Sized> Transformer<S, R> for &T {
    fn transform(&self, value: S) -> R {
        (**self).transform(value)
    }
}

impl<S, R, T: Transformer<S, R> + ?Sized> Transformer<S, R> for Box<T> {
    fn transform(&self, value: S) -> R {
        (**self).transform(value)
    }
}

/// Orders two values relative to each other.
///
/// Sorting assumes the comparer is a strict weak ordering. This is not
/// checked; an inconsistent comparer produces an unspecified permutation.
pub trait Comparer<T: ?Sized> {
    /// Compares `lhs` with `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for Box<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Predicate<i64> for Positive {
        fn is_match(&self, value: &i64) -> bool {
            *value > 0
        }
    }

    struct Halve;

    impl Transformer<i64, f64> for Halve {
        fn transform(&self, value: i64) -> f64 {
            value as f64 / 2.0
        }
    }

    struct ByLen;

    impl Comparer<str> for ByLen {
        fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
            lhs.len().cmp(&rhs.len())
        }
    }

    #[test]
    fn predicate_through_references() {
        let p = Positive;
        assert!((&p).is_match(&3i64));
        assert!(!Box::new(Positive).is_match(&-3i64));

        let dynamic: Box<dyn Predicate<i64>> = Box::new(Positive);
        assert!(dynamic.is_match(&1));
    }

    #[test]
    fn transformer_through_references() {
        let t = Halve;
        assert_eq!((&t).transform(5i64), 2.5);
        assert_eq!(Box::new(Halve).transform(-4i64), -2.0);
    }

    #[test]
    fn comparer_unsized_elements() {
        assert_eq!(ByLen.compare("ab", "abc"), Ordering::Less);
        assert_eq!((&ByLen).compare("abc", "xyz"), Ordering::Equal);
    }
}
