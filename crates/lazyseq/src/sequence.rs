//! Combinator entry points.
//!
//! Every combinator is available twice: as a free function taking the source
//! as its first argument, and as a method of the [`Sequence`] extension trait,
//! which is implemented for everything that is [`IntoIterator`].
//!
//! Each capability-taking combinator also has a `_fn` form accepting a plain
//! function. Predicates and comparers are wrapped in their adapters;
//! transformers are delegated to through a closure.

use std::cmp::Ordering;

use crate::adapter::{ComparerAdapter, PredicateAdapter};
use crate::capability::{Comparer, Predicate, Transformer};
use crate::filter::FilterBy;
use crate::narrow::{Narrow, TypeOf};
use crate::order::OrderAccordingTo;
use crate::reverse::Reversed;
use crate::transform::Transform;

/// Keeps the elements of `source` matching `predicate`, in source order.
pub fn filter_by<S, P>(source: S, predicate: P) -> FilterBy<S::IntoIter, P>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    FilterBy::new(source.into_iter(), predicate)
}

/// Keeps the elements of `source` for which `predicate` returns `true`.
pub fn filter_by_fn<S, F>(source: S, predicate: F) -> FilterBy<S::IntoIter, PredicateAdapter<F>>
where
    S: IntoIterator,
    F: Fn(&S::Item) -> bool,
{
    filter_by(source, PredicateAdapter::new(predicate))
}

/// Sorts the elements of `source` with `comparer`.
pub fn order_according_to<S, C>(source: S, comparer: C) -> OrderAccordingTo<S::IntoIter, C>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
    OrderAccordingTo::new(source.into_iter(), comparer)
}

/// Sorts the elements of `source` with a two-argument ordering function.
pub fn order_according_to_fn<S, F>(
    source: S,
    comparer: F,
) -> OrderAccordingTo<S::IntoIter, ComparerAdapter<F>>
where
    S: IntoIterator,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    order_according_to(source, ComparerAdapter::new(comparer))
}

/// Applies `transformer` to every element of `source`.
pub fn transform<S, T, R>(
    source: S,
    transformer: T,
) -> Transform<S::IntoIter, impl FnMut(S::Item) -> R>
where
    S: IntoIterator,
    T: Transformer<S::Item, R>,
{
    transform_fn(source, move |item| transformer.transform(item))
}

/// Applies the function `transformer` to every element of `source`.
pub fn transform_fn<S, F, R>(source: S, transformer: F) -> Transform<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    Transform::new(source.into_iter(), transformer)
}

/// Keeps the type-erased elements of `source` whose runtime type is exactly `R`.
///
/// ```
/// use std::any::Any;
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1i32), Box::new("x"), Box::new(2.5f64)];
/// let ints: Vec<i32> = lazyseq::type_of::<i32, _>(mixed).collect();
/// assert_eq!(ints, vec![1]);
/// ```
pub fn type_of<R, S>(source: S) -> TypeOf<S::IntoIter, R>
where
    S: IntoIterator,
    S::Item: Narrow<R>,
{
    TypeOf::new(source.into_iter())
}

/// Yields the elements of `source` in reverse order.
pub fn reversed<S>(source: S) -> Reversed<S::IntoIter>
where
    S: IntoIterator,
{
    Reversed::new(source.into_iter())
}

/// Method-call form of the combinators, for any [`IntoIterator`].
///
/// # Example
///
/// ```
/// use lazyseq::Sequence;
///
/// let result: Vec<String> = vec![12, 35, -65, 543, 23]
///     .filter_by_fn(|x: &i32| x.to_string().contains('5'))
///     .reversed()
///     .transform_fn(|x| x.to_string())
///     .collect();
/// assert_eq!(result, vec!["543", "-65", "35"]);
/// ```
pub trait Sequence: IntoIterator + Sized {
    /// See [`filter_by`].
    fn filter_by<P>(self, predicate: P) -> FilterBy<Self::IntoIter, P>
    where
        P: Predicate<Self::Item>,
    {
        filter_by(self, predicate)
    }

    /// See [`filter_by_fn`].
    fn filter_by_fn<F>(self, predicate: F) -> FilterBy<Self::IntoIter, PredicateAdapter<F>>
    where
        F: Fn(&Self::Item) -> bool,
    {
        filter_by_fn(self, predicate)
    }

    /// See [`order_according_to`].
    fn order_according_to<C>(self, comparer: C) -> OrderAccordingTo<Self::IntoIter, C>
    where
        C: Comparer<Self::Item>,
    {
        order_according_to(self, comparer)
    }

    /// See [`order_according_to_fn`].
    fn order_according_to_fn<F>(
        self,
        comparer: F,
    ) -> OrderAccordingTo<Self::IntoIter, ComparerAdapter<F>>
    where
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        order_according_to_fn(self, comparer)
    }

    /// See [`transform`].
    fn transform<T, R>(
        self,
        transformer: T,
    ) -> Transform<Self::IntoIter, impl FnMut(Self::Item) -> R>
    where
        T: Transformer<Self::Item, R>,
    {
        transform(self, transformer)
    }

    /// See [`transform_fn`].
    fn transform_fn<F, R>(self, transformer: F) -> Transform<Self::IntoIter, F>
    where
        F: FnMut(Self::Item) -> R,
    {
        transform_fn(self, transformer)
    }

    /// See [`type_of`].
    fn type_of<R>(self) -> TypeOf<Self::IntoIter, R>
    where
        Self::Item: Narrow<R>,
    {
        type_of(self)
    }

    /// See [`reversed`].
    fn reversed(self) -> Reversed<Self::IntoIter> {
        reversed(self)
    }
}

impl<S: IntoIterator> Sequence for S {}
