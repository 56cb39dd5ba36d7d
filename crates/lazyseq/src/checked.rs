//! Combinators with validated, possibly absent arguments.
//!
//! These mirror the functions in the crate root but take every argument as an
//! [`Option`]. An absent argument fails the call immediately with
//! [`SequenceError::InvalidArgument`](crate::SequenceError::InvalidArgument),
//! before the source is converted into an iterator and before any capability
//! runs. The source is checked first, then the capability.
//!
//! ```
//! use lazyseq::{checked, SequenceError};
//!
//! let missing: Option<fn(&i32) -> bool> = None;
//! let err = checked::filter_by_fn(Some(vec![1, 2, 3]), missing).unwrap_err();
//! assert_eq!(err, SequenceError::InvalidArgument { name: "predicate" });
//! ```

use std::cmp::Ordering;

use crate::adapter::{ComparerAdapter, PredicateAdapter};
use crate::capability::{Comparer, Predicate, Transformer};
use crate::error::{require, Result};
use crate::filter::FilterBy;
use crate::narrow::{Narrow, TypeOf};
use crate::order::OrderAccordingTo;
use crate::reverse::Reversed;
use crate::sequence;
use crate::transform::Transform;

/// Validated form of [`filter_by`](crate::filter_by).
pub fn filter_by<S, P>(
    source: Option<S>,
    predicate: Option<P>,
) -> Result<FilterBy<S::IntoIter, P>>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    let source = require(source, "source")?;
    let predicate = require(predicate, "predicate")?;
    Ok(sequence::filter_by(source, predicate))
}

/// Validated form of [`filter_by_fn`](crate::filter_by_fn).
pub fn filter_by_fn<S, F>(
    source: Option<S>,
    predicate: Option<F>,
) -> Result<FilterBy<S::IntoIter, PredicateAdapter<F>>>
where
    S: IntoIterator,
    F: Fn(&S::Item) -> bool,
{
    let source = require(source, "source")?;
    let predicate = PredicateAdapter::try_new(predicate)?;
    Ok(sequence::filter_by(source, predicate))
}

/// Validated form of [`order_according_to`](crate::order_according_to).
pub fn order_according_to<S, C>(
    source: Option<S>,
    comparer: Option<C>,
) -> Result<OrderAccordingTo<S::IntoIter, C>>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
    let source = require(source, "source")?;
    let comparer = require(comparer, "comparer")?;
    Ok(sequence::order_according_to(source, comparer))
}

/// Validated form of [`order_according_to_fn`](crate::order_according_to_fn).
pub fn order_according_to_fn<S, F>(
    source: Option<S>,
    comparer: Option<F>,
) -> Result<OrderAccordingTo<S::IntoIter, ComparerAdapter<F>>>
where
    S: IntoIterator,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    let source = require(source, "source")?;
    let comparer = ComparerAdapter::try_new(comparer)?;
    Ok(sequence::order_according_to(source, comparer))
}

/// Validated form of [`transform`](crate::transform).
pub fn transform<S, T, R>(
    source: Option<S>,
    transformer: Option<T>,
) -> Result<Transform<S::IntoIter, impl FnMut(S::Item) -> R>>
where
    S: IntoIterator,
    T: Transformer<S::Item, R>,
{
    let source = require(source, "source")?;
    let transformer = require(transformer, "transformer")?;
    Ok(sequence::transform(source, transformer))
}

/// Validated form of [`transform_fn`](crate::transform_fn).
pub fn transform_fn<S, F, R>(
    source: Option<S>,
    transformer: Option<F>,
) -> Result<Transform<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    let source = require(source, "source")?;
    let transformer = require(transformer, "transformer")?;
    Ok(sequence::transform_fn(source, transformer))
}

/// Validated form of [`type_of`](crate::type_of).
pub fn type_of<R, S>(source: Option<S>) -> Result<TypeOf<S::IntoIter, R>>
where
    S: IntoIterator,
    S::Item: Narrow<R>,
{
    let source = require(source, "source")?;
    Ok(sequence::type_of(source))
}

/// Validated form of [`reversed`](crate::reversed).
pub fn reversed<S>(source: Option<S>) -> Result<Reversed<S::IntoIter>>
where
    S: IntoIterator,
{
    let source = require(source, "source")?;
    Ok(sequence::reversed(source))
}
