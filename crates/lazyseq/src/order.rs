//! Comparer-driven ordering.

use std::fmt;
use std::iter::FusedIterator;

use crate::buffer::Deferred;
use crate::capability::Comparer;
use crate::ordering::Stability;

/// Yields the source elements sorted by a [`Comparer`].
///
/// Created by [`order_according_to`](crate::order_according_to) and
/// [`order_according_to_fn`](crate::order_according_to_fn). On the first pull
/// the whole source is buffered and sorted in place; later pulls hand out the
/// buffered elements without calling the comparer again.
///
/// The sort is stable unless [`unstable`](OrderAccordingTo::unstable) is
/// selected before the first pull.
///
/// # Example
///
/// ```
/// use lazyseq::Sequence;
///
/// let words = vec!["message", "", "qwe", "1"];
/// let by_len: Vec<&str> = words
///     .order_according_to_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()))
///     .collect();
/// assert_eq!(by_len, vec!["", "1", "qwe", "message"]);
/// ```
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct OrderAccordingTo<I: Iterator, C> {
    deferred: Deferred<I>,
    comparer: C,
    stability: Stability,
}

impl<I: Iterator, C> OrderAccordingTo<I, C> {
    pub(crate) fn new(source: I, comparer: C) -> Self {
        OrderAccordingTo {
            deferred: Deferred::new(source),
            comparer,
            stability: Stability::default(),
        }
    }

    /// Selects the sort strategy.
    ///
    /// Has no effect once the source has been buffered.
    pub fn stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Selects an unstable sort; equal elements may be reordered.
    pub fn unstable(self) -> Self {
        self.stability(Stability::Unstable)
    }

    /// Returns the selected sort strategy.
    pub fn get_stability(&self) -> Stability {
        self.stability
    }

    /// Returns `true` once the source has been buffered and sorted.
    pub fn is_materialized(&self) -> bool {
        self.deferred.is_materialized()
    }
}

impl<I, C> Iterator for OrderAccordingTo<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let comparer = &self.comparer;
        let stability = self.stability;
        self.deferred
            .items("order_according_to", |buffer| stability.sort(buffer, comparer))
            .next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.deferred.size_hint()
    }
}

impl<I, C> FusedIterator for OrderAccordingTo<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
}

impl<I, C> fmt::Debug for OrderAccordingTo<I, C>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderAccordingTo")
            .field("deferred", &self.deferred)
            .field("comparer", &self.comparer)
            .field("stability", &self.stability)
            .finish()
    }
}
