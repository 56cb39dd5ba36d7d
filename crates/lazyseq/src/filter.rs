//! Predicate-driven filtering.

use std::iter::FusedIterator;

use crate::capability::Predicate;

/// Lazily yields the source elements matching a [`Predicate`].
///
/// Created by [`filter_by`](crate::filter_by) and
/// [`filter_by_fn`](crate::filter_by_fn). The predicate runs once per source
/// element, in source order, as elements are pulled.
#[derive(Debug, Clone)]
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct FilterBy<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> FilterBy<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        FilterBy { source, predicate }
    }
}

impl<I, P> Iterator for FilterBy<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &self.predicate;
        self.source.find(|item| predicate.is_match(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<I, P> FusedIterator for FilterBy<I, P>
where
    I: FusedIterator,
    P: Predicate<I::Item>,
{
}
