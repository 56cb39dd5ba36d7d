//! One-to-one element transformation.

use std::fmt;
use std::iter::FusedIterator;

/// Lazily applies a function to every source element.
///
/// Created by [`transform`](crate::transform) and
/// [`transform_fn`](crate::transform_fn). Capability transformers are
/// delegated to through a closure, so this adapter only ever holds a
/// function.
#[derive(Clone)]
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct Transform<I, F> {
    source: I,
    transformer: F,
}

impl<I, F> Transform<I, F> {
    pub(crate) fn new(source: I, transformer: F) -> Self {
        Transform {
            source,
            transformer,
        }
    }
}

impl<I, F, R> Iterator for Transform<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.next().map(&mut self.transformer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F, R> ExactSizeIterator for Transform<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> R,
{
}

impl<I, F, R> FusedIterator for Transform<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> R,
{
}

impl<I: fmt::Debug, F> fmt::Debug for Transform<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
