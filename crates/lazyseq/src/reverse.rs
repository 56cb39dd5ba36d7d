//! Buffered reversal.

use std::fmt;
use std::iter::FusedIterator;

use crate::buffer::Deferred;

/// Yields the source elements in reverse order.
///
/// Created by [`reversed`](crate::reversed). The whole source is buffered on
/// the first pull; elements are then handed out from the last index to the
/// first. Elements are moved, never re-encoded, so floating-point values
/// keep their exact bit patterns.
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct Reversed<I: Iterator> {
    deferred: Deferred<I>,
}

impl<I: Iterator> Reversed<I> {
    pub(crate) fn new(source: I) -> Self {
        Reversed {
            deferred: Deferred::new(source),
        }
    }

    /// Returns `true` once the source has been buffered.
    pub fn is_materialized(&self) -> bool {
        self.deferred.is_materialized()
    }
}

impl<I: Iterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.deferred.items("reversed", |_| {}).next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.deferred.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Reversed<I> {}

impl<I> fmt::Debug for Reversed<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reversed")
            .field("deferred", &self.deferred)
            .finish()
    }
}
