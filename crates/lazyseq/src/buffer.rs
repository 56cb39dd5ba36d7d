//! Materialization of sources for order-dependent combinators.
//!
//! Sorting and reversing need the whole source before the first element can
//! be produced. [`Deferred`] holds the source untouched until the first pull,
//! then realizes it into a single buffer that the adapter drains.

use std::fmt;
use std::vec;

use tracing::debug;

/// Collects every element of `source` into a buffer.
///
/// Never returns for an unbounded source.
pub(crate) fn materialize<I: Iterator>(source: I, op: &'static str) -> Vec<I::Item> {
    let (lower, _) = source.size_hint();
    let mut buffer = Vec::with_capacity(lower);
    buffer.extend(source);
    debug!(op, len = buffer.len(), "materialized source");
    buffer
}

/// A source that is realized into a buffer on first access.
pub(crate) struct Deferred<I: Iterator> {
    source: Option<I>,
    buffer: vec::IntoIter<I::Item>,
}

impl<I: Iterator> Deferred<I> {
    pub(crate) fn new(source: I) -> Self {
        Deferred {
            source: Some(source),
            buffer: Vec::new().into_iter(),
        }
    }

    /// Returns `true` once the source has been pulled into the buffer.
    pub(crate) fn is_materialized(&self) -> bool {
        self.source.is_none()
    }

    /// Returns the buffered elements, materializing the source first if needed.
    ///
    /// `prepare` runs exactly once, on the freshly filled buffer.
    pub(crate) fn items<F>(
        &mut self,
        op: &'static str,
        prepare: F,
    ) -> &mut vec::IntoIter<I::Item>
    where
        F: FnOnce(&mut Vec<I::Item>),
    {
        if let Some(source) = self.source.take() {
            let mut buffer = materialize(source, op);
            prepare(&mut buffer);
            self.buffer = buffer.into_iter();
        }
        &mut self.buffer
    }

    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.buffer.size_hint(),
        }
    }
}

impl<I> fmt::Debug for Deferred<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.debug_tuple("Pending").field(source).finish(),
            None => f.debug_tuple("Buffered").field(&self.buffer.as_slice()).finish(),
        }
    }
}
