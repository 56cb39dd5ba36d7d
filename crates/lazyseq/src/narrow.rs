//! Exact-type projection of heterogeneous sequences.
//!
//! A heterogeneous sequence is one whose items are type-erased values
//! (`Box<dyn Any>`, `Box<dyn Any + Send>` or `&dyn Any`). [`TypeOf`] keeps the
//! items whose runtime type is exactly the target type and hands them out
//! as that type.

use std::any::Any;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Type-erased items that can be narrowed to a concrete type `R`.
///
/// Narrowing succeeds only when the erased value's type is identical to `R`;
/// no numeric widening or other conversion happens.
pub trait Narrow<R>: Sized {
    /// The narrowed form (`R` for owned items, `&R` for borrowed ones).
    type Output;

    /// Returns the narrowed value, or `None` when the runtime type differs.
    fn narrow(self) -> Option<Self::Output>;
}

impl<R: Any> Narrow<R> for Box<dyn Any> {
    type Output = R;

    fn narrow(self) -> Option<R> {
        self.downcast::<R>().ok().map(|value| *value)
    }
}

impl<R: Any> Narrow<R> for Box<dyn Any + Send> {
    type Output = R;

    fn narrow(self) -> Option<R> {
        self.downcast::<R>().ok().map(|value| *value)
    }
}

impl<'a, R: Any> Narrow<R> for &'a (dyn Any + 'static) {
    type Output = &'a R;

    fn narrow(self) -> Option<&'a R> {
        self.downcast_ref::<R>()
    }
}

impl<'a, R: Any> Narrow<R> for &'a (dyn Any + Send + 'static) {
    type Output = &'a R;

    fn narrow(self) -> Option<&'a R> {
        self.downcast_ref::<R>()
    }
}

/// Lazily yields the source items whose runtime type is exactly `R`.
///
/// Created by [`type_of`](crate::type_of). One type check runs per source
/// item, in source order, as items are pulled.
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct TypeOf<I, R> {
    source: I,
    target: PhantomData<fn() -> R>,
}

impl<I, R> TypeOf<I, R> {
    pub(crate) fn new(source: I) -> Self {
        TypeOf {
            source,
            target: PhantomData,
        }
    }
}

impl<I, R> Iterator for TypeOf<I, R>
where
    I: Iterator,
    I::Item: Narrow<R>,
{
    type Item = <I::Item as Narrow<R>>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.find_map(<I::Item as Narrow<R>>::narrow)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<I, R> FusedIterator for TypeOf<I, R>
where
    I: FusedIterator,
    I::Item: Narrow<R>,
{
}

impl<I: Clone, R> Clone for TypeOf<I, R> {
    fn clone(&self) -> Self {
        TypeOf::new(self.source.clone())
    }
}

impl<I: fmt::Debug, R> fmt::Debug for TypeOf<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOf")
            .field("source", &self.source)
            .field("target", &std::any::type_name::<R>())
            .finish()
    }
}
