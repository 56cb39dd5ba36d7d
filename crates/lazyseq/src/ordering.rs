//! Sort strategy for [`OrderAccordingTo`](crate::OrderAccordingTo).

use crate::capability::Comparer;

/// Sort strategy for order-dependent combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stability {
    /// Equal elements keep their relative source order.
    #[default]
    Stable,
    /// Equal elements may be reordered; sorts without an auxiliary allocation.
    Unstable,
}

impl Stability {
    /// Sorts `items` in place with `comparer` using this strategy.
    pub(crate) fn sort<T, C>(self, items: &mut [T], comparer: &C)
    where
        C: Comparer<T>,
    {
        match self {
            Stability::Stable => items.sort_by(|a, b| comparer.compare(a, b)),
            Stability::Unstable => items.sort_unstable_by(|a, b| comparer.compare(a, b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ComparerAdapter;

    #[test]
    fn stable_by_default() {
        assert_eq!(Stability::default(), Stability::Stable);
    }

    #[test]
    fn stable_sort_keeps_ties() {
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let by_key = ComparerAdapter::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));

        Stability::Stable.sort(&mut items, &by_key);
        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn unstable_sort_orders_keys() {
        let mut items = vec![5, 3, 9, 1];
        let ascending = ComparerAdapter::new(|a: &i32, b: &i32| a.cmp(b));

        Stability::Unstable.sort(&mut items, &ascending);
        assert_eq!(items, vec![1, 3, 5, 9]);
    }
}
