use std::future::{ready, Future};

use crate::Immediate;

/// Decides whether two elements are equal.
///
/// There is no hashing requirement, so membership tests built on this
/// contract are linear scans. This makes it usable for elements without a
/// well-defined hash, such as tolerance-based numeric equality.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Suspending counterpart of [`EqualityComparer`].
pub trait AsyncEqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> impl Future<Output = bool>;
}

/// Equality as defined by [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: PartialEq + ?Sized> AsyncEqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> impl Future<Output = bool> {
        ready(a == b)
    }
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

impl<T: ?Sized, F, Fut> AsyncEqualityComparer<T> for F
where
    F: Fn(&T, &T) -> Fut,
    Fut: Future<Output = bool>,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> impl Future<Output = bool> {
        self(a, b)
    }
}

impl<T: ?Sized, C> AsyncEqualityComparer<T> for Immediate<C>
where
    C: EqualityComparer<T>,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> impl Future<Output = bool> {
        ready(self.0.equals(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn within_tenth(a: &f64, b: &f64) -> bool {
        (a - b).abs() < 0.1
    }

    #[test]
    fn test_default_equality() {
        assert!(EqualityComparer::equals(&DefaultEquality, "a", "a"));
        assert!(!EqualityComparer::equals(&DefaultEquality, &1, &2));
    }

    #[test]
    fn test_closure_equality() {
        let comparer = within_tenth;
        assert!(EqualityComparer::equals(&comparer, &1.0, &1.05));
        assert!(!EqualityComparer::equals(&comparer, &1.0, &1.2));
    }

    #[test]
    fn test_immediate_lifts_sync_comparer() {
        let comparer = Immediate(within_tenth);
        assert!(block_on(AsyncEqualityComparer::equals(&comparer, &2.0, &2.01)));
        assert!(!block_on(AsyncEqualityComparer::equals(&comparer, &2.0, &3.0)));
    }

    #[test]
    fn test_async_closure_equality() {
        let comparer = |a: &i32, b: &i32| {
            let equal = a % 10 == b % 10;
            async move { equal }
        };
        assert!(block_on(AsyncEqualityComparer::equals(&comparer, &11, &21)));
        assert!(!block_on(AsyncEqualityComparer::equals(&comparer, &11, &22)));
    }
}
