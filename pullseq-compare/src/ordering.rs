use std::cmp::Ordering;
use std::future::{ready, Future};

use crate::Immediate;

/// Three-way comparison of two elements.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Suspending counterpart of [`Comparer`].
pub trait AsyncComparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> impl Future<Output = Ordering>;
}

/// Ordering as defined by [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultOrder;

impl<T: Ord + ?Sized> Comparer<T> for DefaultOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> AsyncComparer<T> for DefaultOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> impl Future<Output = Ordering> {
        ready(a.cmp(b))
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl<T: ?Sized, F, Fut> AsyncComparer<T> for F
where
    F: Fn(&T, &T) -> Fut,
    Fut: Future<Output = Ordering>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> impl Future<Output = Ordering> {
        self(a, b)
    }
}

impl<T: ?Sized, C> AsyncComparer<T> for Immediate<C>
where
    C: Comparer<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> impl Future<Output = Ordering> {
        ready(self.0.compare(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(Comparer::compare(&DefaultOrder, &1, &2), Ordering::Less);
        assert_eq!(Comparer::compare(&DefaultOrder, "b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure_order() {
        let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(Comparer::compare(&by_length, &"aa", &"b"), Ordering::Greater);
        assert_eq!(Comparer::compare(&by_length, &"a", &"b"), Ordering::Equal);
    }
}
