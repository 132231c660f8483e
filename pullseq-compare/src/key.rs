use std::future::{ready, Future};

use crate::Immediate;

/// Maps an element to the key used for equality or ordering.
pub trait KeySelector<T: ?Sized> {
    type Key;

    fn key(&self, item: &T) -> Self::Key;
}

/// Suspending counterpart of [`KeySelector`].
pub trait AsyncKeySelector<T: ?Sized> {
    type Key;

    fn key(&self, item: &T) -> impl Future<Output = Self::Key>;
}

/// The element is its own key.
///
/// Operators without a "by" form use this selector, so the keyed and
/// plain variants share a single algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> KeySelector<T> for Identity {
    type Key = T;

    #[inline]
    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

impl<T: Clone> AsyncKeySelector<T> for Identity {
    type Key = T;

    #[inline]
    fn key(&self, item: &T) -> impl Future<Output = T> {
        ready(item.clone())
    }
}

impl<T: ?Sized, K, F> KeySelector<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key(&self, item: &T) -> K {
        self(item)
    }
}

impl<T: ?Sized, F, Fut> AsyncKeySelector<T> for F
where
    F: Fn(&T) -> Fut,
    Fut: Future,
{
    type Key = Fut::Output;

    #[inline]
    fn key(&self, item: &T) -> impl Future<Output = Fut::Output> {
        self(item)
    }
}

impl<T: ?Sized, S> AsyncKeySelector<T> for Immediate<S>
where
    S: KeySelector<T>,
{
    type Key = S::Key;

    #[inline]
    fn key(&self, item: &T) -> impl Future<Output = S::Key> {
        ready(self.0.key(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_identity_key() {
        assert_eq!(KeySelector::key(&Identity, &"x".to_string()), "x");
    }

    #[test]
    fn test_closure_key() {
        let length = |s: &&str| s.len();
        assert_eq!(KeySelector::key(&length, &"four"), 4);
    }

    #[test]
    fn test_async_keys() {
        assert_eq!(block_on(AsyncKeySelector::key(&Identity, &3)), 3);
        let double = |x: &i32| std::future::ready(x * 2);
        assert_eq!(block_on(AsyncKeySelector::key(&double, &3)), 6);
        let lifted = Immediate(|x: &i32| x + 1);
        assert_eq!(block_on(AsyncKeySelector::key(&lifted, &3)), 4);
    }
}
