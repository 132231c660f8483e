use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::buffer::{Admit, SeenSet};
use pullseq_compare::{AsyncEqualityComparer, AsyncKeySelector};
use tracing::trace;

use crate::enumerable::AsyncEnumerable;

/// Position of the first entry of `seen` equal to `key`. Each comparison
/// is a suspension point, and the scan stops at the first match.
async fn position<K, C>(seen: &SeenSet<K>, key: &K, comparer: &C) -> Option<usize>
where
    C: AsyncEqualityComparer<K>,
{
    for (index, entry) in seen.entries().iter().enumerate() {
        if comparer.equals(entry, key).await {
            return Some(index);
        }
    }
    None
}

/// The traversal shared by the set-algebra operators: seed the seen-set
/// from `seed` on the first pull, then let `admit` decide for every
/// upstream element.
fn scan<'a, T, K, C>(
    upstream: LocalBoxStream<'a, T>,
    seed: Option<LocalBoxStream<'a, T>>,
    admit: Admit,
    key: &'a K,
    comparer: &'a C,
) -> LocalBoxStream<'a, T>
where
    T: 'a,
    K: AsyncKeySelector<T>,
    C: AsyncEqualityComparer<K::Key>,
{
    Box::pin(stream! {
        let mut seen = SeenSet::new();
        if let Some(mut seed) = seed {
            while let Some(item) = seed.next().await {
                seen.insert(key.key(&item).await);
            }
            trace!(seeded = seen.len(), "seen-set seeded from second sequence");
        }
        let mut upstream = upstream;
        while let Some(item) = upstream.next().await {
            let item_key = key.key(&item).await;
            let found = position(&seen, &item_key, comparer).await;
            if admit.apply(&mut seen, item_key, found) {
                yield item;
            }
        }
    })
}

/// Drops elements whose key equals the key of an earlier element.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Distinct<S, K, C> {
    source: S,
    key: K,
    comparer: C,
}

impl<S, K, C> Distinct<S, K, C> {
    pub(crate) fn new(source: S, key: K, comparer: C) -> Self {
        Self {
            source,
            key,
            comparer,
        }
    }
}

impl<S, K, C> AsyncEnumerable for Distinct<S, K, C>
where
    S: AsyncEnumerable,
    K: AsyncKeySelector<S::Item>,
    C: AsyncEqualityComparer<K::Key>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        scan(
            self.source.cursor(),
            None,
            Admit::Unseen,
            &self.key,
            &self.comparer,
        )
    }
}

/// Drops elements whose key occurs in a second sequence, or that repeat
/// the key of an element already yielded.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Except<S, O, K, C> {
    source: S,
    other: O,
    key: K,
    comparer: C,
}

impl<S, O, K, C> Except<S, O, K, C> {
    pub(crate) fn new(source: S, other: O, key: K, comparer: C) -> Self {
        Self {
            source,
            other,
            key,
            comparer,
        }
    }
}

impl<S, O, K, C> AsyncEnumerable for Except<S, O, K, C>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable<Item = S::Item>,
    K: AsyncKeySelector<S::Item>,
    C: AsyncEqualityComparer<K::Key>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        scan(
            self.source.cursor(),
            Some(self.other.cursor()),
            Admit::Unseen,
            &self.key,
            &self.comparer,
        )
    }
}

/// Keeps elements whose key matches an entry of a second sequence; every
/// entry matches at most once.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Intersect<S, O, K, C> {
    source: S,
    other: O,
    key: K,
    comparer: C,
}

impl<S, O, K, C> Intersect<S, O, K, C> {
    pub(crate) fn new(source: S, other: O, key: K, comparer: C) -> Self {
        Self {
            source,
            other,
            key,
            comparer,
        }
    }
}

impl<S, O, K, C> AsyncEnumerable for Intersect<S, O, K, C>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable<Item = S::Item>,
    K: AsyncKeySelector<S::Item>,
    C: AsyncEqualityComparer<K::Key>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        scan(
            self.source.cursor(),
            Some(self.other.cursor()),
            Admit::Seen,
            &self.key,
            &self.comparer,
        )
    }
}

/// Yields the distinct elements of the upstream sequence, then those of a
/// second sequence whose key was not yielded yet.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Union<S, O, K, C> {
    source: S,
    other: O,
    key: K,
    comparer: C,
}

impl<S, O, K, C> Union<S, O, K, C> {
    pub(crate) fn new(source: S, other: O, key: K, comparer: C) -> Self {
        Self {
            source,
            other,
            key,
            comparer,
        }
    }
}

impl<S, O, K, C> AsyncEnumerable for Union<S, O, K, C>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable<Item = S::Item>,
    K: AsyncKeySelector<S::Item>,
    C: AsyncEqualityComparer<K::Key>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        let both = self
            .source
            .cursor()
            .chain(self.other.cursor())
            .boxed_local();
        scan(both, None, Admit::Unseen, &self.key, &self.comparer)
    }
}

/// [`Distinct`] through a hash set, for elements whose `Eq` agrees with
/// `Hash`.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct DistinctHashed<S> {
    source: S,
}

impl<S> DistinctHashed<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> AsyncEnumerable for DistinctHashed<S>
where
    S: AsyncEnumerable,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut seen = HashSet::new();
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                if seen.insert(item.clone()) {
                    yield item;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::prelude::*;

    #[test]
    fn test_suspending_comparer() {
        let readings = crate::from_vec(vec![1.0, 1.04, 2.5, 2.46, 1.01]);
        let close = |a: &f64, b: &f64| {
            let close = (a - b).abs() < 0.1;
            async move { close }
        };
        assert_eq!(
            block_on(readings.distinct_with(close).to_vec()),
            vec![1.0, 2.5]
        );
    }

    #[test]
    fn test_immediate_key_selector() {
        let words = crate::from_vec(vec!["Apple", "avocado", "Banana", "blueberry"]);
        let banned = crate::from_vec(vec!["b"]);
        let first_letter = Immediate(|word: &&str| word.chars().next().map(|c| c.to_ascii_lowercase()));
        let kept = words.except_by(banned, first_letter);
        assert_eq!(block_on(kept.to_vec()), vec!["Apple"]);
    }
}
