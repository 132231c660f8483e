use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use pullseq_compare::{EqualityComparer, KeySelector};
use tracing::trace;

use crate::buffer::{Admit, SeenSet};
use crate::enumerable::Enumerable;

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

impl<S, K, C> Enumerable for Distinct<S, K, C>
where
    S: Enumerable,
    K: KeySelector<S::Item>,
    C: EqualityComparer<K::Key>,
{
    type Item = S::Item;
    type Cursor<'a>
        = SetCursor<'a, S::Cursor<'a>, std::iter::Empty<S::Item>, K, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SetCursor::new(self.source.cursor(), None, Admit::Unseen, &self.key, &self.comparer)
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

impl<S, O, K, C> Enumerable for Except<S, O, K, C>
where
    S: Enumerable,
    O: Enumerable<Item = S::Item>,
    K: KeySelector<S::Item>,
    C: EqualityComparer<K::Key>,
{
    type Item = S::Item;
    type Cursor<'a>
        = SetCursor<'a, S::Cursor<'a>, O::Cursor<'a>, K, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SetCursor::new(
            self.source.cursor(),
            Some(self.other.cursor()),
            Admit::Unseen,
            &self.key,
            &self.comparer,
        )
    }
}

/// Keeps elements whose key matches an entry of a second sequence. A
/// matched entry is used up, so it matches at most one element.
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

impl<S, O, K, C> Enumerable for Intersect<S, O, K, C>
where
    S: Enumerable,
    O: Enumerable<Item = S::Item>,
    K: KeySelector<S::Item>,
    C: EqualityComparer<K::Key>,
{
    type Item = S::Item;
    type Cursor<'a>
        = SetCursor<'a, S::Cursor<'a>, O::Cursor<'a>, K, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SetCursor::new(
            self.source.cursor(),
            Some(self.other.cursor()),
            Admit::Seen,
            &self.key,
            &self.comparer,
        )
    }
}

/// Yields the distinct elements of the upstream sequence, then those of
/// a second sequence whose key was not yielded yet, from either side.
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

impl<S, O, K, C> Enumerable for Union<S, O, K, C>
where
    S: Enumerable,
    O: Enumerable<Item = S::Item>,
    K: KeySelector<S::Item>,
    C: EqualityComparer<K::Key>,
{
    type Item = S::Item;
    type Cursor<'a>
        = SetCursor<
        'a,
        std::iter::Chain<S::Cursor<'a>, O::Cursor<'a>>,
        std::iter::Empty<S::Item>,
        K,
        C,
    >
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        // one returned-set spans both sides
        SetCursor::new(
            self.source.cursor().chain(self.other.cursor()),
            None,
            Admit::Unseen,
            &self.key,
            &self.comparer,
        )
    }
}

/// The cursor shared by the set-algebra operators.
///
/// On the first pull the seen-set is seeded from the second sequence, if
/// there is one. After that every upstream element is keyed, the set is
/// scanned for the key, and the [`Admit`] policy decides whether the
/// element is emitted and how the set changes.
pub struct SetCursor<'a, I, P, K, C>
where
    I: Iterator,
    K: KeySelector<I::Item>,
{
    upstream: I,
    seed: Option<P>,
    seen: SeenSet<K::Key>,
    admit: Admit,
    key: &'a K,
    comparer: &'a C,
}

impl<'a, I, P, K, C> SetCursor<'a, I, P, K, C>
where
    I: Iterator,
    K: KeySelector<I::Item>,
{
    fn new(upstream: I, seed: Option<P>, admit: Admit, key: &'a K, comparer: &'a C) -> Self {
        Self {
            upstream,
            seed,
            seen: SeenSet::new(),
            admit,
            key,
            comparer,
        }
    }
}

impl<I, P, K, C> Iterator for SetCursor<'_, I, P, K, C>
where
    I: Iterator,
    P: Iterator<Item = I::Item>,
    K: KeySelector<I::Item>,
    C: EqualityComparer<K::Key>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(seed) = self.seed.take() {
            for item in seed {
                self.seen.insert(self.key.key(&item));
            }
            trace!(seeded = self.seen.len(), "seen-set seeded from second sequence");
        }
        for item in self.upstream.by_ref() {
            let key = self.key.key(&item);
            let found = self.seen.position(&key, self.comparer);
            if self.admit.apply(&mut self.seen, key, found) {
                return Some(item);
            }
        }
        None
    }
}

/// [`Distinct`] for elements whose equality is `Eq` and agrees with
/// `Hash`; membership is a hash lookup instead of a scan.
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

impl<S> Enumerable for DistinctHashed<S>
where
    S: Enumerable,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctHashedCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctHashedCursor {
            upstream: self.source.cursor(),
            seen: HashSet::new(),
        }
    }
}

pub struct DistinctHashedCursor<C: Iterator> {
    upstream: C,
    seen: HashSet<C::Item>,
}

impl<C> Iterator for DistinctHashedCursor<C>
where
    C: Iterator,
    C::Item: Clone + Eq + Hash,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let seen = &mut self.seen;
        self.upstream
            .by_ref()
            .find(|item| seen.insert(item.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::enumerable::{Enumerable, EnumerableExt};
    use crate::source::{from_fn, from_vec};

    #[test]
    fn test_seed_waits_for_first_pull() {
        let seeded = &Cell::new(false);
        let other = from_fn(move || vec![2].into_iter().inspect(move |_| seeded.set(true)));
        let difference = from_vec(vec![1, 2, 3]).except(&other);
        let mut cursor = difference.cursor();
        assert!(!seeded.get());
        assert_eq!(cursor.next(), Some(1));
        assert!(seeded.get());
        assert_eq!(cursor.collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_union_shares_one_seen_set() {
        let left = from_vec(vec![1, 1, 2]);
        let right = from_vec(vec![2, 3, 3, 1]);
        let merged = left.union(right);
        assert_eq!(merged.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
