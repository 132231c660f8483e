//! Terminal reducers: consumers that materialize or fold a sequence.

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Add;

use indexmap::IndexMap;
use num_traits::ToPrimitive;
use pullseq_compare::{Comparer, DefaultOrder, EqualityComparer};

use crate::enumerable::Enumerable;
use crate::error::{Error, Result};

fn negative_index() -> Error {
    Error::InvalidArgument {
        name: "index",
        reason: "index must not be negative",
    }
}

/// Reducers available on every sequence. Each one starts its own
/// traversal.
pub trait Reduce: Enumerable {
    /// Materialize the sequence.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect()
    }

    /// Group elements by key. Keys keep the order in which they were first
    /// seen, and every group keeps the order of its elements.
    fn to_map<K, F>(&self, key: F) -> IndexMap<K, Vec<Self::Item>>
    where
        K: Hash + Eq,
        F: Fn(&Self::Item) -> K,
    {
        let mut map: IndexMap<K, Vec<Self::Item>> = IndexMap::new();
        for item in self.cursor() {
            map.entry(key(&item)).or_default().push(item);
        }
        map
    }

    fn aggregate<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: Fn(A, Self::Item) -> A,
    {
        self.cursor().fold(seed, accumulator)
    }

    fn aggregate_with<A, R, F, G>(&self, seed: A, accumulator: F, result: G) -> R
    where
        F: Fn(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        result(self.aggregate(seed, accumulator))
    }

    /// Fold without a seed; the first element takes its place.
    fn reduce<F>(&self, accumulator: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.cursor();
        let first = cursor.next().ok_or(Error::EmptySequence)?;
        Ok(cursor.fold(first, accumulator))
    }

    fn count(&self) -> usize {
        self.cursor().count()
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.cursor().filter(|item| predicate(item)).count()
    }

    fn sum<N, F>(&self, selector: F) -> Result<N>
    where
        N: Add<Output = N>,
        F: Fn(&Self::Item) -> N,
    {
        let mut values = self.cursor().map(|item| selector(&item));
        let first = values.next().ok_or(Error::EmptySequence)?;
        Ok(values.fold(first, |total, value| total + value))
    }

    /// Arithmetic mean of the selected values. A value that has no `f64`
    /// form is [`Error::InvalidArgument`].
    fn average<N, F>(&self, selector: F) -> Result<f64>
    where
        N: ToPrimitive,
        F: Fn(&Self::Item) -> N,
    {
        let mut total = 0.0;
        let mut count = 0_usize;
        for item in self.cursor() {
            total += selector(&item)
                .to_f64()
                .ok_or(Error::InvalidArgument {
                    name: "selector",
                    reason: "produced a value with no f64 form",
                })?;
            count += 1;
        }
        if count == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(total / count as f64)
    }

    fn first(&self) -> Result<Self::Item> {
        self.cursor().next().ok_or(Error::EmptySequence)
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor().peekable();
        if cursor.peek().is_none() {
            return Err(Error::EmptySequence);
        }
        cursor.find(|item| predicate(item)).ok_or(Error::NoMatch)
    }

    fn first_or(&self, default: Self::Item) -> Self::Item {
        self.cursor().next().unwrap_or(default)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.cursor().next().unwrap_or_default()
    }

    fn first_where_or<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.cursor().find(|item| predicate(item)).unwrap_or(default)
    }

    fn last(&self) -> Result<Self::Item> {
        self.cursor().last().ok_or(Error::EmptySequence)
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut any = false;
        let mut last = None;
        for item in self.cursor() {
            any = true;
            if predicate(&item) {
                last = Some(item);
            }
        }
        match (any, last) {
            (false, _) => Err(Error::EmptySequence),
            (true, None) => Err(Error::NoMatch),
            (true, Some(item)) => Ok(item),
        }
    }

    fn last_or(&self, default: Self::Item) -> Self::Item {
        self.cursor().last().unwrap_or(default)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.cursor().last().unwrap_or_default()
    }

    fn last_where_or<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.cursor()
            .filter(|item| predicate(item))
            .last()
            .unwrap_or(default)
    }

    /// The only element. Stops pulling at the second element.
    fn single(&self) -> Result<Self::Item> {
        let mut cursor = self.cursor();
        let one = cursor.next().ok_or(Error::EmptySequence)?;
        if cursor.next().is_some() {
            return Err(Error::AmbiguousMatch);
        }
        Ok(one)
    }

    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor().peekable();
        if cursor.peek().is_none() {
            return Err(Error::EmptySequence);
        }
        let mut matches = cursor.filter(|item| predicate(item));
        let one = matches.next().ok_or(Error::NoMatch)?;
        if matches.next().is_some() {
            return Err(Error::AmbiguousMatch);
        }
        Ok(one)
    }

    /// The only element, or `default` for an empty sequence. More than one
    /// element is still an error.
    fn single_or(&self, default: Self::Item) -> Result<Self::Item> {
        let mut cursor = self.cursor();
        match (cursor.next(), cursor.next()) {
            (None, _) => Ok(default),
            (Some(one), None) => Ok(one),
            (Some(_), Some(_)) => Err(Error::AmbiguousMatch),
        }
    }

    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        self.single_or(Self::Item::default())
    }

    fn element_at(&self, index: isize) -> Result<Self::Item> {
        let index = usize::try_from(index).map_err(|_| negative_index())?;
        self.cursor().nth(index).ok_or(Error::InvalidArgument {
            name: "index",
            reason: "index is beyond the end of the sequence",
        })
    }

    fn element_at_or(&self, index: isize, default: Self::Item) -> Result<Self::Item> {
        let index = usize::try_from(index).map_err(|_| negative_index())?;
        Ok(self.cursor().nth(index).unwrap_or(default))
    }

    fn element_at_or_default(&self, index: isize) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        self.element_at_or(index, Self::Item::default())
    }

    fn contains<C>(&self, item: &Self::Item, comparer: C) -> bool
    where
        C: EqualityComparer<Self::Item>,
    {
        self.cursor().any(|candidate| comparer.equals(&candidate, item))
    }

    /// Whether both sequences have the same length and pairwise equal
    /// elements.
    fn sequence_equal<O, C>(&self, other: &O, comparer: C) -> bool
    where
        O: Enumerable<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        let mut left = self.cursor();
        let mut right = other.cursor();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if comparer.equals(&a, &b) => continue,
                _ => return false,
            }
        }
    }

    /// The smallest element; the first one wins a tie.
    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.min_by(DefaultOrder)
    }

    fn min_by<C>(&self, comparer: C) -> Result<Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        extreme(self.cursor(), |candidate, current| {
            comparer.compare(candidate, current) == Ordering::Less
        })
    }

    /// The largest element; the first one wins a tie.
    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.max_by(DefaultOrder)
    }

    fn max_by<C>(&self, comparer: C) -> Result<Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        extreme(self.cursor(), |candidate, current| {
            comparer.compare(candidate, current) == Ordering::Greater
        })
    }
}

impl<E: Enumerable + ?Sized> Reduce for E {}

fn extreme<T>(
    mut cursor: impl Iterator<Item = T>,
    replaces: impl Fn(&T, &T) -> bool,
) -> Result<T> {
    let mut current = cursor.next().ok_or(Error::EmptySequence)?;
    for candidate in cursor {
        if replaces(&candidate, &current) {
            current = candidate;
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from_vec};

    struct Opaque;

    impl ToPrimitive for Opaque {
        fn to_i64(&self) -> Option<i64> {
            None
        }

        fn to_u64(&self) -> Option<u64> {
            None
        }
    }

    #[test]
    fn test_average_rejects_value_without_f64() {
        let numbers = from_vec(vec![1, 2]);
        assert!(matches!(
            numbers.average(|_| Opaque),
            Err(Error::InvalidArgument { name: "selector", .. })
        ));
        assert_eq!(numbers.average(|n| *n), Ok(1.5));
    }

    #[test]
    fn test_reduce_empty() {
        assert_eq!(empty::<i32>().reduce(|a, b| a + b), Err(Error::EmptySequence));
        assert_eq!(from_vec(vec![1, 2, 3]).reduce(|a, b| a + b), Ok(6));
    }

    #[test]
    fn test_first_where_distinguishes_empty_from_no_match() {
        let numbers = from_vec(vec![1, 3]);
        assert_eq!(numbers.first_where(|n| n % 2 == 0), Err(Error::NoMatch));
        assert_eq!(
            empty::<i32>().first_where(|n| n % 2 == 0),
            Err(Error::EmptySequence)
        );
    }

    #[test]
    fn test_single() {
        assert_eq!(from_vec(vec![7]).single(), Ok(7));
        assert_eq!(from_vec(vec![7, 8]).single(), Err(Error::AmbiguousMatch));
        assert_eq!(from_vec(vec![1, 2, 4]).single_where(|n| n % 2 == 1), Ok(1));
        assert_eq!(
            from_vec(vec![1, 2, 4]).single_where(|n| n % 2 == 0),
            Err(Error::AmbiguousMatch)
        );
        assert_eq!(empty::<i32>().single_or_default(), Ok(0));
    }

    #[test]
    fn test_min_max_first_wins() {
        let words = from_vec(vec!["bb", "a", "c", "dd"]);
        let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(words.min_by(by_length), Ok("a"));
        assert_eq!(words.max_by(by_length), Ok("bb"));
        assert_eq!(from_vec(vec![3, 1, 2]).min(), Ok(1));
        assert_eq!(empty::<i32>().max(), Err(Error::EmptySequence));
    }
}
