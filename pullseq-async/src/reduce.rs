//! Terminal reducers for suspending sequences.

use std::cmp::Ordering;
use std::future::Future;
use std::hash::Hash;
use std::ops::Add;

use futures::stream::StreamExt;
use indexmap::IndexMap;
use num_traits::ToPrimitive;
use pullseq::{Error, Result};
use pullseq_compare::{AsyncComparer, AsyncEqualityComparer, AsyncKeySelector, DefaultOrder};

use crate::enumerable::AsyncEnumerable;

fn checked_index(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::InvalidArgument {
        name: "index",
        reason: "index must not be negative",
    })
}

/// Reducers available on every suspending sequence. Each one starts its
/// own traversal and resolves once it has pulled what it needs.
#[allow(async_fn_in_trait)]
pub trait AsyncReduce: AsyncEnumerable {
    async fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect().await
    }

    /// Group elements by key, keeping first-seen key order.
    async fn to_map<K>(&self, key: K) -> IndexMap<K::Key, Vec<Self::Item>>
    where
        K: AsyncKeySelector<Self::Item>,
        K::Key: Hash + Eq,
    {
        let mut map: IndexMap<K::Key, Vec<Self::Item>> = IndexMap::new();
        let mut cursor = self.cursor();
        while let Some(item) = cursor.next().await {
            map.entry(key.key(&item).await).or_default().push(item);
        }
        map
    }

    async fn aggregate<A, F, Fut>(&self, seed: A, accumulator: F) -> A
    where
        F: Fn(A, Self::Item) -> Fut,
        Fut: Future<Output = A>,
    {
        let mut cursor = self.cursor();
        let mut total = seed;
        while let Some(item) = cursor.next().await {
            total = accumulator(total, item).await;
        }
        total
    }

    async fn aggregate_with<A, R, F, Fut, G>(&self, seed: A, accumulator: F, result: G) -> R
    where
        F: Fn(A, Self::Item) -> Fut,
        Fut: Future<Output = A>,
        G: FnOnce(A) -> R,
    {
        result(self.aggregate(seed, accumulator).await)
    }

    /// Fold without a seed; the first element takes its place.
    async fn reduce<F, Fut>(&self, accumulator: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Fut,
        Fut: Future<Output = Self::Item>,
    {
        let mut cursor = self.cursor();
        let mut total = cursor.next().await.ok_or(Error::EmptySequence)?;
        while let Some(item) = cursor.next().await {
            total = accumulator(total, item).await;
        }
        Ok(total)
    }

    async fn count(&self) -> usize {
        self.cursor().count().await
    }

    async fn count_where<P, Fut>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut cursor = self.cursor();
        let mut count = 0;
        while let Some(item) = cursor.next().await {
            if predicate(&item).await {
                count += 1;
            }
        }
        count
    }

    async fn sum<F, Fut>(&self, selector: F) -> Result<Fut::Output>
    where
        F: Fn(&Self::Item) -> Fut,
        Fut: Future,
        Fut::Output: Add<Output = Fut::Output>,
    {
        let mut cursor = self.cursor();
        let first = cursor.next().await.ok_or(Error::EmptySequence)?;
        let mut total = selector(&first).await;
        while let Some(item) = cursor.next().await {
            total = total + selector(&item).await;
        }
        Ok(total)
    }

    /// Arithmetic mean of the awaited values. A value that has no `f64`
    /// form is [`Error::InvalidArgument`].
    async fn average<F, Fut>(&self, selector: F) -> Result<f64>
    where
        F: Fn(&Self::Item) -> Fut,
        Fut: Future,
        Fut::Output: ToPrimitive,
    {
        let mut cursor = self.cursor();
        let mut total = 0.0;
        let mut count = 0_usize;
        while let Some(item) = cursor.next().await {
            total += selector(&item).await
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

    async fn first(&self) -> Result<Self::Item> {
        self.cursor().next().await.ok_or(Error::EmptySequence)
    }

    /// The first element accepted by `predicate`. An empty sequence is
    /// [`Error::EmptySequence`]; a sequence without a match is
    /// [`Error::NoMatch`].
    async fn first_where<P, Fut>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut cursor = self.cursor();
        let mut any = false;
        while let Some(item) = cursor.next().await {
            any = true;
            if predicate(&item).await {
                return Ok(item);
            }
        }
        Err(if any { Error::NoMatch } else { Error::EmptySequence })
    }

    async fn first_or(&self, default: Self::Item) -> Self::Item {
        self.cursor().next().await.unwrap_or(default)
    }

    async fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.cursor().next().await.unwrap_or_default()
    }

    async fn first_where_or<P, Fut>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.first_where(predicate).await.unwrap_or(default)
    }

    async fn last(&self) -> Result<Self::Item> {
        let mut cursor = self.cursor();
        let mut last = None;
        while let Some(item) = cursor.next().await {
            last = Some(item);
        }
        last.ok_or(Error::EmptySequence)
    }

    async fn last_where<P, Fut>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut cursor = self.cursor();
        let mut any = false;
        let mut last = None;
        while let Some(item) = cursor.next().await {
            any = true;
            if predicate(&item).await {
                last = Some(item);
            }
        }
        match (any, last) {
            (false, _) => Err(Error::EmptySequence),
            (true, None) => Err(Error::NoMatch),
            (true, Some(item)) => Ok(item),
        }
    }

    async fn last_or(&self, default: Self::Item) -> Self::Item {
        self.last().await.unwrap_or(default)
    }

    async fn last_where_or<P, Fut>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.last_where(predicate).await.unwrap_or(default)
    }

    async fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.last().await.unwrap_or_default()
    }

    /// The only element. Stops pulling at the second element.
    async fn single(&self) -> Result<Self::Item> {
        let mut cursor = self.cursor();
        let one = cursor.next().await.ok_or(Error::EmptySequence)?;
        if cursor.next().await.is_some() {
            return Err(Error::AmbiguousMatch);
        }
        Ok(one)
    }

    async fn single_where<P, Fut>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut cursor = self.cursor();
        let mut any = false;
        let mut found = None;
        while let Some(item) = cursor.next().await {
            any = true;
            if predicate(&item).await {
                if found.is_some() {
                    return Err(Error::AmbiguousMatch);
                }
                found = Some(item);
            }
        }
        match (any, found) {
            (false, _) => Err(Error::EmptySequence),
            (true, None) => Err(Error::NoMatch),
            (true, Some(item)) => Ok(item),
        }
    }

    /// The only element, or `default` for an empty sequence. More than one
    /// element is still an error.
    async fn single_or(&self, default: Self::Item) -> Result<Self::Item> {
        let mut cursor = self.cursor();
        match (cursor.next().await, cursor.next().await) {
            (None, _) => Ok(default),
            (Some(one), None) => Ok(one),
            (Some(_), Some(_)) => Err(Error::AmbiguousMatch),
        }
    }

    async fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        self.single_or(Self::Item::default()).await
    }

    async fn element_at(&self, index: isize) -> Result<Self::Item> {
        let index = checked_index(index)?;
        self.cursor()
            .skip(index)
            .next()
            .await
            .ok_or(Error::InvalidArgument {
                name: "index",
                reason: "index is beyond the end of the sequence",
            })
    }

    /// Like [`element_at`](AsyncReduce::element_at), but an index beyond
    /// the end yields `default`. A negative index is still an error.
    async fn element_at_or(&self, index: isize, default: Self::Item) -> Result<Self::Item> {
        let index = checked_index(index)?;
        Ok(self.cursor().skip(index).next().await.unwrap_or(default))
    }

    async fn element_at_or_default(&self, index: isize) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        self.element_at_or(index, Self::Item::default()).await
    }

    async fn contains<C>(&self, item: &Self::Item, comparer: C) -> bool
    where
        C: AsyncEqualityComparer<Self::Item>,
    {
        let mut cursor = self.cursor();
        while let Some(candidate) = cursor.next().await {
            if comparer.equals(&candidate, item).await {
                return true;
            }
        }
        false
    }

    async fn sequence_equal<O, C>(&self, other: &O, comparer: C) -> bool
    where
        O: AsyncEnumerable<Item = Self::Item>,
        C: AsyncEqualityComparer<Self::Item>,
    {
        let mut left = self.cursor();
        let mut right = other.cursor();
        loop {
            match (left.next().await, right.next().await) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if !comparer.equals(&a, &b).await {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    async fn min(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.min_by(DefaultOrder).await
    }

    /// The smallest element under `comparer`; the first one wins a tie.
    async fn min_by<C>(&self, comparer: C) -> Result<Self::Item>
    where
        C: AsyncComparer<Self::Item>,
    {
        let mut cursor = self.cursor();
        let mut current = cursor.next().await.ok_or(Error::EmptySequence)?;
        while let Some(candidate) = cursor.next().await {
            if comparer.compare(&candidate, &current).await == Ordering::Less {
                current = candidate;
            }
        }
        Ok(current)
    }

    async fn max(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.max_by(DefaultOrder).await
    }

    /// The largest element under `comparer`; the first one wins a tie.
    async fn max_by<C>(&self, comparer: C) -> Result<Self::Item>
    where
        C: AsyncComparer<Self::Item>,
    {
        let mut cursor = self.cursor();
        let mut current = cursor.next().await.ok_or(Error::EmptySequence)?;
        while let Some(candidate) = cursor.next().await {
            if comparer.compare(&candidate, &current).await == Ordering::Greater {
                current = candidate;
            }
        }
        Ok(current)
    }
}

impl<E: AsyncEnumerable + ?Sized> AsyncReduce for E {}
