use std::future::{Future, Ready};
use std::hash::Hash;

use futures::stream::{LocalBoxStream, Stream};
use pullseq::buffer::clamp_count;
use pullseq::operator::Side;
use pullseq::{Error, Kind, Result, TypeTest, Value};
use pullseq_compare::{AsyncEqualityComparer, AsyncKeySelector, DefaultEquality, Identity};

use crate::operator::{
    Attach, Chunk, Concat, DefaultIfEmpty, Distinct, DistinctHashed, Except, Filter, ForEach,
    Intersect, Map, OfKind, OfType, Reverse, SelectMany, Skip, SkipLast, Take, TakeLast, Union,
    Zip, Zip3,
};

/// The suspending pull protocol: a sequence hands out fresh cursors, and
/// advancing a cursor may suspend.
///
/// As in the immediate world, requesting a cursor never mutates the
/// sequence and nothing is pulled before the cursor is first polled.
pub trait AsyncEnumerable {
    type Item;

    /// Begin a traversal.
    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Self::Item>
    where
        Self::Item: 'a;
}

impl<E> AsyncEnumerable for &E
where
    E: AsyncEnumerable + ?Sized,
{
    type Item = E::Item;

    #[inline]
    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, E::Item>
    where
        Self::Item: 'a,
    {
        (**self).cursor()
    }
}

/// The element type of the inner streams a `select_many` selector
/// resolves to.
pub type InnerItem<Fut> = <<Fut as Future>::Output as Stream>::Item;

fn inner_element<T, U>(_outer: &T, inner: U) -> Ready<U> {
    std::future::ready(inner)
}

/// Builder methods available on every suspending sequence.
///
/// Every callback returns a future, and awaiting it is a suspension point
/// of the traversal. Callbacks run in upstream order, one at a time.
pub trait AsyncEnumerableExt: AsyncEnumerable + Sized {
    /// Keep the elements accepted by `predicate`.
    fn filter<P, Fut>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        Filter::new(self, predicate)
    }

    /// Project every element, together with its index.
    fn map<F, Fut>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item, usize) -> Fut,
        Fut: Future,
    {
        Map::new(self, selector)
    }

    /// Flatten the inner streams the selector resolves to.
    fn select_many<F, Fut>(
        self,
        selector: F,
    ) -> SelectMany<Self, F, fn(&Self::Item, InnerItem<Fut>) -> Ready<InnerItem<Fut>>>
    where
        F: Fn(&Self::Item, usize) -> Fut,
        Fut: Future,
        Fut::Output: Stream,
    {
        SelectMany::new(
            self,
            selector,
            inner_element as fn(&Self::Item, InnerItem<Fut>) -> Ready<InnerItem<Fut>>,
        )
    }

    /// Flatten the inner streams, combining each inner element with the
    /// outer element it came from.
    fn select_many_with<F, Fut, R, RFut>(self, selector: F, result: R) -> SelectMany<Self, F, R>
    where
        F: Fn(&Self::Item, usize) -> Fut,
        Fut: Future,
        Fut::Output: Stream,
        R: Fn(&Self::Item, InnerItem<Fut>) -> RFut,
        RFut: Future,
    {
        SelectMany::new(self, selector, result)
    }

    fn append(self, element: Self::Item) -> Attach<Self, Self::Item> {
        Attach::new(self, element, Side::Back)
    }

    fn prepend(self, element: Self::Item) -> Attach<Self, Self::Item> {
        Attach::new(self, element, Side::Front)
    }

    fn concat<O>(self, other: O) -> Concat<Self, O>
    where
        O: AsyncEnumerable<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Yield the elements back to front. Drains upstream before the first
    /// element is produced.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self, Self::Item> {
        DefaultIfEmpty::new(self, default)
    }

    fn default_if_empty_or_default(self) -> DefaultIfEmpty<Self, Self::Item>
    where
        Self::Item: Default,
    {
        DefaultIfEmpty::new(self, Self::Item::default())
    }

    fn of_type<U>(self) -> OfType<Self, U>
    where
        Self::Item: TypeTest<U>,
    {
        OfType::new(self)
    }

    fn of_kind(self, kind: Kind) -> OfKind<Self>
    where
        Self: AsyncEnumerable<Item = Value>,
    {
        OfKind::new(self, kind)
    }

    /// Discard the first `count` elements. Negative counts discard
    /// nothing.
    fn skip(self, count: isize) -> Skip<Self> {
        Skip::new(self, clamp_count(count))
    }

    fn skip_last(self, count: isize) -> SkipLast<Self> {
        SkipLast::new(self, clamp_count(count))
    }

    /// Yield at most the first `count` elements. The upstream cursor is
    /// dropped as soon as the last of them has been pulled.
    fn take(self, count: isize) -> Take<Self> {
        Take::new(self, clamp_count(count))
    }

    fn take_last(self, count: isize) -> TakeLast<Self> {
        TakeLast::new(self, clamp_count(count))
    }

    /// Group consecutive elements into batches of `size`. A `size` below
    /// one is rejected before anything is pulled.
    fn chunk(self, size: isize) -> Result<Chunk<Self>> {
        if size <= 0 {
            return Err(Error::InvalidArgument {
                name: "size",
                reason: "chunk size must be greater than zero",
            });
        }
        Ok(Chunk::new(self, size as usize))
    }

    fn distinct(self) -> Distinct<Self, Identity, DefaultEquality>
    where
        Self::Item: Clone + PartialEq,
    {
        Distinct::new(self, Identity, DefaultEquality)
    }

    fn distinct_with<C>(self, comparer: C) -> Distinct<Self, Identity, C>
    where
        Self::Item: Clone,
        C: AsyncEqualityComparer<Self::Item>,
    {
        Distinct::new(self, Identity, comparer)
    }

    fn distinct_by<K>(self, key: K) -> Distinct<Self, K, DefaultEquality>
    where
        K: AsyncKeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Distinct::new(self, key, DefaultEquality)
    }

    fn distinct_by_with<K, C>(self, key: K, comparer: C) -> Distinct<Self, K, C>
    where
        K: AsyncKeySelector<Self::Item>,
        C: AsyncEqualityComparer<K::Key>,
    {
        Distinct::new(self, key, comparer)
    }

    /// Hash-based [`distinct`](AsyncEnumerableExt::distinct) for elements
    /// whose `Eq` agrees with `Hash`.
    fn distinct_hashed(self) -> DistinctHashed<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        DistinctHashed::new(self)
    }

    fn except<O>(self, other: O) -> Except<Self, O, Identity, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Except::new(self, other, Identity, DefaultEquality)
    }

    fn except_with<O, C>(self, other: O, comparer: C) -> Except<Self, O, Identity, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: AsyncEqualityComparer<Self::Item>,
    {
        Except::new(self, other, Identity, comparer)
    }

    fn except_by<O, K>(self, other: O, key: K) -> Except<Self, O, K, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Except::new(self, other, key, DefaultEquality)
    }

    fn except_by_with<O, K, C>(self, other: O, key: K, comparer: C) -> Except<Self, O, K, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        C: AsyncEqualityComparer<K::Key>,
    {
        Except::new(self, other, key, comparer)
    }

    fn intersect<O>(self, other: O) -> Intersect<Self, O, Identity, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Intersect::new(self, other, Identity, DefaultEquality)
    }

    fn intersect_with<O, C>(self, other: O, comparer: C) -> Intersect<Self, O, Identity, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: AsyncEqualityComparer<Self::Item>,
    {
        Intersect::new(self, other, Identity, comparer)
    }

    fn intersect_by<O, K>(self, other: O, key: K) -> Intersect<Self, O, K, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Intersect::new(self, other, key, DefaultEquality)
    }

    fn intersect_by_with<O, K, C>(
        self,
        other: O,
        key: K,
        comparer: C,
    ) -> Intersect<Self, O, K, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        C: AsyncEqualityComparer<K::Key>,
    {
        Intersect::new(self, other, key, comparer)
    }

    fn union<O>(self, other: O) -> Union<Self, O, Identity, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Union::new(self, other, Identity, DefaultEquality)
    }

    fn union_with<O, C>(self, other: O, comparer: C) -> Union<Self, O, Identity, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: AsyncEqualityComparer<Self::Item>,
    {
        Union::new(self, other, Identity, comparer)
    }

    fn union_by<O, K>(self, other: O, key: K) -> Union<Self, O, K, DefaultEquality>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Union::new(self, other, key, DefaultEquality)
    }

    fn union_by_with<O, K, C>(self, other: O, key: K, comparer: C) -> Union<Self, O, K, C>
    where
        O: AsyncEnumerable<Item = Self::Item>,
        K: AsyncKeySelector<Self::Item>,
        C: AsyncEqualityComparer<K::Key>,
    {
        Union::new(self, other, key, comparer)
    }

    /// Combine elements pairwise; stops with the shorter sequence.
    fn zip<O, F, Fut>(self, other: O, selector: F) -> Zip<Self, O, F>
    where
        O: AsyncEnumerable,
        F: Fn(Self::Item, O::Item) -> Fut,
        Fut: Future,
    {
        Zip::new(self, other, selector)
    }

    fn zip3<O, P, F, Fut>(self, second: O, third: P, selector: F) -> Zip3<Self, O, P, F>
    where
        O: AsyncEnumerable,
        P: AsyncEnumerable,
        F: Fn(Self::Item, O::Item, P::Item) -> Fut,
        Fut: Future,
    {
        Zip3::new(self, second, third, selector)
    }

    /// A lazy sequence of the results of running `action` on every
    /// element.
    fn for_each<F, Fut>(self, action: F) -> ForEach<Self, F>
    where
        F: Fn(Self::Item) -> Fut,
        Fut: Future,
    {
        ForEach::new(self, action)
    }
}

impl<E: AsyncEnumerable> AsyncEnumerableExt for E {}
