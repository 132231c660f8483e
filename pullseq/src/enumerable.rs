use pullseq_compare::{DefaultEquality, EqualityComparer, Identity, KeySelector};

use crate::buffer::clamp_count;
use crate::error;
use crate::operator::{
    Attach, Chunk, Concat, DefaultIfEmpty, Distinct, DistinctHashed, Except, Filter, ForEach,
    Intersect, Map, OfKind, OfType, Reverse, SelectMany, Side, Skip, SkipLast, Take, TakeLast,
    Union, Zip, Zip3,
};
use crate::value::{Kind, TypeTest, Value};

/// The pull protocol: a sequence hands out fresh cursors on request.
///
/// Requesting a cursor never mutates the sequence; all traversal state
/// lives in the cursor. A sequence over a re-iterable source can be
/// traversed any number of times. A sequence whose ultimate source is a
/// single-use producer yields nothing on later traversals; that is a
/// property of the source, not something the operators correct.
pub trait Enumerable {
    type Item;
    type Cursor<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Begin a traversal.
    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<E> Enumerable for &E
where
    E: Enumerable + ?Sized,
{
    type Item = E::Item;
    type Cursor<'a>
        = E::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

fn inner_element<T, U>(_outer: &T, inner: U) -> U {
    inner
}

/// Builder methods available on every sequence.
///
/// Each method consumes the sequence and returns a lazy decorator that
/// exclusively owns it. Pass `&sequence` to keep using the original.
pub trait EnumerableExt: Enumerable + Sized {
    /// Keep the elements accepted by `predicate`.
    ///
    /// The index passed to the predicate counts every upstream element,
    /// not just the accepted ones.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Project every element, together with its index.
    fn map<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item, usize) -> U,
    {
        Map::new(self, selector)
    }

    /// Flatten the inner sequences produced for every element.
    fn select_many<I, F>(
        self,
        selector: F,
    ) -> SelectMany<Self, F, fn(&Self::Item, I::Item) -> I::Item>
    where
        F: Fn(&Self::Item, usize) -> I,
        I: IntoIterator,
    {
        SelectMany::new(
            self,
            selector,
            inner_element as fn(&Self::Item, I::Item) -> I::Item,
        )
    }

    /// Flatten the inner sequences, combining each inner element with the
    /// outer element it came from.
    fn select_many_with<I, U, F, R>(self, selector: F, result: R) -> SelectMany<Self, F, R>
    where
        F: Fn(&Self::Item, usize) -> I,
        I: IntoIterator,
        R: Fn(&Self::Item, I::Item) -> U,
    {
        SelectMany::new(self, selector, result)
    }

    /// Yield `element` after the whole sequence.
    fn append(self, element: Self::Item) -> Attach<Self, Self::Item> {
        Attach::new(self, element, Side::Back)
    }

    /// Yield `element` before the whole sequence.
    fn prepend(self, element: Self::Item) -> Attach<Self, Self::Item> {
        Attach::new(self, element, Side::Front)
    }

    /// Yield this sequence, then `other`.
    fn concat<O>(self, other: O) -> Concat<Self, O>
    where
        O: Enumerable<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Yield the elements back to front. Drains upstream before the first
    /// element is produced.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Yield `default` if the sequence is empty.
    fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self, Self::Item> {
        DefaultIfEmpty::new(self, default)
    }

    /// Yield `Default::default()` if the sequence is empty.
    fn default_if_empty_or_default(self) -> DefaultIfEmpty<Self, Self::Item>
    where
        Self::Item: Default,
    {
        DefaultIfEmpty::new(self, Self::Item::default())
    }

    /// Keep the elements that are, at run time, a `U`.
    fn of_type<U>(self) -> OfType<Self, U>
    where
        Self::Item: TypeTest<U>,
    {
        OfType::new(self)
    }

    /// Keep the dynamic values of the given primitive kind.
    fn of_kind(self, kind: Kind) -> OfKind<Self>
    where
        Self: Enumerable<Item = Value>,
    {
        OfKind::new(self, kind)
    }

    /// Discard the first `count` elements. Negative counts discard
    /// nothing.
    fn skip(self, count: isize) -> Skip<Self> {
        Skip::new(self, clamp_count(count))
    }

    /// Withhold the last `count` elements. Negative counts withhold
    /// nothing.
    fn skip_last(self, count: isize) -> SkipLast<Self> {
        SkipLast::new(self, clamp_count(count))
    }

    /// Yield at most the first `count` elements; upstream is not pulled
    /// any further once they have been produced.
    fn take(self, count: isize) -> Take<Self> {
        Take::new(self, clamp_count(count))
    }

    /// Yield the last `count` elements. Drains upstream first.
    fn take_last(self, count: isize) -> TakeLast<Self> {
        TakeLast::new(self, clamp_count(count))
    }

    /// Group consecutive elements into batches of `size`; the last batch
    /// may be shorter.
    ///
    /// A `size` below one is rejected with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) before
    /// anything is pulled.
    fn chunk(self, size: isize) -> error::Result<Chunk<Self>> {
        if size <= 0 {
            return Err(error::Error::InvalidArgument {
                name: "size",
                reason: "chunk size must be greater than zero",
            });
        }
        Ok(Chunk::new(self, size as usize))
    }

    /// Drop elements equal to an earlier one.
    fn distinct(self) -> Distinct<Self, Identity, DefaultEquality>
    where
        Self::Item: Clone + PartialEq,
    {
        Distinct::new(self, Identity, DefaultEquality)
    }

    /// Drop elements equal, under `comparer`, to an earlier one.
    fn distinct_with<C>(self, comparer: C) -> Distinct<Self, Identity, C>
    where
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        Distinct::new(self, Identity, comparer)
    }

    /// Drop elements whose key equals the key of an earlier one.
    fn distinct_by<K>(self, key: K) -> Distinct<Self, K, DefaultEquality>
    where
        K: KeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Distinct::new(self, key, DefaultEquality)
    }

    /// Drop elements whose key equals, under `comparer`, the key of an
    /// earlier one.
    fn distinct_by_with<K, C>(self, key: K, comparer: C) -> Distinct<Self, K, C>
    where
        K: KeySelector<Self::Item>,
        C: EqualityComparer<K::Key>,
    {
        Distinct::new(self, key, comparer)
    }

    /// Hash-based [`distinct`](EnumerableExt::distinct). Produces the same
    /// elements, but only applies when equality is `Eq` and agrees with
    /// `Hash`.
    fn distinct_hashed(self) -> DistinctHashed<Self>
    where
        Self::Item: Clone + Eq + std::hash::Hash,
    {
        DistinctHashed::new(self)
    }

    /// Drop elements found in `other`, as well as repeats of elements
    /// already yielded.
    fn except<O>(self, other: O) -> Except<Self, O, Identity, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Except::new(self, other, Identity, DefaultEquality)
    }

    fn except_with<O, C>(self, other: O, comparer: C) -> Except<Self, O, Identity, C>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        Except::new(self, other, Identity, comparer)
    }

    fn except_by<O, K>(self, other: O, key: K) -> Except<Self, O, K, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Except::new(self, other, key, DefaultEquality)
    }

    fn except_by_with<O, K, C>(self, other: O, key: K, comparer: C) -> Except<Self, O, K, C>
    where
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
        C: EqualityComparer<K::Key>,
    {
        Except::new(self, other, key, comparer)
    }

    /// Keep elements matched in `other`; each entry of `other` can be
    /// matched once.
    fn intersect<O>(self, other: O) -> Intersect<Self, O, Identity, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Intersect::new(self, other, Identity, DefaultEquality)
    }

    fn intersect_with<O, C>(self, other: O, comparer: C) -> Intersect<Self, O, Identity, C>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        Intersect::new(self, other, Identity, comparer)
    }

    fn intersect_by<O, K>(self, other: O, key: K) -> Intersect<Self, O, K, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
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
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
        C: EqualityComparer<K::Key>,
    {
        Intersect::new(self, other, key, comparer)
    }

    /// Yield the distinct elements of this sequence followed by those of
    /// `other` not yielded yet.
    fn union<O>(self, other: O) -> Union<Self, O, Identity, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone + PartialEq,
    {
        Union::new(self, other, Identity, DefaultEquality)
    }

    fn union_with<O, C>(self, other: O, comparer: C) -> Union<Self, O, Identity, C>
    where
        O: Enumerable<Item = Self::Item>,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        Union::new(self, other, Identity, comparer)
    }

    fn union_by<O, K>(self, other: O, key: K) -> Union<Self, O, K, DefaultEquality>
    where
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
        K::Key: PartialEq,
    {
        Union::new(self, other, key, DefaultEquality)
    }

    fn union_by_with<O, K, C>(self, other: O, key: K, comparer: C) -> Union<Self, O, K, C>
    where
        O: Enumerable<Item = Self::Item>,
        K: KeySelector<Self::Item>,
        C: EqualityComparer<K::Key>,
    {
        Union::new(self, other, key, comparer)
    }

    /// Combine elements pairwise; stops with the shorter sequence.
    fn zip<O, U, F>(self, other: O, selector: F) -> Zip<Self, O, F>
    where
        O: Enumerable,
        F: Fn(Self::Item, O::Item) -> U,
    {
        Zip::new(self, other, selector)
    }

    /// Combine elements of three sequences; stops with the shortest.
    fn zip3<O, P, U, F>(self, second: O, third: P, selector: F) -> Zip3<Self, O, P, F>
    where
        O: Enumerable,
        P: Enumerable,
        F: Fn(Self::Item, O::Item, P::Item) -> U,
    {
        Zip3::new(self, second, third, selector)
    }

    /// A lazy sequence of the results of running `action` on every
    /// element. The action runs only as the result is traversed.
    fn for_each<U, F>(self, action: F) -> ForEach<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        ForEach::new(self, action)
    }
}

impl<E: Enumerable> EnumerableExt for E {}
