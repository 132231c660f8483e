//! Adapters turning raw producers into suspending sequences.

use std::cell::RefCell;
use std::marker::PhantomData;

use async_stream::stream;
use futures::pin_mut;
use futures::stream::{self, LocalBoxStream, Stream, StreamExt};
use pullseq::Enumerable;

use crate::enumerable::AsyncEnumerable;

/// Any immediate sequence, pulled through the suspending protocol.
///
/// The adapted sequence keeps its re-iterability: every traversal starts
/// a fresh immediate traversal.
#[derive(Debug, Clone)]
pub struct FromEnumerable<E> {
    source: E,
}

impl<E: Enumerable> AsyncEnumerable for FromEnumerable<E> {
    type Item = E::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, E::Item>
    where
        Self::Item: 'a,
    {
        stream::iter(self.source.cursor()).boxed_local()
    }
}

pub fn from_enumerable<E: Enumerable>(source: E) -> FromEnumerable<E> {
    FromEnumerable { source }
}

/// Wrap a vector.
pub fn from_vec<T: Clone>(items: Vec<T>) -> FromEnumerable<pullseq::Items<T>> {
    from_enumerable(pullseq::from_vec(items))
}

/// `count` consecutive integers starting at `start`; fails when the last
/// one would not fit in an `i64`.
pub fn range(start: i64, count: usize) -> pullseq::Result<FromEnumerable<pullseq::Range>> {
    pullseq::range(start, count).map(from_enumerable)
}

#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    item: PhantomData<fn() -> T>,
}

impl<T> AsyncEnumerable for Empty<T> {
    type Item = T;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, T>
    where
        Self::Item: 'a,
    {
        stream::empty().boxed_local()
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty { item: PhantomData }
}

/// A re-iterable producer: every traversal calls the factory for a fresh
/// stream.
#[derive(Debug, Clone, Copy)]
pub struct FromStreamFn<F> {
    factory: F,
}

impl<F, St> AsyncEnumerable for FromStreamFn<F>
where
    F: Fn() -> St,
    St: Stream,
{
    type Item = St::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, St::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let inner = (self.factory)();
            pin_mut!(inner);
            while let Some(item) = inner.next().await {
                yield item;
            }
        })
    }
}

/// Wrap a stream factory. The factory only runs when a traversal makes
/// its first pull.
pub fn from_stream_fn<F, St>(factory: F) -> FromStreamFn<F>
where
    F: Fn() -> St,
    St: Stream,
{
    FromStreamFn { factory }
}

/// A single-use stream. The first traversal consumes it; every later
/// traversal is empty.
pub struct StreamOnce<St> {
    stream: RefCell<Option<St>>,
}

impl<St: Stream> AsyncEnumerable for StreamOnce<St> {
    type Item = St::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, St::Item>
    where
        Self::Item: 'a,
    {
        let taken = self.stream.borrow_mut().take();
        stream::iter(taken).flatten().boxed_local()
    }
}

pub fn from_stream_once<St: Stream>(stream: St) -> StreamOnce<St> {
    StreamOnce {
        stream: RefCell::new(Some(stream)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::AsyncReduce;
    use futures::executor::block_on;

    #[test]
    fn test_from_vec_reiterable() {
        let numbers = from_vec(vec![1, 2, 3]);
        assert_eq!(block_on(numbers.to_vec()), vec![1, 2, 3]);
        assert_eq!(block_on(numbers.to_vec()), vec![1, 2, 3]);
    }

    #[test]
    fn test_stream_fn_is_lazy() {
        let calls = std::cell::Cell::new(0);
        let source = from_stream_fn(|| {
            calls.set(calls.get() + 1);
            stream::iter(0..3)
        });
        let mut cursor = source.cursor();
        assert_eq!(calls.get(), 0);
        assert_eq!(block_on(cursor.next()), Some(0));
        assert_eq!(calls.get(), 1);
        drop(cursor);
        assert_eq!(block_on(source.count()), 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_stream_once() {
        let once = from_stream_once(stream::iter(vec!['a', 'b']));
        assert_eq!(block_on(once.to_vec()), vec!['a', 'b']);
        assert_eq!(block_on(once.to_vec()), Vec::<char>::new());
    }

    #[test]
    fn test_range() {
        assert_eq!(block_on(range(-1, 3).unwrap().to_vec()), vec![-1, 0, 1]);
        assert!(range(i64::MAX, 2).is_err());
        assert_eq!(block_on(empty::<u8>().count()), 0);
    }
}
