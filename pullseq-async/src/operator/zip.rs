use std::future::Future;

use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};

use crate::enumerable::AsyncEnumerable;

/// Combines two sequences element-wise through a suspending selector.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Zip<S, O, F> {
    source: S,
    other: O,
    selector: F,
}

impl<S, O, F> Zip<S, O, F> {
    pub(crate) fn new(source: S, other: O, selector: F) -> Self {
        Self {
            source,
            other,
            selector,
        }
    }
}

impl<S, O, F, Fut> AsyncEnumerable for Zip<S, O, F>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable,
    F: Fn(S::Item, O::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Fut::Output>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut first = self.source.cursor();
            let mut second = self.other.cursor();
            while let Some(a) = first.next().await {
                // stop without pulling `first` again once `second` runs dry
                match second.next().await {
                    Some(b) => {
                        yield (self.selector)(a, b).await;
                    }
                    None => break,
                }
            }
        })
    }
}

/// Combines three sequences element-wise through a suspending selector.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Zip3<S, O, P, F> {
    source: S,
    second: O,
    third: P,
    selector: F,
}

impl<S, O, P, F> Zip3<S, O, P, F> {
    pub(crate) fn new(source: S, second: O, third: P, selector: F) -> Self {
        Self {
            source,
            second,
            third,
            selector,
        }
    }
}

impl<S, O, P, F, Fut> AsyncEnumerable for Zip3<S, O, P, F>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable,
    P: AsyncEnumerable,
    F: Fn(S::Item, O::Item, P::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Fut::Output>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut first = self.source.cursor();
            let mut second = self.second.cursor();
            let mut third = self.third.cursor();
            while let Some(a) = first.next().await {
                let Some(b) = second.next().await else {
                    break;
                };
                let Some(c) = third.next().await else {
                    break;
                };
                yield (self.selector)(a, b, c).await;
            }
        })
    }
}
