use std::future::Future;

use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};

use crate::enumerable::AsyncEnumerable;

/// Projects every element, together with its index, through a suspending
/// selector.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, Fut> AsyncEnumerable for Map<S, F>
where
    S: AsyncEnumerable,
    F: Fn(S::Item, usize) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Fut::Output>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = self.source.cursor();
            let mut index = 0;
            while let Some(item) = upstream.next().await {
                yield (self.selector)(item, index).await;
                index += 1;
            }
        })
    }
}

/// Runs a suspending action on every element as the sequence is
/// traversed, yielding what the action resolves to.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct ForEach<S, F> {
    source: S,
    action: F,
}

impl<S, F> ForEach<S, F> {
    pub(crate) fn new(source: S, action: F) -> Self {
        Self { source, action }
    }
}

impl<S, F, Fut> AsyncEnumerable for ForEach<S, F>
where
    S: AsyncEnumerable,
    F: Fn(S::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Fut::Output>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                yield (self.action)(item).await;
            }
        })
    }
}
