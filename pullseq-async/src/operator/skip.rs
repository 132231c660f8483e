use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::buffer::DelayWindow;

use crate::enumerable::AsyncEnumerable;

/// Discards the first `count` elements.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for Skip<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        self.source.cursor().skip(self.count).boxed_local()
    }
}

/// Withholds the last `count` elements.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct SkipLast<S> {
    source: S,
    count: usize,
}

impl<S> SkipLast<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for SkipLast<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut window = DelayWindow::new(self.count);
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                if let Some(released) = window.push(item) {
                    yield released;
                }
            }
        })
    }
}
