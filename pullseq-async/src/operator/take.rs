use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::buffer::TailWindow;
use tracing::trace;

use crate::enumerable::AsyncEnumerable;

/// Yields at most the first `count` elements.
///
/// The upstream cursor is dropped as soon as the last wanted element has
/// been pulled, while the consumer may still hold this cursor.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for Take<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = (self.count > 0).then(|| self.source.cursor());
            let mut remaining = self.count;
            while let Some(cursor) = upstream.as_mut() {
                let item = cursor.next().await;
                remaining = remaining.saturating_sub(1);
                if item.is_none() || remaining == 0 {
                    upstream = None;
                    trace!("take released its upstream cursor");
                }
                if let Some(item) = item {
                    yield item;
                }
            }
        })
    }
}

/// Yields the last `count` elements in their original order, once
/// upstream is drained.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct TakeLast<S> {
    source: S,
    count: usize,
}

impl<S> TakeLast<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for TakeLast<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            if self.count > 0 {
                let mut window = TailWindow::new(self.count);
                let mut upstream = self.source.cursor();
                while let Some(item) = upstream.next().await {
                    window.push(item);
                }
                trace!(kept = window.len(), "take_last drained upstream");
                for item in window {
                    yield item;
                }
            }
        })
    }
}
