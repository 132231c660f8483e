use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use tracing::trace;

use crate::enumerable::AsyncEnumerable;

/// Yields the elements back to front, after draining upstream on the
/// first pull.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Reverse<S> {
    source: S,
}

impl<S> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for Reverse<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut buffer: Vec<S::Item> = self.source.cursor().collect().await;
            trace!(buffered = buffer.len(), "reverse drained upstream");
            while let Some(item) = buffer.pop() {
                yield item;
            }
        })
    }
}
