use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};

use crate::enumerable::AsyncEnumerable;

/// Yields a default element when the upstream sequence is empty.
///
/// Upstream is probed with one pull; a non-empty upstream is then replayed
/// through a fresh traversal.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct DefaultIfEmpty<S, T> {
    source: S,
    default: T,
}

impl<S, T> DefaultIfEmpty<S, T> {
    pub(crate) fn new(source: S, default: T) -> Self {
        Self { source, default }
    }
}

impl<S, T> AsyncEnumerable for DefaultIfEmpty<S, T>
where
    S: AsyncEnumerable<Item = T>,
    T: Clone,
{
    type Item = T;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, T>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let empty = self.source.cursor().next().await.is_none();
            if empty {
                yield self.default.clone();
            } else {
                let mut replay = self.source.cursor();
                while let Some(item) = replay.next().await {
                    yield item;
                }
            }
        })
    }
}
