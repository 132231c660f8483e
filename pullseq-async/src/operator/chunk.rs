use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::buffer::Batch;

use crate::enumerable::AsyncEnumerable;

/// Groups consecutive elements into batches of a fixed size; the last
/// batch may be shorter.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Chunk<S> {
    source: S,
    size: usize,
}

impl<S> Chunk<S> {
    pub(crate) fn new(source: S, size: usize) -> Self {
        Self { source, size }
    }
}

impl<S: AsyncEnumerable> AsyncEnumerable for Chunk<S> {
    type Item = Vec<S::Item>;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Vec<S::Item>>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut batch = Batch::new(self.size);
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                if let Some(full) = batch.push(item) {
                    yield full;
                }
            }
            if let Some(last) = batch.finish() {
                yield last;
            }
        })
    }
}
