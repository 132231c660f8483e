use tracing::trace;

use crate::buffer::Batch;
use crate::enumerable::Enumerable;

/// Groups consecutive elements into batches of a fixed size.
///
/// Built through [`EnumerableExt::chunk`](crate::EnumerableExt::chunk),
/// which guarantees a size of at least one.
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

impl<S: Enumerable> Enumerable for Chunk<S> {
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = ChunkCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ChunkCursor {
            upstream: Some(self.source.cursor()),
            batch: Batch::new(self.size),
        }
    }
}

pub struct ChunkCursor<C: Iterator> {
    upstream: Option<C>,
    batch: Batch<C::Item>,
}

impl<C: Iterator> Iterator for ChunkCursor<C> {
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Vec<C::Item>> {
        let upstream = self.upstream.as_mut()?;
        for item in upstream.by_ref() {
            if let Some(full) = self.batch.push(item) {
                return Some(full);
            }
        }
        self.upstream = None;
        let last = self.batch.finish();
        if let Some(last) = &last {
            trace!(len = last.len(), "chunk flushed trailing batch");
        }
        last
    }
}
