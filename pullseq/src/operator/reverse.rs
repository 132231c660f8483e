use tracing::trace;

use crate::enumerable::Enumerable;

/// Yields the elements back to front.
///
/// The whole upstream sequence is buffered on the first pull, so this
/// never produces anything for an infinite source.
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

impl<S: Enumerable> Enumerable for Reverse<S> {
    type Item = S::Item;
    type Cursor<'a>
        = ReverseCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ReverseCursor {
            upstream: Some(self.source.cursor()),
            buffer: Vec::new(),
        }
    }
}

pub struct ReverseCursor<C: Iterator> {
    upstream: Option<C>,
    buffer: Vec<C::Item>,
}

impl<C: Iterator> Iterator for ReverseCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if let Some(upstream) = self.upstream.take() {
            self.buffer.extend(upstream);
            trace!(buffered = self.buffer.len(), "reverse drained upstream");
        }
        self.buffer.pop()
    }
}
