use futures::stream::{LocalBoxStream, StreamExt};

use crate::enumerable::AsyncEnumerable;

/// Yields the upstream sequence, then a second one.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Concat<S, O> {
    source: S,
    other: O,
}

impl<S, O> Concat<S, O> {
    pub(crate) fn new(source: S, other: O) -> Self {
        Self { source, other }
    }
}

impl<S, O> AsyncEnumerable for Concat<S, O>
where
    S: AsyncEnumerable,
    O: AsyncEnumerable<Item = S::Item>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        self.source
            .cursor()
            .chain(self.other.cursor())
            .boxed_local()
    }
}
