use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::operator::Side;

use crate::enumerable::AsyncEnumerable;

/// Yields one extra element before or after the upstream sequence.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Attach<S, T> {
    source: S,
    element: T,
    side: Side,
}

impl<S, T> Attach<S, T> {
    pub(crate) fn new(source: S, element: T, side: Side) -> Self {
        Self {
            source,
            element,
            side,
        }
    }
}

impl<S, T> AsyncEnumerable for Attach<S, T>
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
            if self.side == Side::Front {
                yield self.element.clone();
            }
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                yield item;
            }
            if self.side == Side::Back {
                yield self.element.clone();
            }
        })
    }
}
