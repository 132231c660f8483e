use std::future::Future;

use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};

use crate::enumerable::AsyncEnumerable;

/// Keeps the elements accepted by a suspending predicate.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P, Fut> AsyncEnumerable for Filter<S, P>
where
    S: AsyncEnumerable,
    P: Fn(&S::Item, usize) -> Fut,
    Fut: Future<Output = bool>,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, S::Item>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = self.source.cursor();
            let mut index = 0;
            while let Some(item) = upstream.next().await {
                let keep = (self.predicate)(&item, index).await;
                index += 1;
                if keep {
                    yield item;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use futures::executor::block_on;

    use crate::prelude::*;

    #[test]
    fn test_filter_index_counts_upstream() {
        let numbers = crate::from_vec(vec![10, 11, 12, 13, 14]);
        let picked = numbers.filter(|n, index| ready(n % 2 == 0 && index > 0));
        assert_eq!(block_on(picked.to_vec()), vec![12, 14]);
    }
}
