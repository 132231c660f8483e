use std::future::Future;

use async_stream::stream;
use futures::pin_mut;
use futures::stream::{LocalBoxStream, Stream, StreamExt};

use crate::enumerable::{AsyncEnumerable, InnerItem};

/// Flattens the inner stream each element's selector resolves to, passing
/// every inner element through a suspending result selector together with
/// its outer element.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct SelectMany<S, F, R> {
    source: S,
    selector: F,
    result: R,
}

impl<S, F, R> SelectMany<S, F, R> {
    pub(crate) fn new(source: S, selector: F, result: R) -> Self {
        Self {
            source,
            selector,
            result,
        }
    }
}

impl<S, F, Fut, R, RFut> AsyncEnumerable for SelectMany<S, F, R>
where
    S: AsyncEnumerable,
    F: Fn(&S::Item, usize) -> Fut,
    Fut: Future,
    Fut::Output: Stream,
    R: Fn(&S::Item, InnerItem<Fut>) -> RFut,
    RFut: Future,
{
    type Item = RFut::Output;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, RFut::Output>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = self.source.cursor();
            let mut index = 0;
            while let Some(outer) = upstream.next().await {
                let inner = (self.selector)(&outer, index).await;
                index += 1;
                pin_mut!(inner);
                while let Some(element) = inner.next().await {
                    yield (self.result)(&outer, element).await;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use futures::executor::block_on;
    use futures::stream;

    use crate::prelude::*;

    #[test]
    fn test_select_many_flattens_in_order() {
        let words = crate::from_vec(vec!["ab", "", "c"]);
        let letters = words.select_many(|word, _| {
            let letters: Vec<char> = word.chars().collect();
            ready(stream::iter(letters))
        });
        assert_eq!(block_on(letters.to_vec()), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_select_many_with_result() {
        let numbers = crate::from_vec(vec![1, 2]);
        let pairs = numbers.select_many_with(
            |n, _| ready(stream::iter(0..*n)),
            |outer: &i32, inner: i32| ready(outer * 10 + inner),
        );
        assert_eq!(block_on(pairs.to_vec()), vec![10, 20, 21]);
    }
}
