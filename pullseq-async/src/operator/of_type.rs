use std::marker::PhantomData;

use async_stream::stream;
use futures::stream::{LocalBoxStream, StreamExt};
use pullseq::{Kind, TypeTest, Value};

use crate::enumerable::AsyncEnumerable;

/// Keeps the elements that pass a run-time type test, converted to the
/// tested type.
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct OfType<S, U> {
    source: S,
    target: PhantomData<fn() -> U>,
}

impl<S, U> OfType<S, U> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            target: PhantomData,
        }
    }
}

impl<S, U> AsyncEnumerable for OfType<S, U>
where
    S: AsyncEnumerable,
    S::Item: TypeTest<U>,
{
    type Item = U;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, U>
    where
        Self::Item: 'a,
    {
        Box::pin(stream! {
            let mut upstream = self.source.cursor();
            while let Some(item) = upstream.next().await {
                if let Some(converted) = TypeTest::<U>::type_test(item) {
                    yield converted;
                }
            }
        })
    }
}

/// Keeps the dynamic values of one primitive kind.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct OfKind<S> {
    source: S,
    kind: Kind,
}

impl<S> OfKind<S> {
    pub(crate) fn new(source: S, kind: Kind) -> Self {
        Self { source, kind }
    }
}

impl<S> AsyncEnumerable for OfKind<S>
where
    S: AsyncEnumerable<Item = Value>,
{
    type Item = Value;

    fn cursor<'a>(&'a self) -> LocalBoxStream<'a, Value>
    where
        Self::Item: 'a,
    {
        let kind = self.kind;
        self.source
            .cursor()
            .filter(move |value| std::future::ready(value.kind() == kind))
            .boxed_local()
    }
}
