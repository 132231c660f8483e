use std::marker::PhantomData;

use crate::enumerable::Enumerable;
use crate::value::{Kind, TypeTest, Value};

/// Keeps the elements that pass a run-time type test, converted to the
/// tested type.
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct OfType<S, U> {
    source: S,
    target: PhantomData<fn() -> U>,
}

impl<S: Clone, U> Clone for OfType<S, U> {
    fn clone(&self) -> Self {
        Self::new(self.source.clone())
    }
}

impl<S, U> OfType<S, U> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            target: PhantomData,
        }
    }
}

impl<S, U> Enumerable for OfType<S, U>
where
    S: Enumerable,
    S::Item: TypeTest<U>,
{
    type Item = U;
    type Cursor<'a>
        = OfTypeCursor<S::Cursor<'a>, U>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OfTypeCursor {
            upstream: self.source.cursor(),
            target: PhantomData,
        }
    }
}

pub struct OfTypeCursor<C, U> {
    upstream: C,
    target: PhantomData<fn() -> U>,
}

impl<C, U> Iterator for OfTypeCursor<C, U>
where
    C: Iterator,
    C::Item: TypeTest<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.upstream.by_ref().find_map(TypeTest::type_test)
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

impl<S> Enumerable for OfKind<S>
where
    S: Enumerable<Item = Value>,
{
    type Item = Value;
    type Cursor<'a>
        = OfKindCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OfKindCursor {
            upstream: self.source.cursor(),
            kind: self.kind,
        }
    }
}

pub struct OfKindCursor<C> {
    upstream: C,
    kind: Kind,
}

impl<C> Iterator for OfKindCursor<C>
where
    C: Iterator<Item = Value>,
{
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let kind = self.kind;
        self.upstream.by_ref().find(|value| value.kind() == kind)
    }
}
