use crate::enumerable::Enumerable;

/// Combines two sequences element-wise; stops as soon as either is
/// exhausted.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Zip<S, O, F> {
    source: S,
    other: O,
    selector: F,
}

impl<S, O, F> Zip<S, O, F> {
    pub(crate) fn new(source: S, other: O, selector: F) -> Self {
        Self {
            source,
            other,
            selector,
        }
    }
}

impl<S, O, F, U> Enumerable for Zip<S, O, F>
where
    S: Enumerable,
    O: Enumerable,
    F: Fn(S::Item, O::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = ZipCursor<'a, S::Cursor<'a>, O::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            first: self.source.cursor(),
            second: self.other.cursor(),
            selector: &self.selector,
        }
    }
}

pub struct ZipCursor<'a, A, B, F> {
    first: A,
    second: B,
    selector: &'a F,
}

impl<A, B, F, U> Iterator for ZipCursor<'_, A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: Fn(A::Item, B::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((self.selector)(a, b))
    }
}

/// Combines three sequences element-wise; stops as soon as any is
/// exhausted.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Zip3<S, O, P, F> {
    source: S,
    second: O,
    third: P,
    selector: F,
}

impl<S, O, P, F> Zip3<S, O, P, F> {
    pub(crate) fn new(source: S, second: O, third: P, selector: F) -> Self {
        Self {
            source,
            second,
            third,
            selector,
        }
    }
}

impl<S, O, P, F, U> Enumerable for Zip3<S, O, P, F>
where
    S: Enumerable,
    O: Enumerable,
    P: Enumerable,
    F: Fn(S::Item, O::Item, P::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = Zip3Cursor<'a, S::Cursor<'a>, O::Cursor<'a>, P::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        Zip3Cursor {
            first: self.source.cursor(),
            second: self.second.cursor(),
            third: self.third.cursor(),
            selector: &self.selector,
        }
    }
}

pub struct Zip3Cursor<'a, A, B, C, F> {
    first: A,
    second: B,
    third: C,
    selector: &'a F,
}

impl<A, B, C, F, U> Iterator for Zip3Cursor<'_, A, B, C, F>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
    F: Fn(A::Item, B::Item, C::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        let c = self.third.next()?;
        Some((self.selector)(a, b, c))
    }
}
