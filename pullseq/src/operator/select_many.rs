use crate::enumerable::Enumerable;

/// Flattens the inner sequence produced for each element, passing every
/// inner element through a result selector together with its outer
/// element.
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

impl<S, F, R, I, U> Enumerable for SelectMany<S, F, R>
where
    S: Enumerable,
    F: Fn(&S::Item, usize) -> I,
    I: IntoIterator,
    R: Fn(&S::Item, I::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = SelectManyCursor<'a, S::Cursor<'a>, F, R, I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectManyCursor {
            upstream: self.source.cursor(),
            selector: &self.selector,
            result: &self.result,
            index: 0,
            current: None,
        }
    }
}

pub struct SelectManyCursor<'a, C, F, R, I>
where
    C: Iterator,
    I: IntoIterator,
{
    upstream: C,
    selector: &'a F,
    result: &'a R,
    index: usize,
    // the outer element and what remains of its inner sequence
    current: Option<(C::Item, I::IntoIter)>,
}

impl<C, F, R, I, U> Iterator for SelectManyCursor<'_, C, F, R, I>
where
    C: Iterator,
    F: Fn(&C::Item, usize) -> I,
    I: IntoIterator,
    R: Fn(&C::Item, I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            if let Some((outer, inner)) = &mut self.current {
                if let Some(element) = inner.next() {
                    return Some((self.result)(outer, element));
                }
                self.current = None;
            }
            let outer = self.upstream.next()?;
            let inner = (self.selector)(&outer, self.index).into_iter();
            self.index += 1;
            self.current = Some((outer, inner));
        }
    }
}
