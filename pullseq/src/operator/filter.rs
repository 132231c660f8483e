use crate::enumerable::Enumerable;

/// Keeps the elements accepted by a predicate.
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

impl<S, P> Enumerable for Filter<S, P>
where
    S: Enumerable,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.source.cursor(),
            predicate: &self.predicate,
            index: 0,
        }
    }
}

pub struct FilterCursor<'a, C, P> {
    upstream: C,
    predicate: &'a P,
    index: usize,
}

impl<C, P> Iterator for FilterCursor<'_, C, P>
where
    C: Iterator,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.upstream.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.upstream.size_hint();
        (0, upper)
    }
}
