use crate::enumerable::Enumerable;

/// Projects every element, with its index, through a selector.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, U> Enumerable for Map<S, F>
where
    S: Enumerable,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.source.cursor(),
            selector: &self.selector,
            index: 0,
        }
    }
}

pub struct MapCursor<'a, C, F> {
    upstream: C,
    selector: &'a F,
    index: usize,
}

impl<C, F, U> Iterator for MapCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.upstream.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.selector)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

/// The lazy sequence of an action's results, one per element.
#[derive(Debug, Clone)]
#[must_use = "the action only runs when the result is traversed"]
pub struct ForEach<S, F> {
    source: S,
    action: F,
}

impl<S, F> ForEach<S, F> {
    pub(crate) fn new(source: S, action: F) -> Self {
        Self { source, action }
    }
}

impl<S, F, U> Enumerable for ForEach<S, F>
where
    S: Enumerable,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = std::iter::Map<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor().map(&self.action)
    }
}
