use crate::enumerable::Enumerable;

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

impl<S, O> Enumerable for Concat<S, O>
where
    S: Enumerable,
    O: Enumerable<Item = S::Item>,
{
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Chain<S::Cursor<'a>, O::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor().chain(self.other.cursor())
    }
}
