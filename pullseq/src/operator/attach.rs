use crate::enumerable::Enumerable;

/// Where an attached element goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

/// Yields one extra element before (prepend) or after (append) the
/// upstream sequence.
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

impl<S, T> Enumerable for Attach<S, T>
where
    S: Enumerable<Item = T>,
    T: Clone,
{
    type Item = T;
    type Cursor<'a>
        = AttachCursor<S::Cursor<'a>, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        AttachCursor {
            upstream: self.source.cursor(),
            element: Some(self.element.clone()),
            side: self.side,
        }
    }
}

pub struct AttachCursor<C, T> {
    upstream: C,
    element: Option<T>,
    side: Side,
}

impl<C, T> Iterator for AttachCursor<C, T>
where
    C: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.side {
            Side::Front => self.element.take().or_else(|| self.upstream.next()),
            Side::Back => self.upstream.next().or_else(|| self.element.take()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.element.is_some());
        let (lower, upper) = self.upstream.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}
