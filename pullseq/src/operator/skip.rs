use crate::buffer::DelayWindow;
use crate::enumerable::Enumerable;

/// Discards the first `count` elements.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Enumerable> Enumerable for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Skip<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        // the discarded elements are only pulled on the first `next`
        self.source.cursor().skip(self.count)
    }
}

/// Withholds the last `count` elements.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct SkipLast<S> {
    source: S,
    count: usize,
}

impl<S> SkipLast<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Enumerable> Enumerable for SkipLast<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipLastCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipLastCursor {
            upstream: self.source.cursor(),
            window: DelayWindow::new(self.count),
        }
    }
}

pub struct SkipLastCursor<C: Iterator> {
    upstream: C,
    window: DelayWindow<C::Item>,
}

impl<C: Iterator> Iterator for SkipLastCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let item = self.upstream.next()?;
            if let Some(released) = self.window.push(item) {
                return Some(released);
            }
        }
    }
}
