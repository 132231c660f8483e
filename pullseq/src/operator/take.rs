use tracing::trace;

use crate::buffer::TailWindow;
use crate::enumerable::Enumerable;

/// Yields at most the first `count` elements.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Enumerable> Enumerable for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            upstream: (self.count > 0).then(|| self.source.cursor()),
            remaining: self.count,
        }
    }
}

/// Once the last wanted element is produced, or upstream runs dry, the
/// upstream cursor is dropped immediately, releasing whatever it holds
/// even while this cursor stays alive.
pub struct TakeCursor<C> {
    upstream: Option<C>,
    remaining: usize,
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let upstream = self.upstream.as_mut()?;
        let item = upstream.next();
        self.remaining = self.remaining.saturating_sub(1);
        if item.is_none() || self.remaining == 0 {
            self.upstream = None;
            trace!("take released its upstream cursor");
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            Some(upstream) => {
                let (lower, upper) = upstream.size_hint();
                let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
                (lower.min(self.remaining), Some(upper))
            }
            None => (0, Some(0)),
        }
    }
}

/// Yields the last `count` elements in their original order.
///
/// Upstream has to be drained completely before the tail is known.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct TakeLast<S> {
    source: S,
    count: usize,
}

impl<S> TakeLast<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Enumerable> Enumerable for TakeLast<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeLastCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeLastCursor {
            upstream: (self.count > 0).then(|| self.source.cursor()),
            count: self.count,
            tail: None,
        }
    }
}

pub struct TakeLastCursor<C: Iterator> {
    upstream: Option<C>,
    count: usize,
    tail: Option<std::collections::vec_deque::IntoIter<C::Item>>,
}

impl<C: Iterator> Iterator for TakeLastCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if let Some(upstream) = self.upstream.take() {
            let mut window = TailWindow::new(self.count);
            for item in upstream {
                window.push(item);
            }
            trace!(kept = window.len(), "take_last drained upstream");
            self.tail = Some(window.into_iter());
        }
        self.tail.as_mut()?.next()
    }
}

#[cfg(test)]
mod tests {
    use crate::enumerable::{Enumerable, EnumerableExt};
    use crate::source::{from_vec, range};

    #[test]
    fn test_take_size_hint() {
        let taken = range(0, 10).unwrap().take(3);
        let mut cursor = taken.cursor();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        cursor.by_ref().for_each(drop);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_take_last_window() {
        let tail = from_vec(vec!['a', 'b', 'c', 'd']).take_last(3);
        assert_eq!(tail.cursor().collect::<String>(), "bcd");
    }
}
