use std::collections::VecDeque;

/// Withholds the most recent `delay` elements.
///
/// Until the window is full, pushed elements are held back silently. Once
/// it is full, every push releases the oldest held element, so the output
/// lags the input by exactly `delay` elements and whatever is still held
/// when the input ends is never released.
#[derive(Debug, Clone)]
pub struct DelayWindow<T> {
    pending: VecDeque<T>,
    delay: usize,
}

impl<T> DelayWindow<T> {
    pub fn new(delay: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            delay,
        }
    }

    pub fn push(&mut self, item: T) -> Option<T> {
        if self.delay == 0 {
            return Some(item);
        }
        if self.pending.len() < self.delay {
            self.pending.push_back(item);
            return None;
        }
        let oldest = self.pending.pop_front();
        self.pending.push_back(item);
        oldest
    }
}

/// Keeps the last `capacity` elements pushed into it, in push order.
#[derive(Debug, Clone)]
pub struct TailWindow<T> {
    recent: VecDeque<T>,
    capacity: usize,
}

impl<T> TailWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            recent: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

impl<T> IntoIterator for TailWindow<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.recent.into_iter()
    }
}

/// Groups consecutive elements into batches of a fixed size.
#[derive(Debug, Clone)]
pub struct Batch<T> {
    current: Vec<T>,
    size: usize,
}

impl<T> Batch<T> {
    /// `size` must be at least one; chunking validates it before a batch
    /// is ever created. Storage grows with the input, so a size far beyond
    /// the sequence length costs nothing up front.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            current: Vec::new(),
            size,
        }
    }

    /// Adds an element, handing back the batch once it is full.
    pub fn push(&mut self, item: T) -> Option<Vec<T>> {
        self.current.push(item);
        if self.current.len() >= self.size {
            Some(std::mem::take(&mut self.current))
        } else {
            None
        }
    }

    /// Hands back the trailing, possibly short, batch.
    pub fn finish(&mut self) -> Option<Vec<T>> {
        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_window() {
        let mut window = DelayWindow::new(2);
        let released = (1..=5).filter_map(|i| window.push(i)).collect::<Vec<_>>();
        assert_eq!(released, vec![1, 2, 3]);
    }

    #[test]
    fn test_delay_window_zero_withholds_nothing() {
        let mut window = DelayWindow::new(0);
        assert_eq!(window.push('a'), Some('a'));
    }

    #[test]
    fn test_tail_window() {
        let mut window = TailWindow::new(2);
        for i in 1..=5 {
            window.push(i);
        }
        assert_eq!(window.len(), 2);
        assert_eq!(window.into_iter().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_tail_window_zero_keeps_nothing() {
        let mut window = TailWindow::new(0);
        window.push(1);
        assert!(window.is_empty());
    }

    #[test]
    fn test_batch() {
        let mut batch = Batch::new(2);
        assert_eq!(batch.push(1), None);
        assert_eq!(batch.push(2), Some(vec![1, 2]));
        assert_eq!(batch.push(3), None);
        assert_eq!(batch.finish(), Some(vec![3]));
        assert_eq!(batch.finish(), None);
    }

    #[test]
    fn test_huge_bounds_allocate_lazily() {
        let mut delay = DelayWindow::new(usize::MAX);
        assert_eq!(delay.push(1), None);
        let mut tail = TailWindow::new(usize::MAX);
        tail.push(1);
        assert_eq!(tail.len(), 1);
        let mut batch = Batch::new(usize::MAX);
        assert_eq!(batch.push(1), None);
        assert_eq!(batch.finish(), Some(vec![1]));
    }
}
