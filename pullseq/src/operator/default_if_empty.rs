use crate::enumerable::Enumerable;

/// Yields a default element when the upstream sequence is empty.
///
/// The cursor probes upstream with one pull. If that finds an element,
/// upstream is replayed from the start through a fresh traversal, so the
/// upstream source has to be re-iterable for the output to be complete.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless traversed"]
pub struct DefaultIfEmpty<S, T> {
    source: S,
    default: T,
}

impl<S, T> DefaultIfEmpty<S, T> {
    pub(crate) fn new(source: S, default: T) -> Self {
        Self { source, default }
    }
}

impl<S, T> Enumerable for DefaultIfEmpty<S, T>
where
    S: Enumerable<Item = T>,
    T: Clone,
{
    type Item = T;
    type Cursor<'a>
        = DefaultIfEmptyCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DefaultIfEmptyCursor {
            source: &self.source,
            default: &self.default,
            state: State::Probe,
        }
    }
}

enum State<C> {
    Probe,
    Replay(C),
    Done,
}

pub struct DefaultIfEmptyCursor<'a, S>
where
    S: Enumerable + 'a,
{
    source: &'a S,
    default: &'a S::Item,
    state: State<S::Cursor<'a>>,
}

impl<'a, S> Iterator for DefaultIfEmptyCursor<'a, S>
where
    S: Enumerable + 'a,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match &mut self.state {
            State::Probe => {
                let mut probe = self.source.cursor();
                if probe.next().is_none() {
                    self.state = State::Done;
                    return Some(self.default.clone());
                }
                drop(probe);
                let mut replay = self.source.cursor();
                let first = replay.next();
                self.state = State::Replay(replay);
                first
            }
            State::Replay(replay) => replay.next(),
            State::Done => None,
        }
    }
}
