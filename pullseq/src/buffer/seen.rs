use pullseq_compare::EqualityComparer;

/// Previously observed keys, scanned linearly with a caller supplied
/// equality contract.
///
/// Entries stay in insertion order and scans always start from the oldest
/// entry, so the first-seen element is the one that wins a match.
#[derive(Debug, Clone)]
pub struct SeenSet<K> {
    entries: Vec<K>,
}

impl<K> Default for SeenSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SeenSet<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: K) {
        self.entries.push(key);
    }

    /// Removes the entry at `index`, keeping the order of the others.
    pub fn remove(&mut self, index: usize) -> K {
        self.entries.remove(index)
    }

    /// The entries in insertion order, for callers that scan with a
    /// suspending comparer.
    pub fn entries(&self) -> &[K] {
        &self.entries
    }

    /// Position of the first entry equal to `key`.
    pub fn position<C>(&self, key: &K, comparer: &C) -> Option<usize>
    where
        C: EqualityComparer<K> + ?Sized,
    {
        self.entries
            .iter()
            .position(|entry| comparer.equals(entry, key))
    }
}

/// What a set-algebra operator does with a scanned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admit {
    /// Emit elements whose key is not in the set, remembering the key.
    /// Matches are dropped. Used by distinct, except and union.
    Unseen,
    /// Emit elements whose key is in the set, forgetting the matched
    /// entry. Non-matches are dropped. Used by intersect.
    Seen,
}

impl Admit {
    /// Applies the scan result `found` for `key` to `seen`, returning
    /// whether the element is emitted.
    pub fn apply<K>(self, seen: &mut SeenSet<K>, key: K, found: Option<usize>) -> bool {
        match (self, found) {
            (Admit::Unseen, None) => {
                seen.insert(key);
                true
            }
            (Admit::Unseen, Some(_)) => false,
            (Admit::Seen, Some(index)) => {
                seen.remove(index);
                true
            }
            (Admit::Seen, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pullseq_compare::DefaultEquality;

    use super::*;

    #[test]
    fn test_position_finds_first_match() {
        let mut seen = SeenSet::new();
        seen.insert(1.0);
        seen.insert(2.0);
        seen.insert(2.05);
        let close = |a: &f64, b: &f64| (a - b).abs() < 0.1;
        assert_eq!(seen.position(&2.01, &close), Some(1));
        assert_eq!(seen.position(&3.0, &close), None);
    }

    #[test]
    fn test_admit_unseen() {
        let mut seen = SeenSet::new();
        let found = seen.position(&1, &DefaultEquality);
        assert!(Admit::Unseen.apply(&mut seen, 1, found));
        let found = seen.position(&1, &DefaultEquality);
        assert!(!Admit::Unseen.apply(&mut seen, 1, found));
        assert_eq!(seen.entries(), &[1]);
    }

    #[test]
    fn test_admit_seen_removes_match() {
        let mut seen = SeenSet::new();
        seen.insert(3);
        let found = seen.position(&3, &DefaultEquality);
        assert!(Admit::Seen.apply(&mut seen, 3, found));
        assert!(seen.is_empty());
        let found = seen.position(&3, &DefaultEquality);
        assert!(!Admit::Seen.apply(&mut seen, 3, found));
    }
}
