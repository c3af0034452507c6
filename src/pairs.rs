use crate::share::Share;
use crate::support::Outcome;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// insertion-ordered mapping from outcome to share. keys are unique;
/// feeding a repeated outcome accumulates into the slot it first
/// claimed, so iteration order is always first-seen order.
#[derive(Debug, Clone)]
pub struct Pairs<K: Outcome> {
    entries: IndexMap<K, Share>,
}

impl<K: Outcome> Pairs<K> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self, outcome: &K) -> Option<&Share> {
        self.entries.get(outcome)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Share)> {
        self.entries.iter()
    }
    pub fn accumulate(&mut self, outcome: K, share: Share) {
        self.entries
            .entry(outcome)
            .and_modify(|held| *held = held.merge(&share))
            .or_insert(share);
    }
}

impl<K: Outcome> Default for Pairs<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Outcome> FromIterator<(K, Share)> for Pairs<K> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, Share)>,
    {
        let mut pairs = Self::new();
        for (outcome, share) in iter {
            pairs.accumulate(outcome, share);
        }
        pairs
    }
}

/// mapping equality: same key set, same share per key. insertion order
/// is preserved for iteration but does not participate in equality.
impl<K: Outcome> PartialEq for Pairs<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
impl<K: Outcome> Eq for Pairs<K> {}

/// strict total order over key-sorted pair sequences, consistent with
/// the order-insensitive equality above.
impl<K: Outcome + Ord> Ord for Pairs<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.entries.iter().collect::<Vec<_>>();
        let mut rhs = other.entries.iter().collect::<Vec<_>>();
        lhs.sort_by(|a, b| a.0.cmp(b.0));
        rhs.sort_by(|a, b| a.0.cmp(b.0));
        lhs.cmp(&rhs)
    }
}
impl<K: Outcome + Ord> PartialOrd for Pairs<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
