//! Bounded top-k selection
//!
//! Keeps the k best scored pairs out of an arbitrarily long candidate stream
//! using a fixed-capacity min-heap.

use super::common::VertexPair;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A candidate pair and its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPair {
    pub score: f64,
    pub pair: VertexPair,
}

/// Ranking order: higher score first, then the smaller pair.
#[derive(Debug, Clone, Copy)]
struct Ranked(ScoredPair);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .score
            .total_cmp(&other.0.score)
            .then_with(|| other.0.pair.cmp(&self.0.pair))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-capacity selector. Unfilled slots behave like `-inf` sentinels:
/// any candidate is accepted until all k slots hold one.
///
/// Once full, a candidate replaces the worst retained entry only if it ranks
/// strictly higher. When candidates arrive in ascending pair order this means
/// a strictly greater score is required; ties with the minimum are dropped.
#[derive(Debug, Clone)]
pub struct TopKSelector {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopKSelector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Lowest retained score, or None while a slot is still unfilled
    pub fn threshold(&self) -> Option<f64> {
        if self.heap.len() < self.capacity {
            return None;
        }
        self.heap.peek().map(|Reverse(worst)| worst.0.score)
    }

    /// Returns true if the candidate was retained
    pub fn offer(&mut self, score: f64, pair: VertexPair) -> bool {
        self.offer_ranked(Ranked(ScoredPair { score, pair }))
    }

    fn offer_ranked(&mut self, candidate: Ranked) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(candidate));
            return true;
        }

        match self.heap.peek() {
            Some(Reverse(worst)) if candidate > *worst => {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
                true
            }
            _ => false,
        }
    }

    /// Combine two selectors; the result holds the best of both
    pub fn merge(mut self, other: TopKSelector) -> TopKSelector {
        if other.heap.len() > self.heap.len() {
            return other.merge(self);
        }
        for Reverse(candidate) in other.heap {
            self.offer_ranked(candidate);
        }
        self
    }

    /// Consume the selector into a ranking, best first
    pub fn finalize(self) -> TopK {
        // Ascending Reverse order == descending rank
        let entries = self
            .heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ranked.0)
            .collect();

        TopK {
            capacity: self.capacity,
            entries,
        }
    }
}

/// Final ranking of k slots
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopK {
    capacity: usize,
    entries: Vec<ScoredPair>,
}

impl TopK {
    /// Requested k
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Filled entries only, descending by score
    pub fn entries(&self) -> &[ScoredPair] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ScoredPair> {
        self.entries
    }

    /// Exactly `capacity` slots; `None` marks a slot no candidate filled
    pub fn slots(&self) -> impl Iterator<Item = Option<&ScoredPair>> + '_ {
        (0..self.capacity).map(move |i| self.entries.get(i))
    }

    /// True when every slot holds a candidate
    pub fn is_saturated(&self) -> bool {
        self.entries.len() == self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u64, b: u64) -> VertexPair {
        VertexPair::new(a, b)
    }

    #[test]
    fn test_keeps_best_k() {
        let mut selector = TopKSelector::new(3);
        for (i, score) in [0.5, 0.1, 0.9, 0.3, 0.7, 0.2].iter().enumerate() {
            selector.offer(*score, pair(0, i as u64 + 1));
        }

        let top = selector.finalize();
        let scores: Vec<f64> = top.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![0.9, 0.7, 0.5]);
        assert!(top.is_saturated());
    }

    #[test]
    fn test_ties_with_minimum_are_dropped() {
        let mut selector = TopKSelector::new(1);
        assert!(selector.offer(1.0, pair(1, 4)));
        assert!(!selector.offer(1.0, pair(2, 4)));

        let top = selector.finalize();
        assert_eq!(top.entries()[0].pair, pair(1, 4));
    }

    #[test]
    fn test_strictly_higher_score_evicts() {
        let mut selector = TopKSelector::new(2);
        selector.offer(1.0, pair(1, 2));
        selector.offer(1.0, pair(1, 3));
        assert_eq!(selector.threshold(), Some(1.0));
        assert!(selector.offer(2.0, pair(5, 6)));

        let top = selector.finalize();
        assert_eq!(top.entries()[0].pair, pair(5, 6));
        // The later of the two tied pairs is evicted
        assert_eq!(top.entries()[1].pair, pair(1, 2));
    }

    #[test]
    fn test_underpopulated_slots() {
        let mut selector = TopKSelector::new(4);
        assert_eq!(selector.threshold(), None);
        selector.offer(0.0, pair(1, 2));
        selector.offer(3.0, pair(1, 3));

        let top = selector.finalize();
        assert_eq!(top.capacity(), 4);
        assert_eq!(top.entries().len(), 2);
        assert!(!top.is_saturated());

        let slots: Vec<_> = top.slots().collect();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].map(|e| e.score), Some(3.0));
        assert_eq!(slots[1].map(|e| e.score), Some(0.0));
        assert!(slots[2].is_none());
        assert!(slots[3].is_none());
    }

    #[test]
    fn test_zero_capacity() {
        let mut selector = TopKSelector::new(0);
        assert!(!selector.offer(5.0, pair(1, 2)));
        assert_eq!(selector.finalize().slots().count(), 0);
    }

    #[test]
    fn test_merge_matches_single_stream() {
        let candidates: Vec<(f64, VertexPair)> = (0..40u64)
            .map(|i| (((i * 7) % 5) as f64, pair(i, i + 100)))
            .collect();

        let mut single = TopKSelector::new(6);
        for &(score, p) in &candidates {
            single.offer(score, p);
        }

        let mut left = TopKSelector::new(6);
        let mut right = TopKSelector::new(6);
        for &(score, p) in &candidates[20..] {
            right.offer(score, p);
        }
        for &(score, p) in &candidates[..20] {
            left.offer(score, p);
        }

        assert_eq!(right.merge(left).finalize(), single.finalize());
    }
}
