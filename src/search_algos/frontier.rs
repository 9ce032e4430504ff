use std::{cmp::Ordering, collections::BinaryHeap};


/// Min-priority queue used by the weighted search
/// Equal priorities pop in insertion order, so results are deterministic
/// The same item may be pushed several times; callers discard stale copies on pop
#[derive(Debug)]
pub struct PriorityFrontier<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: PartialOrd> Default for PriorityFrontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> PriorityFrontier<T, P> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// O(log n)
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Entry {
            item,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Remove the item with the smallest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}


/// Heap entry - only priority and insertion order take part in ordering
#[derive(Debug)]
struct Entry<T, P> {
    item: T,
    priority: P,
    seq: u64,
}

impl<T, P: PartialOrd> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the biggest entry, so both comparisons are reversed
        // Incomparable priorities (NaN) count as equal; cost models reject them upfront
        other.priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T, P: PartialOrd> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: PartialOrd> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T, P: PartialOrd> Eq for Entry<T, P> {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(1, 1.1);
        frontier.push(2, 0.3);
        frontier.push(3, 0.6);

        let order: Vec<i32> = std::iter::from_fn(|| frontier.pop().map(|(item, _)| item)).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for item in ["a", "b", "c"] {
            frontier.push(item, 5.0);
        }
        frontier.push("first", 1.0);

        assert_eq!(frontier.pop(), Some(("first", 1.0)));
        assert_eq!(frontier.pop(), Some(("a", 5.0)));
        assert_eq!(frontier.pop(), Some(("b", 5.0)));
        assert_eq!(frontier.pop(), Some(("c", 5.0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_duplicates_coexist() {
        let mut frontier = PriorityFrontier::new();
        frontier.push('x', 9.0);
        frontier.push('x', 4.0);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some(('x', 4.0)));
        assert_eq!(frontier.pop(), Some(('x', 9.0)));
    }
}
