//! Generic array-backed binary min-heap.

/// Starting capacity of the backing storage.
const INITIAL_CAPACITY: usize = 10;

/// Array-backed binary min-heap over any totally ordered element type.
///
/// `pop` always yields the smallest element currently stored. The
/// backing vector starts at capacity 10 and doubles whenever it fills,
/// so `push` never fails for a valid element. Sifting compares with
/// strict `<`, so equal keys carry no ordering guarantee between each
/// other.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an element in O(log n) amortized.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum element in O(log n).
    ///
    /// Returns `None` on an empty heap; emptiness is a normal state,
    /// not a fault.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Move the element at `idx` up until its parent is no larger.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx] < self.items[parent] {
                self.items.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `idx` down until neither child is smaller.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_empty_returns_none() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
        // Still usable afterwards.
        heap.push(7);
        assert_eq!(heap.pop(), Some(7));
    }

    #[test]
    fn test_pop_yields_ascending_order() {
        let mut heap = MinHeap::new();
        for value in [5, 3, 8, 1, 9, 2] {
            heap.push(value);
        }

        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            drained.push(value);
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_duplicates_all_returned() {
        let mut heap = MinHeap::new();
        for value in [2, 1, 2, 1] {
            heap.push(value);
        }
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_len_tracking() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.len(), 0);
        heap.push(4);
        heap.push(6);
        assert_eq!(heap.len(), 2);
        heap.pop();
        assert_eq!(heap.len(), 1);
        heap.pop();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_interleaved_matches_sorted_reference() {
        // Reproducible pseudo-random values via a linear congruential
        // generator, checked against a sorted reference list.
        let mut heap = MinHeap::new();
        let mut reference: Vec<u32> = Vec::new();
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;

        for round in 0..500 {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let value = (seed >> 33) as u32;

            heap.push(value);
            reference.push(value);

            if round % 3 == 2 {
                reference.sort_unstable();
                let expected = reference.remove(0);
                assert_eq!(heap.pop(), Some(expected));
            }
        }

        reference.sort_unstable();
        for expected in reference {
            assert_eq!(heap.pop(), Some(expected));
        }
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_growth_beyond_initial_capacity() {
        let mut heap = MinHeap::new();
        for value in (0..100).rev() {
            heap.push(value);
        }
        assert_eq!(heap.len(), 100);
        for expected in 0..100 {
            assert_eq!(heap.pop(), Some(expected));
        }
    }
}
