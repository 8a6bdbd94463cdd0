//! Monotonic bucket queue for small non-negative integer priorities.
//!
//! Items are plain indices (tile ids in practice). Each bucket holds the head
//! of an intrusive singly linked chain of items sharing that priority; the
//! chain links live in a flat `next` array indexed by item, so the queue stops
//! allocating once it has seen the largest item and priority.

/// Empty-slot marker for bucket heads and chain links.
const NIL: usize = usize::MAX;

/// A priority queue specialised for small integer priorities.
///
/// - [`insert`](Self::insert) is O(1) amortised.
/// - [`pop_min`](Self::pop_min) scans buckets upward from a maintained floor.
/// - [`decrease_priority`](Self::decrease_priority) is O(chain length).
///
/// Items sharing a priority come out most-recently-inserted first.
#[derive(Debug, Clone)]
pub struct BucketQueue {
    buckets: Vec<usize>,
    next: Vec<usize>,
    len: usize,
    // Every bucket below `floor` is empty while `len > 0`.
    floor: usize,
}

impl Default for BucketQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            next: Vec::new(),
            len: 0,
            floor: 0,
        }
    }

    /// Create an empty queue with room for `items` distinct items and
    /// priorities up to `max_priority`.
    pub fn with_capacity(items: usize, max_priority: u32) -> Self {
        Self {
            buckets: vec![NIL; max_priority as usize + 1],
            next: vec![NIL; items],
            len: 0,
            floor: 0,
        }
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated buckets. Never shrinks.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Queue `item` at `priority`.
    ///
    /// The item must not already be queued.
    pub fn insert(&mut self, item: usize, priority: u32) {
        debug_assert!(item != NIL, "item index out of range");
        let p = priority as usize;
        if p >= self.buckets.len() {
            self.buckets.resize(p + 1, NIL);
        }
        if item >= self.next.len() {
            self.next.resize(item + 1, NIL);
        }

        self.next[item] = self.buckets[p];
        self.buckets[p] = item;

        if self.len == 0 || p < self.floor {
            self.floor = p;
        }
        self.len += 1;
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop_min(&mut self) -> Option<usize> {
        self.pop_min_with_priority().map(|(item, _)| item)
    }

    /// Remove the item with the lowest priority, also returning the priority.
    pub fn pop_min_with_priority(&mut self) -> Option<(usize, u32)> {
        if self.len == 0 {
            return None;
        }
        for p in self.floor..self.buckets.len() {
            let head = self.buckets[p];
            if head == NIL {
                continue;
            }
            self.buckets[p] = self.next[head];
            self.next[head] = NIL;
            self.len -= 1;
            self.floor = p;
            return Some((head, p as u32));
        }
        None
    }

    /// Move a queued `item` from bucket `old` to bucket `new`.
    ///
    /// The count of queued items is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `item` is not queued at priority `old`.
    pub fn decrease_priority(&mut self, item: usize, old: u32, new: u32) {
        let p = old as usize;
        assert!(
            p < self.buckets.len(),
            "item {item} is not queued at priority {old}"
        );

        let mut cur = self.buckets[p];
        if cur == item {
            self.buckets[p] = self.next[item];
        } else {
            loop {
                assert!(cur != NIL, "item {item} is not queued at priority {old}");
                let nx = self.next[cur];
                if nx == item {
                    self.next[cur] = self.next[item];
                    break;
                }
                cur = nx;
            }
        }

        self.len -= 1;
        self.insert(item, new);
    }

    /// Remove every item. Bucket capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.fill(NIL);
        self.next.fill(NIL);
        self.len = 0;
        self.floor = 0;
    }
}
