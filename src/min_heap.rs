//! Array-backed binary min-heap used to order tree construction candidates.
//!
//! Elements are keyed by [`Weighted::weight`]. Equal weights are not
//! tie-broken: their relative order falls out of the sift operations.

/// Anything the heap can order.
pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Heap pre-sized for `capacity` elements, typically the number of
    /// distinct symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    #[inline]
    fn left(i: usize) -> usize {
        2 * i + 1
    }
}

impl<T: Weighted> MinHeap<T> {
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Append `value` and sift it up while it is lighter than its parent.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.elements.len() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i].weight() < self.elements[p].weight() {
                self.elements.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    /// Remove and return the lightest element.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        self.sift_down(0);
        min
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let l = Self::left(i);
            if l >= n {
                break;
            }
            let r = l + 1;
            let mut child = l;
            if r < n && self.elements[r].weight() < self.elements[l].weight() {
                child = r;
            }
            if self.elements[child].weight() < self.elements[i].weight() {
                self.elements.swap(child, i);
                i = child;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len())
            .all(|i| self.elements[Self::parent(i)].weight() <= self.elements[i].weight())
    }
}
