//! Bounded history with sliding-window append.

use std::collections::VecDeque;

/// One point of a time series: x is the sample index, y the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: u64,
    pub y: f64,
}

/// A fixed-capacity FIFO: once full, each push evicts the oldest item.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> SlidingWindow<T> {
    /// Create an empty window holding at most `capacity` items.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append `item`, evicting and returning the oldest one when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recently pushed item.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> SlidingWindow<T> {
    /// Copy the contents, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_grow_until_capacity() {
        let mut window = SlidingWindow::new(3);
        assert!(window.push(1).is_none());
        assert!(window.push(2).is_none());
        assert!(window.push(3).is_none());
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn should_evict_oldest_when_full() {
        let mut window = SlidingWindow::new(3);
        for i in 1..=3 {
            window.push(i);
        }
        assert_eq!(window.push(4), Some(1));
        assert_eq!(window.to_vec(), vec![2, 3, 4]);
        assert_eq!(window.latest(), Some(&4));
    }

    #[test]
    fn should_raise_zero_capacity_to_one() {
        let mut window = SlidingWindow::new(0);
        assert_eq!(window.capacity(), 1);
        window.push('a');
        assert_eq!(window.push('b'), Some('a'));
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn should_start_empty() {
        let window: SlidingWindow<u8> = SlidingWindow::new(4);
        assert!(window.is_empty());
        assert!(window.latest().is_none());
    }
}
