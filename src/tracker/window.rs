use std::collections::VecDeque;

/// Fixed-capacity FIFO of decisive results, `true` for a win.
///
/// Pushing onto a full window evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentWindow {
    capacity: usize,
    results: VecDeque<bool>,
}

impl RecentWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            results: VecDeque::new(),
        }
    }

    pub fn push(&mut self, won: bool) {
        self.results.push_back(won);
        while self.results.len() > self.capacity {
            self.results.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.results.iter().filter(|&&won| won).count()
    }

    pub fn losses(&self) -> usize {
        self.len() - self.wins()
    }

    /// Most recent result, if any
    pub fn latest(&self) -> Option<bool> {
        self.results.back().copied()
    }

    /// Results from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.results.iter().copied()
    }
}
