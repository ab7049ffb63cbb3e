use std::collections::VecDeque;

/// Keeps only the most recent `cap` items pushed into it.
#[derive(Debug, Clone)]
pub struct TrailingWindow<T> {
    cap: usize,
    items: VecDeque<T>,
}

impl<T> TrailingWindow<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            items: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    pub fn push(&mut self, item: T) {
        if self.cap == 0 {
            return;
        }
        if self.items.len() == self.cap {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}
