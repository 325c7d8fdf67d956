use alloc::vec::Vec;

use log::trace;

use super::error::{EmptyStackError, Query, Result};
use super::traits::MinTracking;

/// A min-tracking stack backed by a second stack of candidate minimums.
///
/// `minimums` is non-increasing from bottom to top and its top is always the
/// minimum of `items`. A pushed value becomes a candidate when it is less than
/// *or equal to* the current minimum, so every copy of a repeated minimum is
/// recorded and popping one copy still leaves the others reported.
#[derive(Debug, Default, Clone)]
pub struct CandidateMinStack {
    items: Vec<i32>,
    minimums: Vec<i32>,
}

impl CandidateMinStack {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            minimums: Vec::new(),
        }
    }

    /// Number of candidate minimums currently recorded.
    pub fn candidates(&self) -> usize {
        self.minimums.len()
    }
}

impl MinTracking for CandidateMinStack {
    fn push(&mut self, value: i32) {
        self.items.push(value);
        if self.minimums.last().is_none_or(|&min| value <= min) {
            trace!("new minimum candidate {}", value);
            self.minimums.push(value);
        }
    }

    fn pop(&mut self) {
        let Some(removed) = self.items.pop() else {
            return;
        };
        if self.minimums.last() == Some(&removed) {
            trace!("retiring minimum candidate {}", removed);
            self.minimums.pop();
        }
    }

    fn top(&self) -> Result<i32> {
        self.items
            .last()
            .copied()
            .ok_or(EmptyStackError::new(Query::Top))
    }

    fn get_min(&self) -> Result<i32> {
        self.minimums
            .last()
            .copied()
            .ok_or(EmptyStackError::new(Query::Min))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl Extend<i32> for CandidateMinStack {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for CandidateMinStack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
