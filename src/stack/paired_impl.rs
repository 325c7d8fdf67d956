use alloc::vec::Vec;

use super::error::{EmptyStackError, Query, Result};
use super::traits::MinTracking;

/// A value together with the stack minimum at the moment it was pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    value: i32,
    min: i32,
}

/// A min-tracking stack that stores the running minimum next to every value.
///
/// Uses one slot per element where [`CandidateMinStack`] only records
/// candidates, but never has to compare on pop.
///
/// [`CandidateMinStack`]: super::candidates::CandidateMinStack
#[derive(Debug, Default, Clone)]
pub struct PairedMinStack {
    entries: Vec<Entry>,
}

impl PairedMinStack {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl MinTracking for PairedMinStack {
    fn push(&mut self, value: i32) {
        let min = match self.entries.last() {
            Some(top) => top.min.min(value),
            None => value,
        };
        self.entries.push(Entry { value, min });
    }

    fn pop(&mut self) {
        self.entries.pop();
    }

    fn top(&self) -> Result<i32> {
        self.entries
            .last()
            .map(|entry| entry.value)
            .ok_or(EmptyStackError::new(Query::Top))
    }

    fn get_min(&self) -> Result<i32> {
        self.entries
            .last()
            .map(|entry| entry.min)
            .ok_or(EmptyStackError::new(Query::Min))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<i32> for PairedMinStack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}
