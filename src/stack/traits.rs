use super::error::Result;

/// A LIFO stack of integers that can report its minimum in constant time.
///
/// `pop` is total: popping an empty stack does nothing. The two queries are
/// partial and fail with [`EmptyStackError`](super::error::EmptyStackError)
/// when there is nothing to read.
pub trait MinTracking {
    /// Push a value onto the top of the stack.
    fn push(&mut self, value: i32);

    /// Remove the top value, if there is one.
    fn pop(&mut self);

    /// Get the top value without removing it.
    ///
    /// # Errors
    /// Fails when the stack is empty.
    fn top(&self) -> Result<i32>;

    /// Get the smallest value currently on the stack.
    ///
    /// # Errors
    /// Fails when the stack is empty.
    fn get_min(&self) -> Result<i32>;

    /// Get the number of values on the stack.
    fn len(&self) -> usize;

    /// Check if the stack is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
