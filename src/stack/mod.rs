//! Stacks of integers with constant-time minimum queries.
//!
//! Two strategies implement the same [`prelude::MinTracking`] contract:
//!
//! - [`candidates::CandidateMinStack`] keeps a second stack holding only the
//!   values that were a minimum when pushed. This is the default
//!   [`MinStack`].
//! - [`paired::PairedMinStack`] stores the running minimum beside each value.
//!
//! # Examples
//!
//! ```
//! use beginner_dsa::stack::{MinStack, prelude::*};
//!
//! let mut stack = MinStack::new();
//! stack.push(-2);
//! stack.push(0);
//! stack.push(-3);
//! assert_eq!(stack.get_min(), Ok(-3));
//!
//! stack.pop();
//! assert_eq!(stack.top(), Ok(0));
//! assert_eq!(stack.get_min(), Ok(-2));
//!
//! stack.pop();
//! stack.pop();
//! stack.pop(); // popping an empty stack is a no-op
//! assert_eq!(stack.top(), Err(EmptyStackError::new(Query::Top)));
//! ```
mod candidates_impl;
mod error;
mod paired_impl;
mod traits;

#[cfg(test)]
mod tests;

pub mod candidates {
    pub use super::candidates_impl::*;
}

pub mod paired {
    pub use super::paired_impl::*;
}

pub mod prelude {
    pub use super::error::{EmptyStackError, Query, Result};
    pub use super::traits::*;
}

/// The default min-tracking stack.
pub type MinStack = candidates::CandidateMinStack;
