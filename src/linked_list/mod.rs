//! Singly linked lists of integers built from owning boxes.
//!
//! Lists are plain chains of [`node::ListNode`]s; the caller keeps the head
//! [`node::Link`] and passes it by value to operations that relink nodes.
//!
//! # Examples
//!
//! ```
//! use beginner_dsa::linked_list::{node, odd_even};
//!
//! let head = node::from_values([1, 2, 3, 4, 5]);
//! assert_eq!(node::render(&head).to_string(), "1 -> 2 -> 3 -> 4 -> 5 -> NULL");
//!
//! let head = odd_even::partition(head);
//! assert_eq!(node::iter(&head).collect::<Vec<_>>(), vec![1, 3, 5, 2, 4]);
//! assert_eq!(node::len(&head), 5);
//! ```
pub mod node;
pub mod odd_even;
