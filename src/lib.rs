//! Two small collection drills: regrouping a singly linked list by node
//! position, and a stack that answers its minimum in constant time.
#![no_std]

extern crate alloc;

pub mod linked_list;
pub mod stack;
