extern crate std;

use crate::stack::{paired::PairedMinStack, prelude::*};

#[test]
fn test_paired_demonstration() {
    let mut stack = PairedMinStack::new();
    stack.push(-2);
    stack.push(0);
    stack.push(-3);
    assert_eq!(stack.get_min(), Ok(-3));

    stack.pop();
    assert_eq!(stack.top(), Ok(0));
    assert_eq!(stack.get_min(), Ok(-2));
}

#[test]
fn test_paired_duplicate_minimum() {
    let mut stack: PairedMinStack = [5, 5].into_iter().collect();
    stack.pop();
    assert_eq!(stack.get_min(), Ok(5));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_paired_empty() {
    let mut stack = PairedMinStack::new();
    assert_eq!(stack.top(), Err(EmptyStackError::new(Query::Top)));
    assert_eq!(stack.get_min(), Err(EmptyStackError::new(Query::Min)));

    stack.pop();
    assert!(stack.is_empty());
}
