use alloc::boxed::Box;
use core::fmt;

/// An owning link to the rest of a list. `None` marks the end.
pub type Link = Option<Box<ListNode>>;

/// A node in a singly linked list of integers.
///
/// Every node exclusively owns its successor, and whoever holds the head
/// [`Link`] owns the whole list.
#[derive(Debug)]
pub struct ListNode {
    pub val: i32,
    pub next: Link,
}

impl ListNode {
    /// Creates a detached node.
    pub const fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Builds a list holding `values` in iteration order.
    pub fn from_values<I>(values: I) -> Link
    where
        I: IntoIterator<Item = i32>,
    {
        from_values(values)
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Builds a list holding `values` in iteration order.
pub fn from_values<I>(values: I) -> Link
where
    I: IntoIterator<Item = i32>,
{
    let mut head: Link = None;
    let mut tail = &mut head;
    for val in values {
        tail = &mut tail.insert(Box::new(ListNode::new(val))).next;
    }
    head
}

/// Returns an iterator over the values of the list starting at `head`.
pub fn iter(head: &Link) -> Iter<'_> {
    Iter {
        next: head.as_deref(),
    }
}

/// Counts the nodes reachable from `head`.
pub fn len(head: &Link) -> usize {
    iter(head).count()
}

/// Formats a list as `1 -> 2 -> NULL`.
pub fn render(head: &Link) -> Render<'_> {
    Render(head)
}

/// Borrowing iterator over list values, front to back.
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.val
        })
    }
}

/// Display adapter returned by [`render`].
pub struct Render<'a>(&'a Link);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in iter(self.0) {
            write!(f, "{} -> ", val)?;
        }
        f.write_str("NULL")
    }
}
