use log::debug;

use super::node::Link;

/// Regroups a list so the nodes at odd positions (1st, 3rd, 5th, ...) come
/// first, followed by the nodes at even positions, each group keeping its
/// original relative order.
///
/// The nodes themselves are reused: only their `next` links are rewritten, so
/// nothing is allocated or freed. Empty and single-node lists come back
/// unchanged.
///
/// ```
/// use beginner_dsa::linked_list::{node, odd_even::partition};
///
/// let head = partition(node::from_values([1, 2, 3, 4, 5]));
/// assert_eq!(node::render(&head).to_string(), "1 -> 3 -> 5 -> 2 -> 4 -> NULL");
/// ```
pub fn partition(mut head: Link) -> Link {
    if head.as_ref().is_none_or(|node| node.next.is_none()) {
        return head;
    }

    let mut odd_head: Link = None;
    let mut even_head: Link = None;
    let mut odd_tail = &mut odd_head;
    let mut even_tail = &mut even_head;
    let (mut odd_count, mut even_count) = (0usize, 0usize);

    // Detach nodes from the front one at a time and hand them out alternately.
    while let Some(mut node) = head {
        head = node.next.take();
        if odd_count == even_count {
            odd_tail = &mut odd_tail.insert(node).next;
            odd_count += 1;
        } else {
            even_tail = &mut even_tail.insert(node).next;
            even_count += 1;
        }
    }

    debug!(
        "partitioned list: {} odd-position nodes, {} even-position nodes",
        odd_count, even_count
    );

    *odd_tail = even_head;
    odd_head
}
