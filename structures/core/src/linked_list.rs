use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::{Node, NodeId, NodeRef};

/// A singly linked list whose nodes live in a slot table.
///
/// `head` owns the chain; `tail` is an alias for the last slot in that chain.
/// Removed slots are kept on a free list and reused by later insertions.
#[derive(Clone)]
pub struct LinkedList<V> {
    nodes: Vec<Option<Node<V>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<V> LinkedList<V> {
    pub fn new() -> LinkedList<V> {
        LinkedList {
            nodes: vec![],
            free: vec![],
            head: None,
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Return the number of nodes reachable from the head
    pub fn len(&self) -> usize {
        self.values().count()
    }

    pub fn head(&self) -> Option<NodeRef<'_, V>> {
        self.head.and_then(|id| NodeRef::new(self, id))
    }

    pub fn tail(&self) -> Option<NodeRef<'_, V>> {
        self.tail.and_then(|id| NodeRef::new(self, id))
    }

    /// Add a value as the new head
    pub fn push(&mut self, value: V) {
        let id = self.alloc(Node::new(value, self.head));
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    /// Add a value as the new tail
    pub fn append(&mut self, value: V) {
        match self.tail {
            None => self.push(value),
            Some(tail) => {
                let id = self.alloc(Node::new(value, None));
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(id);
                }
                self.tail = Some(id);
            }
        }
    }

    /// Return the node `index` links away from the head
    pub fn node_at(&self, index: usize) -> Option<NodeRef<'_, V>> {
        self.find(index).and_then(|id| NodeRef::new(self, id))
    }

    /// Insert a value after the node at `index`. Does nothing if there is no
    /// node at that index.
    pub fn insert_after(&mut self, index: usize, value: V) {
        let at = match self.find(index) {
            Some(id) => id,
            None => return,
        };
        let next = self.node(at).and_then(|n| n.next);
        let id = self.alloc(Node::new(value, next));
        if let Some(node) = self.node_mut(at) {
            node.next = Some(id);
        }
        if next.is_none() {
            self.tail = Some(id);
        }
    }

    /// Remove and return the head value
    pub fn pop(&mut self) -> Option<V> {
        let head = self.head?;
        let node = self.release(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    /// Remove and return the tail value
    pub fn remove_last(&mut self) -> Option<V> {
        let head = self.head?;
        let mut current = match self.node(head)?.next {
            Some(id) => id,
            None => return self.pop(),
        };

        let mut previous = head;
        while let Some(next) = self.node(current)?.next {
            previous = current;
            current = next;
        }

        self.node_mut(previous)?.next = None;
        self.tail = Some(previous);
        self.release(current).map(|n| n.value)
    }

    /// Remove and return the value following the node at `index`
    pub fn remove_after(&mut self, index: usize) -> Option<V> {
        if self.is_empty() {
            return None;
        }
        let at = self.find(index)?;
        let removed = self.node(at)?.next?;
        let after = self.node(removed)?.next;

        if self.tail == Some(removed) {
            self.tail = Some(at);
        }
        self.node_mut(at)?.next = after;
        self.release(removed).map(|n| n.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id)?.as_mut()
    }

    fn find(&self, index: usize) -> Option<NodeId> {
        let mut current = self.head;
        for _ in 0..index {
            current = self.node(current?)?.next;
        }
        current
    }

    fn alloc(&mut self, node: Node<V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<V>> {
        let node = self.nodes.get_mut(id)?.take()?;
        self.free.push(id);
        Some(node)
    }

    fn values(&self) -> Values<'_, V> {
        Values {
            next: self.head(),
        }
    }
}

struct Values<'a, V> {
    next: Option<NodeRef<'a, V>>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node.value())
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<V> FromIterator<V> for LinkedList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> LinkedList<V> {
        let mut list = LinkedList::new();
        for value in iterable {
            list.append(value);
        }
        list
    }
}

impl<V: PartialEq> PartialEq for LinkedList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl<V: Eq> Eq for LinkedList<V> {}

impl<V: fmt::Display> fmt::Display for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.head() {
            None => write!(f, "Linked list is empty"),
            Some(head) => write!(f, "{}", head),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList ")?;
        f.debug_list().entries(self.values()).finish()
    }
}

impl<V: Serialize> Serialize for LinkedList<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for LinkedList<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<V>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> LinkedList<&'static str> {
        ["a", "b", "c"].into_iter().collect()
    }

    fn assert_ends(list: &LinkedList<&str>, head: Option<&str>, tail: Option<&str>) {
        assert_eq!(list.head().map(|n| *n.value()), head);
        assert_eq!(list.tail().map(|n| *n.value()), tail);
        if let Some(tail) = list.tail() {
            assert!(tail.is_last());
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list: LinkedList<i32> = LinkedList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_eq!(list.to_string(), "Linked list is empty");
    }

    #[test]
    fn push_then_pop_restores_empty() {
        let mut list = LinkedList::new();
        list.push("v");
        assert_ends(&list, Some("v"), Some("v"));

        assert_eq!(list.pop(), Some("v"));
        assert!(list.is_empty());
        assert_ends(&list, None, None);
    }

    #[test]
    fn push_keeps_tail() {
        let mut list = LinkedList::new();
        list.push("b");
        list.push("a");

        assert_ends(&list, Some("a"), Some("b"));
        assert_eq!(list.to_string(), "a -> b");
    }

    #[test]
    fn append_then_pop_in_order() {
        let mut list = LinkedList::new();
        list.append("v1");
        list.append("v2");

        assert_eq!(list.pop(), Some("v1"));
        assert_ends(&list, Some("v2"), Some("v2"));
        assert_eq!(list.pop(), Some("v2"));
        assert!(list.is_empty());
        assert_eq!(list.pop(), None);
    }

    #[test]
    fn pop_drains_appended_values() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.append(1);
        list.append(2);
        list.append(3);

        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), Some(3));
        assert!(list.is_empty());
        assert!(list.tail().is_none());
    }

    #[test]
    fn node_at_walks_from_head() {
        let list = abc();

        assert_eq!(list.node_at(0).map(|n| *n.value()), Some("a"));
        assert_eq!(list.node_at(1).map(|n| *n.value()), Some("b"));
        assert_eq!(list.node_at(2).map(|n| *n.value()), Some("c"));
        assert!(list.node_at(3).is_none());
        assert!(list.node_at(usize::MAX).is_none());
        assert!(LinkedList::<i32>::new().node_at(0).is_none());
    }

    #[test]
    fn insert_after_links_new_node() {
        let mut list = abc();
        list.insert_after(1, "x");

        assert_eq!(list.to_string(), "a -> b -> x -> c");
        assert_ends(&list, Some("a"), Some("c"));
    }

    #[test]
    fn insert_after_out_of_range_is_noop() {
        let mut list = abc();
        list.insert_after(99, "x");
        assert_eq!(list, abc());

        let mut empty = LinkedList::new();
        empty.insert_after(0, "x");
        assert!(empty.is_empty());
    }

    #[test]
    fn insert_after_last_node_moves_tail() {
        let mut list = abc();
        list.insert_after(2, "d");
        assert_ends(&list, Some("a"), Some("d"));

        list.append("e");
        assert_eq!(list.to_string(), "a -> b -> c -> d -> e");
        assert_eq!(list.remove_last(), Some("e"));
        assert_eq!(list.remove_last(), Some("d"));
        assert_ends(&list, Some("a"), Some("c"));
    }

    #[test]
    fn remove_last_walks_to_tail() {
        let mut list = abc();

        assert_eq!(list.remove_last(), Some("c"));
        assert_ends(&list, Some("a"), Some("b"));
        assert_eq!(list.remove_last(), Some("b"));
        assert_ends(&list, Some("a"), Some("a"));
        assert_eq!(list.remove_last(), Some("a"));
        assert_ends(&list, None, None);
        assert_eq!(list.remove_last(), None);
    }

    #[test]
    fn remove_after_unlinks_following_node() {
        let mut list = abc();

        assert_eq!(list.remove_after(0), Some("b"));
        assert_eq!(list.to_string(), "a -> c");
        assert_ends(&list, Some("a"), Some("c"));
    }

    #[test]
    fn remove_after_tail_predecessor_moves_tail() {
        let mut list = abc();

        assert_eq!(list.remove_after(1), Some("c"));
        assert_ends(&list, Some("a"), Some("b"));
        list.append("d");
        assert_eq!(list.to_string(), "a -> b -> d");
    }

    #[test]
    fn remove_after_without_successor() {
        let mut list = abc();

        assert_eq!(list.remove_after(2), None);
        assert_eq!(list.remove_after(7), None);
        assert_eq!(list, abc());
        assert_eq!(LinkedList::<i32>::new().remove_after(0), None);
    }

    #[test]
    fn mixed_operations_keep_ends_consistent() {
        let mut list = LinkedList::new();
        list.append(2);
        list.push(1);
        list.append(3);
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove_last(), Some(3));
        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list.head().map(|n| n.id()), list.tail().map(|n| n.id()));

        assert_eq!(list.pop(), Some(2));
        assert!(list.is_empty());
        assert!(list.head().is_none() && list.tail().is_none());
    }

    #[test]
    fn released_slots_are_reused() {
        let mut list = LinkedList::new();
        list.append(1);
        list.append(2);
        let freed = list.node_at(0).map(|n| n.id());

        list.pop();
        list.push(0);
        assert_eq!(list.head().map(|n| n.id()), freed);
        assert_eq!(list.to_string(), "0 -> 2");
    }

    #[test]
    fn clear_resets_list() {
        let mut list = abc();
        list.clear();

        assert!(list.is_empty());
        assert!(list.tail().is_none());
        list.append("z");
        assert_ends(&list, Some("z"), Some("z"));
    }

    #[test]
    fn debug_lists_values() {
        let list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", list), "LinkedList [1, 2]");
    }

    #[test]
    fn serializes_as_sequence() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: LinkedList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.tail().map(|n| *n.value()), Some(3));
    }
}
