use std::fmt;

use crate::linked_list::LinkedList;

/// Slot index of a node inside its list
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    pub value: V,
    pub next: Option<NodeId>,
}

impl<V> Node<V> {
    pub fn new(value: V, next: Option<NodeId>) -> Node<V> {
        Node { value, next }
    }
}

/// A borrowed node together with the list that owns its chain
pub struct NodeRef<'a, V> {
    list: &'a LinkedList<V>,
    id: NodeId,
    node: &'a Node<V>,
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(list: &'a LinkedList<V>, id: NodeId) -> Option<Self> {
        list.node(id).map(|node| NodeRef { list, id, node })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a V {
        &self.node.value
    }

    /// Return the following node in the chain, if any
    pub fn next(&self) -> Option<NodeRef<'a, V>> {
        self.node.next.and_then(|id| NodeRef::new(self.list, id))
    }

    pub fn is_last(&self) -> bool {
        self.node.next.is_none()
    }
}

impl<'a, V> Clone for NodeRef<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for NodeRef<'a, V> {}

impl<'a, V: fmt::Debug> fmt::Debug for NodeRef<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .field("next", &self.node.next)
            .finish()
    }
}

/// Renders the chain starting at this node, e.g. `1 -> 2 -> 3`
impl<'a, V: fmt::Display> fmt::Display for NodeRef<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())?;
        let mut current = self.next();
        while let Some(node) = current {
            write!(f, " -> {}", node.value())?;
            current = node.next();
        }
        Ok(())
    }
}
