mod container;
mod linked_list;
mod node;
mod queue;
mod stack;

pub use container::Container;
pub use linked_list::LinkedList;
pub use node::{Node, NodeId, NodeRef};
pub use queue::Queue;
pub use stack::Stack;
