use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

use crate::container::Container;

const TOP_DIVIDER: &str = "------top------";
const BOTTOM_DIVIDER: &str = "---------------";

/// A last-in first-out stack. The top is the end of `storage`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    structures_macro::Container,
)]
#[serde(transparent)]
pub struct Stack<V> {
    storage: Vec<V>,
}

impl<V> Stack<V> {
    pub fn new() -> Stack<V> {
        Stack { storage: vec![] }
    }

    pub fn push(&mut self, value: V) {
        self.storage.push(value);
    }

    pub fn pop(&mut self) -> Option<V> {
        self.storage.pop()
    }

    pub fn peek(&self) -> Option<&V> {
        self.storage.last()
    }
}

impl<V> Default for Stack<V> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<V> FromIterator<V> for Stack<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> Stack<V> {
        let mut stack = Stack::new();
        for value in iterable {
            stack.push(value);
        }
        stack
    }
}

/// Renders the elements top to bottom, one per line, between dividers
impl<V: fmt::Display> fmt::Display for Stack<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self
            .storage
            .iter()
            .rev()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}\n{}\n{}", TOP_DIVIDER, elements, BOTTOM_DIVIDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        for value in ["a", "b", "c", "d"] {
            stack.push(value);
        }

        assert_eq!(stack.pop(), Some("d"));
        assert_eq!(stack.pop(), Some("c"));
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_leaves_top_in_place() {
        let mut stack: Stack<i32> = [1, 2].into_iter().collect();

        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.len(), 2);
        stack.pop();
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(Stack::<i32>::new().peek(), None);
    }

    #[test]
    fn renders_top_first() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(
            stack.to_string(),
            "------top------\n3\n2\n1\n---------------"
        );
    }

    #[test]
    fn renders_empty_stack() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(stack.to_string(), "------top------\n\n---------------");
    }

    #[test]
    fn serializes_bottom_to_top() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(serde_json::to_string(&stack).unwrap(), "[1,2,3]");

        let mut back: Stack<i32> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(back.pop(), Some(5));
    }
}
