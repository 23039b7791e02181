use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

use crate::container::Container;

/// A first-in first-out queue. The front is the start of `storage`.
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
pub struct Queue<V> {
    storage: Vec<V>,
}

impl<V> Queue<V> {
    pub fn new() -> Queue<V> {
        Queue { storage: vec![] }
    }

    /// Return the front element without removing it
    pub fn peek(&self) -> Option<&V> {
        self.storage.first()
    }

    /// Add a value to the back. Always succeeds on an unbounded queue.
    pub fn enqueue(&mut self, value: V) -> bool {
        self.storage.push(value);
        true
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> Option<V> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage.remove(0))
        }
    }
}

impl<V> Default for Queue<V> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<V> FromIterator<V> for Queue<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> Queue<V> {
        let mut queue = Queue::new();
        for value in iterable {
            queue.enqueue(value);
        }
        queue
    }
}

impl<V: fmt::Display> fmt::Display for Queue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self
            .storage
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", elements)
    }
}
