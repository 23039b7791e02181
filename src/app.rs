use serde::Serialize;
use structures_core::{LinkedList, Queue, Stack};

use crate::console;
use crate::script::{Command, ListOp, QueueOp, StackOp, Target};

const NONE: &str = "none";

/// Final state of every structure, as written by `--json`
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub list: &'a LinkedList<String>,
    pub stack: &'a Stack<String>,
    pub queue: &'a Queue<String>,
}

pub struct App {
    pub list: LinkedList<String>,
    pub stack: Stack<String>,
    pub queue: Queue<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
            stack: Stack::new(),
            queue: Queue::new(),
        }
    }

    /// Run a command and return the text to print for it, if any
    pub fn do_action(&mut self, command: Command) -> Option<String> {
        match command {
            Command::List(op) => self.list_action(op),
            Command::Stack(op) => self.stack_action(op),
            Command::Queue(op) => self.queue_action(op),
            Command::Show(target) => {
                console!("show {}", target);
                Some(self.render(target))
            }
        }
    }

    pub fn render(&self, target: Target) -> String {
        match target {
            Target::List => self.list.to_string(),
            Target::Stack => self.stack.to_string(),
            Target::Queue => self.queue.to_string(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            list: &self.list,
            stack: &self.stack,
            queue: &self.queue,
        }
    }

    fn list_action(&mut self, op: ListOp) -> Option<String> {
        match op {
            ListOp::Push(value) => {
                console!("list push {}", value);
                self.list.push(value);
                None
            }
            ListOp::Append(value) => {
                console!("list append {}", value);
                self.list.append(value);
                None
            }
            ListOp::InsertAfter(index, value) => {
                if self.list.node_at(index).is_none() {
                    console!("list insert-after {}: no such node", index);
                } else {
                    console!("list insert-after {} {}", index, value);
                }
                self.list.insert_after(index, value);
                None
            }
            ListOp::Pop => Some(found("list pop", self.list.pop())),
            ListOp::RemoveLast => {
                Some(found("list remove-last", self.list.remove_last()))
            }
            ListOp::RemoveAfter(index) => Some(found(
                &format!("list remove-after {}", index),
                self.list.remove_after(index),
            )),
            ListOp::NodeAt(index) => Some(found(
                &format!("list node-at {}", index),
                self.list.node_at(index).map(|n| n.value().clone()),
            )),
            ListOp::Clear => {
                console!("list clear");
                self.list.clear();
                None
            }
        }
    }

    fn stack_action(&mut self, op: StackOp) -> Option<String> {
        match op {
            StackOp::Push(value) => {
                console!("stack push {}", value);
                self.stack.push(value);
                None
            }
            StackOp::Pop => Some(found("stack pop", self.stack.pop())),
            StackOp::Peek => {
                Some(found("stack peek", self.stack.peek().cloned()))
            }
        }
    }

    fn queue_action(&mut self, op: QueueOp) -> Option<String> {
        match op {
            QueueOp::Enqueue(value) => {
                console!("queue enqueue {}", value);
                self.queue.enqueue(value);
                None
            }
            QueueOp::Dequeue => {
                Some(found("queue dequeue", self.queue.dequeue()))
            }
            QueueOp::Peek => {
                Some(found("queue peek", self.queue.peek().cloned()))
            }
        }
    }
}

/// Log an operation result and turn it into printable text
fn found(action: &str, value: Option<String>) -> String {
    match value {
        Some(value) => {
            console!("{} -> {}", action, value);
            value
        }
        None => {
            console!("{} -> {}", action, NONE);
            NONE.into()
        }
    }
}
