use std::fmt;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct Message {
    time: DateTime<Local>,
    content: String,
}

impl Message {
    pub fn new(content: String) -> Message {
        Message {
            time: Local::now(),
            content,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time.format("%H:%M:%S%.3f"), self.content)
    }
}
