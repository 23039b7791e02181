use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::messages::Message;

static MESSAGES: Lazy<Mutex<Vec<Message>>> =
    Lazy::new(|| Mutex::new(Vec::new()));

pub fn console_log(message: &str) {
    if let Ok(mut messages) = MESSAGES.lock() {
        messages.push(Message::new(message.into()));
    }
}

pub fn get_messages() -> Vec<Message> {
    match MESSAGES.lock() {
        Ok(messages) => messages.to_vec(),
        Err(_) => vec![],
    }
}

/// Write every logged message to stderr
pub fn dump() {
    for message in get_messages() {
        eprintln!("{}", message);
    }
}

#[macro_export]
macro_rules! console {
    ($($t:tt)*) => {{
        $crate::console::console_log(&format!($($t)*));
    }};
}
