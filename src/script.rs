use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<target>\w+)\s+(?P<op>[\w-]+)(?:\s+(?P<args>.+))?$")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    List,
    Stack,
    Queue,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::List => "list",
            Target::Stack => "stack",
            Target::Queue => "queue",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    Push(String),
    Append(String),
    InsertAfter(usize, String),
    Pop,
    RemoveLast,
    RemoveAfter(usize),
    NodeAt(usize),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    Push(String),
    Pop,
    Peek,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue(String),
    Dequeue,
    Peek,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(ListOp),
    Stack(StackOp),
    Queue(QueueOp),
    Show(Target),
}

impl Command {
    /// Parse a single script line such as `list insert-after 1 x`
    pub fn parse(text: &str) -> Result<Command, String> {
        let caps = COMMAND_RE
            .captures(text)
            .ok_or_else(|| String::from("expected `<target> <operation>`"))?;
        let target = &caps["target"];
        let op = &caps["op"];
        let args: Vec<&str> = caps
            .name("args")
            .map(|a| a.as_str().split_whitespace().collect())
            .unwrap_or_default();

        let command = match (target, op) {
            ("list", "push") => Command::List(ListOp::Push(value(&args)?)),
            ("list", "append") => Command::List(ListOp::Append(value(&args)?)),
            ("list", "insert-after") => {
                let (index, value) = index_value(&args)?;
                Command::List(ListOp::InsertAfter(index, value))
            }
            ("list", "pop") => bare(&args, Command::List(ListOp::Pop))?,
            ("list", "remove-last") => {
                bare(&args, Command::List(ListOp::RemoveLast))?
            }
            ("list", "remove-after") => {
                Command::List(ListOp::RemoveAfter(index(&args)?))
            }
            ("list", "node-at") => Command::List(ListOp::NodeAt(index(&args)?)),
            ("list", "clear") => bare(&args, Command::List(ListOp::Clear))?,
            ("stack", "push") => Command::Stack(StackOp::Push(value(&args)?)),
            ("stack", "pop") => bare(&args, Command::Stack(StackOp::Pop))?,
            ("stack", "peek") => bare(&args, Command::Stack(StackOp::Peek))?,
            ("queue", "enqueue") => {
                Command::Queue(QueueOp::Enqueue(value(&args)?))
            }
            ("queue", "dequeue") => {
                bare(&args, Command::Queue(QueueOp::Dequeue))?
            }
            ("queue", "peek") => bare(&args, Command::Queue(QueueOp::Peek))?,
            ("show", "list") => bare(&args, Command::Show(Target::List))?,
            ("show", "stack") => bare(&args, Command::Show(Target::Stack))?,
            ("show", "queue") => bare(&args, Command::Show(Target::Queue))?,
            ("list" | "stack" | "queue" | "show", _) => {
                return Err(format!("unknown {} operation `{}`", target, op))
            }
            _ => return Err(format!("unknown target `{}`", target)),
        };

        Ok(command)
    }
}

/// Parse every command in a script, skipping blank lines and `#` comments.
/// Each command is paired with its 1-based line number.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, AppError> {
    let mut commands = vec![];

    for (i, line) in source.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command =
            Command::parse(text).map_err(|reason| AppError::ScriptError {
                line: i + 1,
                text: text.into(),
                reason,
            })?;
        commands.push((i + 1, command));
    }

    Ok(commands)
}

fn bare(args: &[&str], command: Command) -> Result<Command, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(String::from("operation takes no arguments"))
    }
}

fn value(args: &[&str]) -> Result<String, String> {
    match args {
        [value] => Ok(value.to_string()),
        _ => Err(String::from("expected one value")),
    }
}

fn index(args: &[&str]) -> Result<usize, String> {
    match args {
        [index] => parse_index(index),
        _ => Err(String::from("expected one index")),
    }
}

fn index_value(args: &[&str]) -> Result<(usize, String), String> {
    match args {
        [index, value] => Ok((parse_index(index)?, value.to_string())),
        _ => Err(String::from("expected an index and a value")),
    }
}

fn parse_index(text: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("`{}` is not a valid index", text))
}
