mod app;
mod config;
mod console;
mod error;
mod messages;
mod script;

use app::App;
use config::{Config, Source};
use error::AppError;
use script::parse_script;
use std::{
    env, fs,
    io::{self, Read},
};
use structures_core::Queue;

fn main() -> Result<(), AppError> {
    // Process command line args
    let config = Config::from_args(env::args().skip(1))?;

    let result = match &config.script {
        Some(source) => run_script(source, &config),
        None => run_demo(&config),
    };

    if config.verbose {
        console::dump();
    }

    result
}

/// Enqueue a few values, then show the queue before and after a dequeue
fn run_demo(config: &Config) -> Result<(), AppError> {
    let mut queue = Queue::new();
    for value in [10, 2, 34, 55] {
        queue.enqueue(value);
        console!("queue enqueue {}", value);
    }
    println!("{}", queue);

    println!("Before dequeue() ");

    let front = queue.dequeue();
    console!("queue dequeue -> {:?}", front);

    println!("{}", queue);

    println!("After dequeue() ");

    if config.json {
        println!("{}", serde_json::to_string(&queue)?);
    }

    Ok(())
}

fn run_script(source: &Source, config: &Config) -> Result<(), AppError> {
    let text = match source {
        Source::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
        Source::File(path) => fs::read_to_string(path)?,
    };

    let commands = parse_script(&text)?;
    console!("loaded {} commands", commands.len());

    let mut app = App::new();
    for (_, command) in commands {
        if let Some(output) = app.do_action(command) {
            println!("{}", output);
        }
    }

    if config.json {
        println!("{}", serde_json::to_string(&app.snapshot())?);
    }

    Ok(())
}
