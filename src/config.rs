use std::path::PathBuf;

use crate::error::AppError;

pub const USAGE: &str = "usage: lds [--json] [--verbose] [SCRIPT | -]";

/// Where script commands are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub json: bool,
    pub verbose: bool,
    pub script: Option<Source>,
}

impl Config {
    /// Build a config from command line arguments, excluding the program name
    pub fn from_args<I>(args: I) -> Result<Config, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();

        for arg in args {
            match arg.as_str() {
                "--json" => config.json = true,
                "--verbose" | "-v" => config.verbose = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::UsageError(format!(
                        "unknown option {}\n{}",
                        flag, USAGE
                    )));
                }
                path => {
                    if config.script.is_some() {
                        return Err(AppError::UsageError(format!(
                            "only one script may be given\n{}",
                            USAGE
                        )));
                    }
                    config.script = Some(if path == "-" {
                        Source::Stdin
                    } else {
                        Source::File(PathBuf::from(path))
                    });
                }
            }
        }

        Ok(config)
    }
}
