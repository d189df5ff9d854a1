//! Command-line argument definitions and parsing

use clap::{ArgGroup, Parser};

/// Main CLI application
///
/// The three operation flags are mutually exclusive; invoking with none of
/// them prints usage. The semaphore addressed defaults to the program's own
/// invocation name and can be overridden with `--name`.
#[derive(Parser, Debug)]
#[command(
    name = "semctl",
    version,
    about = "Create, inspect, and remove a POSIX named semaphore",
    long_about = "semctl is a thin command-line wrapper around the POSIX \
                  named-semaphore calls: it can create a semaphore with an \
                  initial value, print its current count, and unlink it. By \
                  default the semaphore is named after the program's own \
                  invocation name, so a copy installed as `workers` manages \
                  the semaphore `workers`."
)]
#[command(group(ArgGroup::new("operation").args(["create", "view", "remove"])))]
pub struct Cli {
    /// Create the semaphore with an initial value of N if it doesn't exist
    #[arg(
        short = 'c',
        value_name = "N",
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    pub create: Option<i32>,

    /// View the current value of the semaphore
    #[arg(short = 'v')]
    pub view: bool,

    /// Remove the semaphore
    #[arg(short = 'r')]
    pub remove: bool,

    /// Address the semaphore NAME instead of the invocation name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

/// The single operation selected for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create with the given initial value
    Create(i32),
    /// Print the current value
    View,
    /// Unlink the semaphore
    Remove,
}

impl Cli {
    /// The operation selected by the flags, if any.
    pub fn operation(&self) -> Option<Operation> {
        if let Some(initial_value) = self.create {
            Some(Operation::Create(initial_value))
        } else if self.view {
            Some(Operation::View)
        } else if self.remove {
            Some(Operation::Remove)
        } else {
            None
        }
    }
}
