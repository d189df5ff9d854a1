//! Command handlers that bridge CLI arguments to semaphore operations
//!
//! One handler per operation. Each performs the single OS call sequence and
//! prints a human-readable result line to stdout. Informational outcomes
//! (already exists, not found) are successful results here; only unexpected
//! OS failures propagate as errors.

use log::debug;

use crate::error::Result;
use crate::name::SemName;
use crate::sem::{self, CreateOutcome, ReadOutcome, RemoveOutcome};

/// Execute the create command
pub fn run_create(name: &SemName, initial_value: i32) -> Result<()> {
    debug!("create: name={name} initial_value={initial_value}");
    match sem::create(name, initial_value)? {
        CreateOutcome::Created => {
            println!(
                "Created the semaphore named \"{name}\" with an initial value of {initial_value}."
            );
        }
        CreateOutcome::AlreadyExists => {
            println!("The semaphore named \"{name}\" already exists.");
        }
    }
    Ok(())
}

/// Execute the view command
pub fn run_view(name: &SemName) -> Result<()> {
    debug!("view: name={name}");
    match sem::value(name)? {
        ReadOutcome::Value(value) => {
            println!("The value of the semaphore named \"{name}\" is {value}.");
        }
        ReadOutcome::NotFound => {
            println!("The semaphore named \"{name}\" does not exist yet.");
            println!(
                "You must create it first by running \"{name} -c N\", \
                 where N is the initial value of the semaphore."
            );
        }
    }
    Ok(())
}

/// Execute the remove command
pub fn run_remove(name: &SemName) -> Result<()> {
    debug!("remove: name={name}");
    match sem::remove(name)? {
        RemoveOutcome::Removed => {
            println!("Removed the semaphore named \"{name}\".");
        }
        RemoveOutcome::NotFound => {
            println!("The semaphore named \"{name}\" did not exist.");
        }
    }
    Ok(())
}
