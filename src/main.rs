use anyhow::Result;
use clap::{CommandFactory, Parser};

use semctl::{
    args::{Cli, Operation},
    name::SemName,
    ops,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // No operation flag at all: print usage and exit successfully.
    let Some(operation) = cli.operation() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let name = match &cli.name {
        Some(name) => SemName::new(name.clone())?,
        None => SemName::from_invocation(&invocation_name())?,
    };

    match operation {
        Operation::Create(initial_value) => ops::run_create(&name, initial_value)?,
        Operation::View => ops::run_view(&name)?,
        Operation::Remove => ops::run_remove(&name)?,
    }

    Ok(())
}

/// argv[0], falling back to the crate name if the OS provides none.
fn invocation_name() -> String {
    std::env::args().next().unwrap_or_else(|| "semctl".to_string())
}
