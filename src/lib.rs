//! semctl: create, inspect, and remove POSIX named semaphores
//!
//! This library backs the `semctl` command-line tool. It wraps the three
//! OS-level operations on a named counting semaphore — atomic
//! create-if-absent, reading the current count, and unlinking — behind a
//! validated [`SemName`] identity and a typed error enum.
//!
//! The two expected collisions (the semaphore already exists on create, or
//! does not exist on read/remove) are not errors; they are modeled as
//! informational outcomes. Only unexpected OS failures surface as
//! [`SemCtlError`], carrying the syscall name and the underlying errno.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use semctl::{sem, CreateOutcome, ReadOutcome, SemName};
//!
//! fn main() -> semctl::Result<()> {
//!     let name = SemName::new("workers")?;
//!
//!     match sem::create(&name, 4)? {
//!         CreateOutcome::Created => println!("created"),
//!         CreateOutcome::AlreadyExists => println!("already there"),
//!     }
//!
//!     if let ReadOutcome::Value(v) = sem::value(&name)? {
//!         println!("{v} units available");
//!     }
//!
//!     sem::remove(&name)?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`name`]: validated semaphore identity, including derivation from the
//!   program's invocation path
//! - [`sem`]: the raw syscall wrappers and their outcome types
//! - [`ops`]: command handlers that print human-readable results
//! - [`args`]: the clap argument surface used by the binary
//! - [`error`]: the typed error enum and `Result` alias

// Public API exports
pub use error::{Result, SemCtlError};
pub use name::SemName;
pub use sem::{CreateOutcome, ReadOutcome, RemoveOutcome};

pub mod args;
pub mod error;
pub mod name;
pub mod ops;
pub mod sem;
