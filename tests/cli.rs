//! Tests for the argument surface
//!
//! Every malformed invocation must fail at parse time, before any semaphore
//! call could be attempted.

use clap::Parser;
use pretty_assertions::assert_eq;
use semctl::args::{Cli, Operation};
use semctl::SemName;

#[test]
fn test_create_flag_parses_initial_value() {
    let cli = Cli::try_parse_from(["semctl", "-c", "5"]).unwrap();
    assert_eq!(cli.operation(), Some(Operation::Create(5)));
}

#[test]
fn test_view_and_remove_flags_parse() {
    let cli = Cli::try_parse_from(["semctl", "-v"]).unwrap();
    assert_eq!(cli.operation(), Some(Operation::View));

    let cli = Cli::try_parse_from(["semctl", "-r"]).unwrap();
    assert_eq!(cli.operation(), Some(Operation::Remove));
}

#[test]
fn test_no_arguments_selects_no_operation() {
    let cli = Cli::try_parse_from(["semctl"]).unwrap();
    assert_eq!(cli.operation(), None);
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-x"]).is_err());
}

#[test]
fn test_create_without_value_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-c"]).is_err());
}

#[test]
fn test_negative_initial_value_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-c", "-1"]).is_err());
    assert!(Cli::try_parse_from(["semctl", "-c=-1"]).is_err());
}

#[test]
fn test_overflowing_initial_value_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-c", "2147483648"]).is_err());
}

#[test]
fn test_max_initial_value_is_accepted() {
    let cli = Cli::try_parse_from(["semctl", "-c", "2147483647"]).unwrap();
    assert_eq!(cli.operation(), Some(Operation::Create(i32::MAX)));
}

#[test]
fn test_non_numeric_initial_value_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-c", "five"]).is_err());
}

#[test]
fn test_extra_positional_argument_is_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-v", "extra"]).is_err());
    assert!(Cli::try_parse_from(["semctl", "-r", "extra"]).is_err());
    assert!(Cli::try_parse_from(["semctl", "-c", "5", "extra"]).is_err());
}

#[test]
fn test_conflicting_operations_are_rejected() {
    assert!(Cli::try_parse_from(["semctl", "-c", "1", "-v"]).is_err());
    assert!(Cli::try_parse_from(["semctl", "-v", "-r"]).is_err());
}

#[test]
fn test_name_override_is_parsed() {
    let cli = Cli::try_parse_from(["semctl", "--name", "workers", "-v"]).unwrap();
    assert_eq!(cli.name.as_deref(), Some("workers"));
    assert_eq!(cli.operation(), Some(Operation::View));
}

#[test]
fn test_invocation_and_explicit_name_address_same_semaphore() {
    let derived = SemName::from_invocation("./workers").unwrap();
    let explicit = SemName::new("workers").unwrap();
    assert_eq!(derived, explicit);
}
