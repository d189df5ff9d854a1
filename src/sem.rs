//! Thin wrappers around the POSIX named-semaphore syscalls
//!
//! Each wrapper issues a single blocking call sequence and maps the two
//! expected collision errnos to informational outcomes: `EEXIST` on create
//! and `ENOENT` on open/unlink. Every other errno becomes
//! [`SemCtlError::Os`]. Cross-process atomicity of the exclusive create,
//! the value read, and the unlink is the kernel's guarantee, not ours.

use std::io;

use libc::{sem_t, O_CREAT, O_EXCL, SEM_FAILED};
use log::debug;

use crate::error::{Result, SemCtlError};
use crate::name::SemName;

/// Owner read/write, the mode the semaphore is created with.
const SEM_MODE: libc::mode_t = libc::S_IRUSR | libc::S_IWUSR;

/// Result of a [`create`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The semaphore was created with the requested initial value.
    Created,
    /// A semaphore with this name already exists; nothing was changed.
    AlreadyExists,
}

/// Result of a [`value`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The semaphore exists and currently holds this count.
    Value(i32),
    /// No semaphore with this name exists.
    NotFound,
}

/// Result of a [`remove`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The name was removed from the OS namespace.
    Removed,
    /// No semaphore with this name existed.
    NotFound,
}

/// Atomically create the semaphore, failing if it already exists.
///
/// `initial_value` must be non-negative; the CLI enforces this at parse
/// time, and the kernel rejects values above `SEM_VALUE_MAX` with `EINVAL`.
pub fn create(name: &SemName, initial_value: i32) -> Result<CreateOutcome> {
    let key = name.to_os_key()?;
    debug!("sem_open({:?}, O_CREAT | O_EXCL, 0o600, {})", key, initial_value);
    let sem = unsafe {
        libc::sem_open(
            key.as_ptr(),
            O_CREAT | O_EXCL,
            SEM_MODE as libc::c_uint,
            initial_value as libc::c_uint,
        )
    };
    if sem == SEM_FAILED {
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EEXIST) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        return Err(SemCtlError::os("sem_open", name.as_str(), err));
    }
    close(sem, name)?;
    Ok(CreateOutcome::Created)
}

/// Fetch the current count of an existing semaphore.
pub fn value(name: &SemName) -> Result<ReadOutcome> {
    let key = name.to_os_key()?;
    debug!("sem_open({:?}, 0)", key);
    let sem = unsafe { libc::sem_open(key.as_ptr(), 0) };
    if sem == SEM_FAILED {
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::ENOENT) {
            return Ok(ReadOutcome::NotFound);
        }
        return Err(SemCtlError::os("sem_open", name.as_str(), err));
    }
    let mut current: libc::c_int = 0;
    if unsafe { libc::sem_getvalue(sem, &mut current) } != 0 {
        let err = io::Error::last_os_error();
        // the getvalue errno is the one worth reporting; close is best-effort
        let _ = close(sem, name);
        return Err(SemCtlError::os("sem_getvalue", name.as_str(), err));
    }
    close(sem, name)?;
    Ok(ReadOutcome::Value(current))
}

/// Remove the semaphore from the OS namespace.
///
/// Handles already open in other processes keep working until they are
/// closed; only new opens are affected.
pub fn remove(name: &SemName) -> Result<RemoveOutcome> {
    let key = name.to_os_key()?;
    debug!("sem_unlink({:?})", key);
    if unsafe { libc::sem_unlink(key.as_ptr()) } == 0 {
        return Ok(RemoveOutcome::Removed);
    }
    let err = io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::ENOENT) {
        return Ok(RemoveOutcome::NotFound);
    }
    Err(SemCtlError::os("sem_unlink", name.as_str(), err))
}

fn close(sem: *mut sem_t, name: &SemName) -> Result<()> {
    if unsafe { libc::sem_close(sem) } != 0 {
        return Err(SemCtlError::os(
            "sem_close",
            name.as_str(),
            io::Error::last_os_error(),
        ));
    }
    Ok(())
}
