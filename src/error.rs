//! Error types for the semctl library
//!
//! Only two things can go wrong: the caller supplied a name that cannot be
//! used as an OS key, or one of the semaphore syscalls failed with an errno
//! other than the expected collisions (`EEXIST` on create, `ENOENT` on
//! open/unlink). Those collisions are not errors at all; they are modeled as
//! informational outcomes in [`crate::sem`].

use std::io;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum SemCtlError {
    /// The semaphore name is not usable as an OS key
    #[error("invalid semaphore name \"{name}\": {reason}")]
    InvalidName { name: String, reason: String },

    /// An unexpected failure from one of the semaphore syscalls
    #[error("{call} failed for semaphore \"{name}\": {source}")]
    Os {
        call: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SemCtlError>;

impl SemCtlError {
    /// Create a new invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new OS failure error
    pub fn os(call: &'static str, name: impl Into<String>, source: io::Error) -> Self {
        Self::Os {
            call,
            name: name.into(),
            source,
        }
    }

    /// The raw errno of the underlying OS failure, if any
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Os { source, .. } => source.raw_os_error(),
            Self::InvalidName { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = SemCtlError::invalid_name("a/b", "name must not contain '/'");
        assert_eq!(
            err.to_string(),
            "invalid semaphore name \"a/b\": name must not contain '/'"
        );
        assert_eq!(err.raw_os_error(), None);
    }

    #[test]
    fn test_os_error_exposes_raw_code() {
        let err = SemCtlError::os("sem_open", "workers", io::Error::from_raw_os_error(13));
        assert_eq!(err.raw_os_error(), Some(13));
        assert!(err.to_string().starts_with("sem_open failed for semaphore \"workers\":"));
        assert!(err.to_string().contains("os error 13"));
    }
}
