//! Semaphore identity handling
//!
//! A [`SemName`] is the user-visible key for a semaphore. By default it is
//! derived from the program's own invocation path, so a binary installed as
//! `sem_tool` addresses the semaphore `sem_tool` no matter whether it is run
//! as `./sem_tool` or `/usr/local/bin/sem_tool`.

use std::ffi::CString;
use std::fmt;
use std::path::Path;

use crate::error::{Result, SemCtlError};

/// Longest accepted name: NAME_MAX - 4, per sem_overview(7).
pub const MAX_NAME_LEN: usize = 251;

/// A validated named-semaphore identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemName(String);

impl SemName {
    /// Validate a caller-supplied name.
    ///
    /// The name must be non-empty, contain no `/` or NUL bytes, and fit in
    /// [`MAX_NAME_LEN`] bytes.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SemCtlError::invalid_name(name, "name must not be empty"));
        }
        if name.contains('/') {
            return Err(SemCtlError::invalid_name(name, "name must not contain '/'"));
        }
        if name.contains('\0') {
            return Err(SemCtlError::invalid_name(
                name.replace('\0', "\\0"),
                "name must not contain NUL bytes",
            ));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(SemCtlError::invalid_name(
                name,
                format!("name must be at most {MAX_NAME_LEN} bytes"),
            ));
        }
        Ok(Self(name))
    }

    /// Derive the name from the program's invocation path.
    ///
    /// Takes the basename, so `./sem_tool` and `/usr/local/bin/sem_tool`
    /// both address the semaphore `sem_tool`.
    pub fn from_invocation(argv0: &str) -> Result<Self> {
        let base = Path::new(argv0)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(argv0);
        Self::new(base)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The OS-level key: the name with a leading `/`, the form sem_overview(7)
    /// requires.
    pub(crate) fn to_os_key(&self) -> Result<CString> {
        CString::new(format!("/{}", self.0))
            .map_err(|_| SemCtlError::invalid_name(self.0.clone(), "name must not contain NUL bytes"))
    }
}

impl fmt::Display for SemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_dot_slash() {
        let name = SemName::from_invocation("./sem_tool").unwrap();
        assert_eq!(name.as_str(), "sem_tool");
    }

    #[test]
    fn test_strips_directory_prefix() {
        let name = SemName::from_invocation("/usr/local/bin/sem_tool").unwrap();
        assert_eq!(name.as_str(), "sem_tool");
    }

    #[test]
    fn test_plain_name_is_unchanged() {
        let name = SemName::from_invocation("sem_tool").unwrap();
        assert_eq!(name.as_str(), "sem_tool");
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(SemName::new("").is_err());
        assert!(SemName::from_invocation("").is_err());
    }

    #[test]
    fn test_rejects_interior_slash() {
        assert!(SemName::new("a/b").is_err());
    }

    #[test]
    fn test_rejects_nul_byte() {
        assert!(SemName::new("a\0b").is_err());
    }

    #[test]
    fn test_length_bound() {
        assert!(SemName::new("x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(SemName::new("x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_os_key_gets_leading_slash() {
        let name = SemName::new("workers").unwrap();
        assert_eq!(name.to_os_key().unwrap().to_str().unwrap(), "/workers");
    }
}
