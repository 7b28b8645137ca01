//! Fatal error type carrying the process exit status

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
///
/// Each variant maps to a distinct process exit status so scripts wrapping
/// the generator can tell the outcomes apart.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The input stream closed while a prompt was waiting for an answer.
    #[error("input ended unexpectedly")]
    EndOfInput,

    /// The user answered no to the initial generation prompt.
    #[error("generation declined")]
    GenerationDeclined,

    /// The user answered no to the final confirmation after the preview.
    #[error("project not confirmed")]
    ConfirmationDeclined,

    /// A directory or file could not be created during emission.
    ///
    /// Already-created parts of the tree are left on disk; a one-shot
    /// generator does not roll back.
    #[error("failed to create {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FatalError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::EndOfInput => 1,
            FatalError::GenerationDeclined => 2,
            FatalError::ConfirmationDeclined => 3,
            FatalError::Write { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let write = FatalError::Write {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        let codes = [
            FatalError::EndOfInput.exit_code(),
            FatalError::GenerationDeclined.exit_code(),
            FatalError::ConfirmationDeclined.exit_code(),
            write.exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4]);
    }

    #[test]
    fn test_write_error_mentions_path() {
        let err = FatalError::Write {
            path: PathBuf::from("/tmp/proj/src"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/proj/src"));
    }
}
