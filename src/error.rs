// Error types shared by the store and the collection services

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the store and the collection services.
///
/// "Not found" is never represented here: lookups return `Option` and
/// deletes return `bool`, and the caller decides what an absent record
/// means externally.
#[derive(Debug, Error)]
pub enum Error {
    /// A uniqueness constraint would be violated. The message always
    /// contains "already exists" for callers that display it.
    #[error("{message}")]
    Conflict { message: String },

    /// Reading a collection file failed for a reason other than the file
    /// not existing yet.
    #[error("failed to read collection file {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a collection file failed. The previously persisted contents
    /// are left in place.
    #[error("failed to write collection file {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection file exists but does not parse as a record array.
    #[error("corrupt collection file {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized for writing.
    #[error("failed to encode collection for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn email_exists() -> Self {
        Error::Conflict {
            message: "Email already exists".to_string(),
        }
    }

    /// True for uniqueness violations; the response boundary maps these to
    /// a conflict outcome instead of a generic failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
