//! Error types for the tree rewriter
//!
//! Only structural failures surface here: a bad root path, a failed
//! directory walk, or an impossible serialization. Per-file problems
//! (unreadable, undecodable, malformed JSON, failed write-back) are
//! absorbed into the run report instead of propagating, so one bad file
//! never aborts the rest of the tree.

use std::path::PathBuf;

/// Errors that abort a whole run
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("root path does not exist or is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON serialization failed: {message}")]
    Serialize { message: String },
}

impl RewriteError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRoot { path } => {
                format!(
                    "'{}' does not exist or is not a directory",
                    path.display()
                )
            }
            Self::Walk(err) => {
                if let Some(path) = err.path() {
                    format!("failed to walk '{}': {}", path.display(), err)
                } else {
                    format!("directory walk failed: {}", err)
                }
            }
            Self::Serialize { message } => {
                format!("JSON serialization failed: {}", message)
            }
        }
    }
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
