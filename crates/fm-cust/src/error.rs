//! Error types for FM customization

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while gathering configuration inputs
///
/// Resolving a configuration never fails; these only come from loading a
/// property snapshot.
#[derive(Debug, Error)]
pub enum CustError {
    /// Property snapshot could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line in a property snapshot
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
