//! Error types for the menu session.

use thiserror::Error;

/// Errors that end a menu session.
///
/// Order stack failures are not listed here: the session reports them to the user and
/// keeps going. Only a broken terminal stops it.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
