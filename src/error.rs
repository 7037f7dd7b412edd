//! Errors raised while loading a corpus or running a game session
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures that can end a corpus scan or a session.
///
/// Malformed corpus lines are not errors, they are dropped while scanning.
#[derive(Debug, Error)]
pub enum Error {
  /// Filesystem or console IO failed
  #[error("io error while processing {path:?}: {source}")]
  Io {
    /// underlying IO error
    source: io::Error,
    /// the file or directory being processed, if any
    path: Option<PathBuf>,
  },
  /// A configuration value is out of range
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
  /// The guess input ended before the sentence was completed
  #[error("input closed before the sentence was completed")]
  InputClosed,
}

impl Error {
  /// Wrap an IO error, attaching the path it concerns
  pub fn io(source: io::Error, path: Option<PathBuf>) -> Self { Error::Io { source, path } }
}

impl From<io::Error> for Error {
  fn from(source: io::Error) -> Self { Error::Io { source, path: None } }
}
