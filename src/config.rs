//! Options controlling corpus loading and filtering
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Name of the corpus directory shipped next to the game
pub const GAMEDATA_DIR: &str = "gamedata";
/// Extension of annotated corpus files
pub const DEFAULT_EXTENSION: &str = "conllu";
/// Shortest sentence worth playing
pub const MIN_SENTENCE_LENGTH: usize = 5;
/// Default longest sentence accepted
pub const DEFAULT_MAX_LENGTH: usize = 20;
/// Default number of corpus occurrences a word needs to not be rare
pub const DEFAULT_RARE_THRESHOLD: usize = 10;

/// Configuration of a game run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
  /// directory holding the corpus files
  pub corpus_dir: PathBuf,
  /// extension of corpus files, without the dot
  pub extension: String,
  /// minimum number of words in an accepted sentence
  pub min_length: usize,
  /// maximum number of words in an accepted sentence
  pub max_length: usize,
  /// sentences with any word counted fewer times than this are dropped
  pub rare_threshold: usize,
  /// seed for sentence selection; `None` draws from system entropy
  pub seed: Option<u64>,
}

impl Default for GameConfig {
  fn default() -> GameConfig {
    GameConfig {
      corpus_dir: default_corpus_dir(),
      extension: DEFAULT_EXTENSION.to_string(),
      min_length: MIN_SENTENCE_LENGTH,
      max_length: DEFAULT_MAX_LENGTH,
      rare_threshold: DEFAULT_RARE_THRESHOLD,
      seed: None,
    }
  }
}

impl GameConfig {
  /// A default configuration reading the corpus from `dirpath`
  pub fn new<P: Into<PathBuf>>(dirpath: P) -> Self {
    GameConfig {
      corpus_dir: dirpath.into(),
      ..GameConfig::default()
    }
  }

  /// Check the options a scan cannot run without.
  /// A `max_length` below `min_length` is allowed and simply accepts no sentence.
  pub fn validate(&self) -> Result<()> {
    if self.min_length == 0 {
      return Err(Error::InvalidConfig(
        "min_length must be greater than zero".into(),
      ));
    }
    if self.extension.is_empty() {
      return Err(Error::InvalidConfig("extension must not be empty".into()));
    }
    Ok(())
  }
}

/// The `gamedata` directory one level above the directory of the running executable.
/// Falls back to `./gamedata` when the executable path is unavailable.
pub fn default_corpus_dir() -> PathBuf {
  env::current_exe()
    .ok()
    .and_then(|exe| {
      exe
        .parent()
        .and_then(|bin_dir| bin_dir.parent())
        .map(|root| root.join(GAMEDATA_DIR))
    })
    .unwrap_or_else(|| PathBuf::from(GAMEDATA_DIR))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_documented_constants() {
    let config = GameConfig::new("corpus");
    assert_eq!(config.corpus_dir, PathBuf::from("corpus"));
    assert_eq!(config.extension, "conllu");
    assert_eq!(config.min_length, 5);
    assert_eq!(config.max_length, 20);
    assert_eq!(config.rare_threshold, 10);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn inverted_length_bounds_are_valid() {
    let config = GameConfig {
      max_length: 4,
      ..GameConfig::new("corpus")
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn rejects_zero_min_length() {
    let config = GameConfig {
      min_length: 0,
      ..GameConfig::new("corpus")
    };
    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
  }

  #[test]
  fn default_dir_ends_in_gamedata() {
    assert!(default_corpus_dir().ends_with(GAMEDATA_DIR));
  }
}
