//! # A word-guessing game over annotated corpora
//! Loads part-of-speech annotated sentences from CoNLL-U files, keeps the
//! sentences of a playable length made only of common words, and runs an
//! interactive guessing game over one of them.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

pub mod config;
pub mod conllu;
pub mod data;
pub mod error;
pub mod filter;
pub mod game;
pub mod hints;
pub mod ngrams;
pub mod util;

pub use config::GameConfig;
pub use error::{Error, Result};
