//! Annotated words and sentences, as loaded from a tagged corpus
use std::slice::Iter;

/// A word with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
  /// The token text as written in the corpus
  pub form: String,
  /// Lower-cased `form`, used for counting and guess comparison
  pub norm: String,
  /// The part-of-speech tag, verbatim from the annotation
  pub pos: String,
}

impl Word {
  /// Create a word, deriving its normalized form
  pub fn new(form: &str, pos: &str) -> Self {
    Word {
      form: form.to_string(),
      norm: form.to_lowercase(),
      pos: pos.to_string(),
    }
  }

  /// Whether the player has to guess this word (see `is_guessable`)
  pub fn is_guessable(&self) -> bool { is_guessable(&self.form) }
}

/// A sentence of annotated words, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
  /// The words of the sentence
  pub words: Vec<Word>,
}

impl Sentence {
  /// Create a sentence from its words
  pub fn new(words: Vec<Word>) -> Self { Sentence { words } }

  /// number of words
  pub fn len(&self) -> usize { self.words.len() }

  /// true if the sentence has no words
  pub fn is_empty(&self) -> bool { self.words.is_empty() }

  /// Iterate over the words
  pub fn iter(&self) -> Iter<'_, Word> { self.words.iter() }

  /// The words as written
  pub fn forms(&self) -> Vec<&str> { self.words.iter().map(|w| w.form.as_str()).collect() }

  /// The lower-cased words
  pub fn norms(&self) -> Vec<&str> { self.words.iter().map(|w| w.norm.as_str()).collect() }
}

impl<'s> IntoIterator for &'s Sentence {
  type Item = &'s Word;
  type IntoIter = Iter<'s, Word>;
  fn into_iter(self) -> Self::IntoIter { self.words.iter() }
}

/// A token is guessable when it is non-empty and purely alphabetic.
/// Punctuation and numerals ("3.14", "--", "1990s") are shown to the player as-is.
/// Alphabetic is the Unicode `Alphabetic` property, which also covers spacing
/// vowel signs, so "राम" is guessable.
pub fn is_guessable(token: &str) -> bool {
  !token.is_empty() && token.chars().all(char::is_alphabetic)
}
