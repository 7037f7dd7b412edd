//! Word frequency counts over a set of sentences
//! Words are keyed by their lower-cased form.

use std::collections::HashMap;

use crate::data::Sentence;

/// Records the frequencies of single words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unigrams {
  /// hashmap for the unigram counts
  pub map: HashMap<String, usize>,
}

impl Unigrams {
  /// Creates a new, empty Unigrams struct
  pub fn new() -> Self { Unigrams::default() }

  /// Count every word of every sentence
  pub fn from_sentences<'a, I>(sentences: I) -> Self
  where I: IntoIterator<Item = &'a Sentence> {
    let mut unigrams = Unigrams::new();
    for sentence in sentences {
      unigrams.insert_sentence(sentence);
    }
    unigrams
  }

  /// Get the word count, 0 for words never seen
  pub fn get(&self, word: &str) -> usize {
    match self.map.get(word) {
      Some(count) => *count,
      None => 0,
    }
  }

  /// insert a word, which is expected to already be lower-cased
  pub fn insert(&mut self, word: String) {
    let counter = self.map.entry(word).or_insert(0);
    *counter += 1;
  }

  /// insert all words of a sentence
  pub fn insert_sentence(&mut self, sentence: &Sentence) {
    for word in sentence {
      self.insert(word.norm.clone());
    }
  }

  /// get the inserted words, sorted by frequency (ties broken alphabetically)
  pub fn sort(&self) -> Vec<(String, usize)> {
    let mut as_vec = self.map.clone().into_iter().collect::<Vec<_>>();
    as_vec.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    as_vec
  }

  /// get the number of different words inserted
  pub fn count(&self) -> usize { self.map.len() }

  /// get the number of word occurrences inserted
  pub fn total(&self) -> usize { self.map.values().sum() }
}
