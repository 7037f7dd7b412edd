//! Removal of sentences containing rare words
//!
//! A sentence is kept only if every one of its words occurs at least
//! `rare_threshold` times in the counts it is filtered against. Sentences are
//! dropped whole, never partially masked, and survivors keep their order.
use log::{info, warn};

use crate::config::GameConfig;
use crate::conllu::Corpus;
use crate::data::{Sentence, Word};
use crate::error::Result;
use crate::ngrams::Unigrams;

/// Whether no word of `sentence` is rare according to `counts`
pub fn is_common(sentence: &Sentence, counts: &Unigrams, rare_threshold: usize) -> bool {
  sentence.iter().all(|word| counts.get(&word.norm) >= rare_threshold)
}

/// The sentences free of rare words, in input order
pub fn filter_rare(sentences: &[Sentence], counts: &Unigrams, rare_threshold: usize) -> Vec<Sentence> {
  sentences
    .iter()
    .filter(|sentence| is_common(sentence, counts, rare_threshold))
    .cloned()
    .collect()
}

/// Scan the configured corpus and keep its playable sentences
pub fn load_playable(config: &GameConfig) -> Result<Vec<Sentence>> {
  config.validate()?;
  let report = Corpus::from_config(config).scan()?;
  let playable = filter_rare(&report.sentences, &report.counts, config.rare_threshold);
  info!(
    "-- {} of {} sentences are free of words seen fewer than {} times",
    playable.len(),
    report.sentences.len(),
    config.rare_threshold
  );
  if playable.is_empty() {
    warn!("no playable sentences in {:?}", config.corpus_dir);
  }
  Ok(playable)
}

/// Filter plain token lists: lower-case them, keep those of
/// `min_length..=max_length` tokens, then drop the lists containing a token
/// seen fewer than `rare_threshold` times among the kept lists.
pub fn process_token_lists<S: AsRef<str>>(
  lists: &[Vec<S>],
  min_length: usize,
  max_length: usize,
  rare_threshold: usize,
) -> Vec<Vec<String>> {
  // plain tokens carry no tag
  let sentences: Vec<Sentence> = lists
    .iter()
    .filter(|tokens| min_length <= tokens.len() && tokens.len() <= max_length)
    .map(|tokens| {
      Sentence::new(
        tokens
          .iter()
          .map(|token| Word::new(&token.as_ref().to_lowercase(), ""))
          .collect(),
      )
    })
    .collect();
  let counts = Unigrams::from_sentences(&sentences);
  filter_rare(&sentences, &counts, rare_threshold)
    .into_iter()
    .map(|sentence| sentence.words.into_iter().map(|word| word.norm).collect())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sentence(tokens: &[&str]) -> Sentence {
    Sentence::new(tokens.iter().map(|t| Word::new(t, "X")).collect())
  }

  fn counts(pairs: &[(&str, usize)]) -> Unigrams {
    let mut unigrams = Unigrams::new();
    for (word, n) in pairs {
      for _ in 0..*n {
        unigrams.insert(word.to_string());
      }
    }
    unigrams
  }

  #[test]
  fn drops_whole_sentence_on_one_rare_word() {
    let counts = counts(&[("the", 12), ("cat", 10), ("sat", 10), ("zebra", 9)]);
    let input = vec![
      sentence(&["the", "cat", "sat"]),
      sentence(&["the", "zebra", "sat"]),
      sentence(&["The", "Cat"]),
    ];
    let kept = filter_rare(&input, &counts, 10);
    assert_eq!(kept, vec![input[0].clone(), input[2].clone()]);
  }

  #[test]
  fn unknown_words_are_rare() {
    let counts = counts(&[("the", 20)]);
    assert!(!is_common(&sentence(&["the", "unseen"]), &counts, 1));
  }

  #[test]
  fn threshold_zero_keeps_everything() {
    let input = vec![sentence(&["never", "counted"])];
    assert_eq!(filter_rare(&input, &Unigrams::new(), 0), input);
  }

  #[test]
  fn filtering_is_idempotent() {
    let counts = counts(&[("a", 10), ("b", 3), ("c", 11)]);
    let input = vec![sentence(&["a", "c"]), sentence(&["a", "b"]), sentence(&["c"])];
    let once = filter_rare(&input, &counts, 10);
    let twice = filter_rare(&once, &counts, 10);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
  }

  #[test]
  fn empty_input_gives_empty_output() {
    assert!(filter_rare(&[], &Unigrams::new(), 10).is_empty());
  }

  #[test]
  fn token_lists_are_lowercased_length_filtered_and_rarity_filtered() {
    let lists = vec![
      vec!["The", "cat", "sat"],
      vec!["the", "CAT", "sat"],
      vec!["the", "cat", "ran"],
      vec!["the", "cat"],
    ];
    let kept = process_token_lists(&lists, 3, 3, 2);
    assert_eq!(
      kept,
      vec![
        vec!["the".to_string(), "cat".to_string(), "sat".to_string()],
        vec!["the".to_string(), "cat".to_string(), "sat".to_string()],
      ]
    );
  }
}
