//! Progressive hints for a word to guess
//!
//! Hints are revealed in a fixed order: word class and length, first and last
//! letter, then the number of vowels.

/// Number of hints available for every word
pub const HINT_COUNT: usize = 3;

const VOWELS: &str = "aeiouAEIOU";

/// Count the vowels (a, e, i, o, u in either case) of a word
pub fn vowel_count(word: &str) -> usize { word.chars().filter(|c| VOWELS.contains(*c)).count() }

/// The three hints for `word` tagged `pos`, in reveal order
pub fn hints(word: &str, pos: &str) -> [String; HINT_COUNT] {
  let first = word.chars().next().map(String::from).unwrap_or_default();
  let last = word.chars().last().map(String::from).unwrap_or_default();
  [
    format!(
      "Hint 1: It's a {} with {} letters.",
      pos.to_lowercase(),
      word.chars().count()
    ),
    format!("Hint 2: It starts with {} and ends with {}.", first, last),
    format!("Hint 3: It has {} vowels.", vowel_count(word)),
  ]
}
