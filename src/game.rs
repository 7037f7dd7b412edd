//! The interactive guessing game over a single sentence
//!
//! The player guesses the alphabetic words of a randomly picked sentence from
//! left to right. Punctuation and numerals are shown from the start. Each word
//! allows `MAX_ATTEMPTS` wrong guesses; entering `?` reveals the next hint
//! without using an attempt. A solved word scores `BASE_POINTS` minus
//! `HINT_COST` per hint used, a word that runs out of attempts costs
//! `FAILURE_PENALTY`. The score has no floor.
use std::io::{BufRead, Write};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Sentence, Word};
use crate::error::{Error, Result};
use crate::hints::{hints, HINT_COUNT};

/// Wrong guesses allowed per word
pub const MAX_ATTEMPTS: u32 = 4;
/// Points for a word solved without hints
pub const BASE_POINTS: i64 = 30;
/// Points deducted from a solved word per hint used
pub const HINT_COST: i64 = 5;
/// Points lost for a word that was not guessed
pub const FAILURE_PENALTY: i64 = 10;
/// Input requesting the next hint
pub const HINT_REQUEST: &str = "?";

/// Points earned for solving a word after using `hints_used` hints
pub fn solve_points(hints_used: usize) -> i64 { BASE_POINTS - HINT_COST * hints_used as i64 }

/// Source of the sentence choice, so that sessions can be replayed
pub trait SentencePicker {
  /// Pick an index in `0..len`; `len` is never zero
  fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random sentence choice
pub struct RandomPicker {
  rng: StdRng,
}

impl RandomPicker {
  /// Seeded from system entropy
  pub fn new() -> Self {
    RandomPicker {
      rng: StdRng::from_entropy(),
    }
  }
  /// Reproducible choice from a fixed seed
  pub fn seeded(seed: u64) -> Self {
    RandomPicker {
      rng: StdRng::seed_from_u64(seed),
    }
  }
  /// Seeded when a seed is given, from entropy otherwise
  pub fn from_seed(seed: Option<u64>) -> Self {
    match seed {
      Some(seed) => RandomPicker::seeded(seed),
      None => RandomPicker::new(),
    }
  }
}

impl Default for RandomPicker {
  fn default() -> Self { RandomPicker::new() }
}

impl SentencePicker for RandomPicker {
  fn pick(&mut self, len: usize) -> usize { self.rng.gen_range(0..len) }
}

/// Always picks the same index, clamped to the available sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl SentencePicker for FixedPicker {
  fn pick(&mut self, len: usize) -> usize { self.0.min(len.saturating_sub(1)) }
}

/// An underscore per character of `token`
pub fn mask(token: &str) -> String { "_".repeat(token.chars().count()) }

/// The player's first view of a sentence: guessable words masked, everything else shown
pub fn initial_display(sentence: &Sentence) -> Vec<String> {
  sentence
    .iter()
    .map(|word| {
      if word.is_guessable() {
        mask(&word.form)
      } else {
        word.form.clone()
      }
    })
    .collect()
}

/// Where a word stands in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
  /// still being guessed
  Guessing,
  /// guessed correctly
  Solved,
  /// attempts exhausted, the word was shown to the player
  Revealed,
}

/// Result of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
  /// the next hint, no attempt used
  Hint(String),
  /// a hint was requested but all were already given
  NoMoreHints,
  /// the guess matched the word
  Solved {
    /// points earned for the word
    points: i64,
  },
  /// the guess did not match; at zero attempts left the word is revealed
  Wrong {
    /// attempts remaining for this word
    attempts_left: u32,
  },
  /// the word was already solved or revealed, nothing changed
  Over,
}

/// Guessing state of one word
#[derive(Debug, Clone)]
pub struct WordRound {
  target: String,
  hints: [String; HINT_COUNT],
  hints_used: usize,
  attempts_left: u32,
  state: WordState,
}

impl WordRound {
  /// Start guessing `word`
  pub fn new(word: &Word) -> Self {
    WordRound {
      target: word.norm.trim().to_string(),
      hints: hints(&word.form, &word.pos),
      hints_used: 0,
      attempts_left: MAX_ATTEMPTS,
      state: WordState::Guessing,
    }
  }

  /// Handle one line of player input. Comparison ignores case and surrounding whitespace.
  pub fn guess(&mut self, input: &str) -> Guess {
    if self.state != WordState::Guessing {
      return Guess::Over;
    }
    let guess = input.trim().to_lowercase();
    if guess == HINT_REQUEST {
      if self.hints_used < HINT_COUNT {
        let hint = self.hints[self.hints_used].clone();
        self.hints_used += 1;
        Guess::Hint(hint)
      } else {
        Guess::NoMoreHints
      }
    } else if guess == self.target {
      self.state = WordState::Solved;
      Guess::Solved {
        points: solve_points(self.hints_used),
      }
    } else {
      self.attempts_left = self.attempts_left.saturating_sub(1);
      if self.attempts_left == 0 {
        self.state = WordState::Revealed;
      }
      Guess::Wrong {
        attempts_left: self.attempts_left,
      }
    }
  }

  /// current state
  pub fn state(&self) -> WordState { self.state }

  /// hints revealed so far
  pub fn hints_used(&self) -> usize { self.hints_used }

  /// wrong guesses still allowed
  pub fn attempts_left(&self) -> u32 { self.attempts_left }

  /// Score change for this word, once it is no longer being guessed
  pub fn score(&self) -> Option<i64> {
    match self.state {
      WordState::Guessing => None,
      WordState::Solved => Some(solve_points(self.hints_used)),
      WordState::Revealed => Some(-FAILURE_PENALTY),
    }
  }
}

/// The sentence being played, as the player sees it, and the running score
#[derive(Debug, Clone)]
pub struct GameState<'s> {
  /// the sentence being played
  pub sentence: &'s Sentence,
  /// one entry per word: its mask, or the word once shown
  pub display: Vec<String>,
  /// cumulative score, may be negative
  pub score: i64,
}

impl<'s> GameState<'s> {
  /// Fresh state with every guessable word masked
  pub fn new(sentence: &'s Sentence) -> Self {
    GameState {
      sentence,
      display: initial_display(sentence),
      score: 0,
    }
  }

  /// Show the word at `index` as written
  pub fn reveal(&mut self, index: usize) {
    if let (Some(slot), Some(word)) = (self.display.get_mut(index), self.sentence.words.get(index)) {
      *slot = word.form.clone();
    }
  }

  /// The display form joined with spaces
  pub fn display_line(&self) -> String { self.display.join(" ") }
}

/// Summary of a finished game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameReport {
  /// final score
  pub score: i64,
  /// words guessed correctly
  pub solved: usize,
  /// words revealed after running out of attempts
  pub revealed: usize,
  /// hints used over the whole sentence
  pub hints_used: usize,
}

/// One playthrough over a list of playable sentences
pub struct Session<'c, P> {
  sentences: &'c [Sentence],
  picker: P,
}

impl<'c, P: SentencePicker> Session<'c, P> {
  /// A session choosing among `sentences` with `picker`
  pub fn new(sentences: &'c [Sentence], picker: P) -> Self { Session { sentences, picker } }

  /// Play one sentence, reading guesses line by line from `input` and writing
  /// all game text to `output`. Returns `None` without playing when there is
  /// no sentence to choose from.
  pub fn play<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<Option<GameReport>> {
    let sentences = self.sentences;
    if sentences.is_empty() {
      writeln!(output, "No sentences available to play the game.")?;
      return Ok(None);
    }
    let choice = self.picker.pick(sentences.len());
    debug!("-- playing sentence {} of {}", choice, sentences.len());
    let mut state = GameState::new(&sentences[choice]);
    let mut report = GameReport::default();

    writeln!(
      output,
      "Welcome to the sentence guessing game! Your challenge is to guess the words and complete the sentence."
    )?;
    writeln!(output, "Ready to play?")?;
    writeln!(
      output,
      "The sentence has {} words. What's the first one?",
      state.sentence.len()
    )?;
    writeln!(output, "{}", state.display_line())?;

    let sentence = state.sentence;
    for (index, word) in sentence.iter().enumerate() {
      if !word.is_guessable() {
        continue;
      }
      let mut round = WordRound::new(word);
      while round.state() == WordState::Guessing {
        write!(output, "Your guess: ")?;
        output.flush()?;
        let line = read_guess(&mut input)?;
        match round.guess(&line) {
          Guess::Hint(hint) => writeln!(output, "{}", hint)?,
          Guess::NoMoreHints => writeln!(output, "No more hints available.")?,
          Guess::Solved { .. } => {
            writeln!(output, "Great! What's the next word?")?;
            state.reveal(index);
            writeln!(output, "{}", state.display_line())?;
          },
          Guess::Wrong { attempts_left } => writeln!(
            output,
            "Wrong! Try another word or ask for a hint. {} attempts left.",
            attempts_left
          )?,
          Guess::Over => {},
        }
      }
      if round.state() == WordState::Revealed {
        writeln!(output, "The correct word was '{}'.", word.form)?;
        state.reveal(index);
        writeln!(output, "{}", state.display_line())?;
        report.revealed += 1;
      } else {
        report.solved += 1;
      }
      report.hints_used += round.hints_used();
      state.score += round.score().unwrap_or(0);
    }

    writeln!(output, "Congratulations! Your final score is {}.", state.score)?;
    report.score = state.score;
    Ok(Some(report))
  }
}

fn read_guess<R: BufRead>(input: &mut R) -> Result<String> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(Error::InputClosed);
  }
  Ok(line)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cat() -> Word { Word::new("cat", "NOUN") }

  #[test]
  fn scoring_law() {
    assert_eq!(solve_points(0), 30);
    assert_eq!(solve_points(1), 25);
    assert_eq!(solve_points(2), 20);
    assert_eq!(solve_points(3), 15);
  }

  #[test]
  fn hint_requests_do_not_use_attempts() {
    let mut round = WordRound::new(&cat());
    assert_eq!(round.guess("dog"), Guess::Wrong { attempts_left: 3 });
    assert_eq!(
      round.guess("?"),
      Guess::Hint("Hint 1: It's a noun with 3 letters.".to_string())
    );
    assert_eq!(
      round.guess(" ? "),
      Guess::Hint("Hint 2: It starts with c and ends with t.".to_string())
    );
    assert_eq!(round.attempts_left(), 3);
    assert_eq!(round.guess("cat"), Guess::Solved { points: 20 });
    assert_eq!(round.state(), WordState::Solved);
    assert_eq!(round.score(), Some(20));
  }

  #[test]
  fn hints_run_out_after_three() {
    let mut round = WordRound::new(&cat());
    for _ in 0..HINT_COUNT {
      assert!(matches!(round.guess("?"), Guess::Hint(_)));
    }
    assert_eq!(round.guess("?"), Guess::NoMoreHints);
    assert_eq!(round.hints_used(), 3);
    assert_eq!(round.guess("CAT\n"), Guess::Solved { points: 15 });
  }

  #[test]
  fn four_wrong_guesses_reveal_the_word() {
    let mut round = WordRound::new(&cat());
    round.guess("?");
    for left in (0..MAX_ATTEMPTS).rev() {
      assert_eq!(round.guess(""), Guess::Wrong { attempts_left: left });
    }
    assert_eq!(round.state(), WordState::Revealed);
    assert_eq!(round.score(), Some(-FAILURE_PENALTY));
    assert_eq!(round.guess("cat"), Guess::Over);
  }

  #[test]
  fn masks_only_alphabetic_tokens() {
    let sentence = Sentence::new(vec![
      Word::new("Pi", "PROPN"),
      Word::new("is", "AUX"),
      Word::new("3.14", "NUM"),
      Word::new(".", "PUNCT"),
    ]);
    assert_eq!(initial_display(&sentence), vec!["__", "__", "3.14", "."]);
  }

  #[test]
  fn fixed_picker_is_clamped() {
    assert_eq!(FixedPicker(7).pick(3), 2);
    assert_eq!(FixedPicker(1).pick(3), 1);
  }

  #[test]
  fn seeded_picker_is_reproducible() {
    let mut a = RandomPicker::seeded(42);
    let mut b = RandomPicker::seeded(42);
    for _ in 0..10 {
      let pick = a.pick(17);
      assert!(pick < 17);
      assert_eq!(pick, b.pick(17));
    }
  }
}
