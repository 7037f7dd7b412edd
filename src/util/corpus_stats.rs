//! Summary statistics of a corpus scan, as reported by `conllu-hangman --stats`
use std::fmt;

use crate::config::GameConfig;
use crate::conllu::Corpus;
use crate::error::Result;
use crate::filter::filter_rare;

/// Counts gathered while loading a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
  /// corpus files read
  pub files: usize,
  /// sentences within the length bounds
  pub accepted: usize,
  /// sentences outside the length bounds
  pub rejected_by_length: usize,
  /// accepted sentences free of rare words
  pub playable: usize,
  /// distinct lower-cased words in the accepted sentences
  pub vocabulary: usize,
  /// word occurrences in the accepted sentences
  pub tokens: usize,
  /// the most frequent words, most frequent first
  pub most_common: Vec<(String, usize)>,
}

/// Scan the configured corpus and gather its statistics, keeping the `top` most frequent words
pub fn collect(config: &GameConfig, top: usize) -> Result<CorpusStats> {
  config.validate()?;
  let report = Corpus::from_config(config).scan()?;
  let playable = filter_rare(&report.sentences, &report.counts, config.rare_threshold).len();
  let mut most_common: Vec<(String, usize)> = report
    .counts
    .map
    .iter()
    .map(|(word, count)| (word.clone(), *count))
    .collect();
  most_common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
  most_common.truncate(top);
  Ok(CorpusStats {
    files: report.files_read,
    accepted: report.sentences.len(),
    rejected_by_length: report.rejected_by_length,
    playable,
    vocabulary: report.counts.count(),
    tokens: report.counts.total(),
    most_common,
  })
}

impl fmt::Display for CorpusStats {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{:?} corpus files;", self.files)?;
    writeln!(f, "{:?} sentences accepted;", self.accepted)?;
    writeln!(f, "{:?} sentences discarded (length)", self.rejected_by_length)?;
    writeln!(f, "{:?} playable sentences;", self.playable)?;
    writeln!(f, "{:?} words, {:?} distinct;", self.tokens, self.vocabulary)?;
    for (word, count) in &self.most_common {
      writeln!(f, "  {}\t{}", word, count)?;
    }
    Ok(())
  }
}
