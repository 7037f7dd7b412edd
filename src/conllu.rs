//! Reading of CoNLL-U style annotated corpora
//!
//! Each data line carries tab-separated fields, of which the second is the
//! token and the fourth its part-of-speech tag. Lines starting with `#` are
//! comments and blank lines end a sentence. Lines with fewer than four fields
//! are dropped without complaint.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::{GameConfig, DEFAULT_EXTENSION, DEFAULT_MAX_LENGTH, MIN_SENTENCE_LENGTH};
use crate::data::{Sentence, Word};
use crate::error::{Error, Result};
use crate::ngrams::Unigrams;

/// Separator of the fields in a data line
pub const FIELD_DELIMITER: char = '\t';
/// Prefix marking a comment line
pub const COMMENT_MARKER: char = '#';
/// Index of the token field
pub const FORM_FIELD: usize = 1;
/// Index of the part-of-speech field
pub const POS_FIELD: usize = 3;

/// A classified corpus line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
  /// empty or whitespace-only, ends the current sentence
  Blank,
  /// starts with the comment marker
  Comment,
  /// too few fields to carry a token and a tag
  Malformed,
  /// a token line
  Token(Word),
}

/// Classify a single line (without its line terminator)
pub fn parse_line(line: &str) -> Line {
  if line.trim().is_empty() {
    return Line::Blank;
  }
  if line.starts_with(COMMENT_MARKER) {
    return Line::Comment;
  }
  let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
  if fields.len() <= POS_FIELD {
    Line::Malformed
  } else {
    Line::Token(Word::new(fields[FORM_FIELD], fields[POS_FIELD]))
  }
}

/// Iterator over the sentences of a single corpus stream.
/// The last sentence is yielded even when the stream lacks a closing blank line.
pub struct SentenceReader<R> {
  lines: Lines<R>,
}

impl<R: BufRead> SentenceReader<R> {
  /// Read sentences from `reader`
  pub fn new(reader: R) -> Self {
    SentenceReader {
      lines: reader.lines(),
    }
  }
}

impl<R: BufRead> Iterator for SentenceReader<R> {
  type Item = io::Result<Sentence>;
  fn next(&mut self) -> Option<io::Result<Sentence>> {
    let mut words = Vec::new();
    loop {
      match self.lines.next() {
        None => {
          return if words.is_empty() {
            None
          } else {
            Some(Ok(Sentence::new(words)))
          };
        },
        Some(Err(e)) => return Some(Err(e)),
        Some(Ok(line)) => match parse_line(&line) {
          Line::Blank => {
            if !words.is_empty() {
              return Some(Ok(Sentence::new(words)));
            }
          },
          Line::Token(word) => words.push(word),
          Line::Comment | Line::Malformed => {},
        },
      }
    }
  }
}

/// Sentences accepted from a corpus, with the word counts over exactly those sentences
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
  /// sentences within the length bounds, in file and reading order
  pub sentences: Vec<Sentence>,
  /// word frequencies over `sentences`
  pub counts: Unigrams,
  /// number of corpus files read
  pub files_read: usize,
  /// sentences dropped for being too short or too long
  pub rejected_by_length: usize,
}

/// A directory of annotated corpus files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
  /// root directory
  pub path: PathBuf,
  /// Extension of corpus files, without the leading dot
  pub extension: String,
  /// shortest accepted sentence
  pub min_length: usize,
  /// longest accepted sentence
  pub max_length: usize,
}

impl Default for Corpus {
  fn default() -> Corpus {
    Corpus {
      path: PathBuf::from("."),
      extension: DEFAULT_EXTENSION.to_string(),
      min_length: MIN_SENTENCE_LENGTH,
      max_length: DEFAULT_MAX_LENGTH,
    }
  }
}

impl Corpus {
  /// Create a new corpus with the base directory `dirpath`
  pub fn new<P: Into<PathBuf>>(dirpath: P) -> Self {
    Corpus {
      path: dirpath.into(),
      ..Corpus::default()
    }
  }

  /// The corpus described by a game configuration
  pub fn from_config(config: &GameConfig) -> Self {
    Corpus {
      path: config.corpus_dir.clone(),
      extension: config.extension.clone(),
      min_length: config.min_length,
      max_length: config.max_length,
    }
  }

  /// Whether a sentence has an acceptable number of words
  pub fn accepts(&self, sentence: &Sentence) -> bool {
    self.min_length <= sentence.len() && sentence.len() <= self.max_length
  }

  /// The corpus files directly inside the root directory, sorted by name.
  /// Subdirectories and files with other extensions are skipped.
  pub fn files(&self) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", self.extension);
    let mut files = Vec::new();
    for entry in WalkDir::new(&self.path)
      .min_depth(1)
      .max_depth(1)
      .sort_by_file_name()
    {
      let entry = entry.map_err(|err| {
        let path = err.path().map(Path::to_path_buf);
        Error::io(err.into(), path)
      })?;
      let file_name = entry.file_name().to_str().unwrap_or("");
      if entry.file_type().is_file() && file_name.ends_with(&suffix) {
        files.push(entry.into_path());
      }
    }
    Ok(files)
  }

  /// Read every corpus file, keeping the sentences within the length bounds
  /// and counting their words as they are accepted
  pub fn scan(&self) -> Result<ScanReport> {
    let mut report = ScanReport::default();
    for path in self.files()? {
      let file = File::open(&path).map_err(|err| Error::io(err, Some(path.clone())))?;
      let mut accepted = 0;
      for sentence in SentenceReader::new(BufReader::new(file)) {
        let sentence = sentence.map_err(|err| Error::io(err, Some(path.clone())))?;
        if self.accepts(&sentence) {
          report.counts.insert_sentence(&sentence);
          report.sentences.push(sentence);
          accepted += 1;
        } else {
          report.rejected_by_length += 1;
        }
      }
      debug!("-- {:?}: accepted {} sentences", path, accepted);
      report.files_read += 1;
    }
    info!(
      "-- scanned {} corpus files in {:?}: {} sentences accepted, {} rejected by length",
      report.files_read,
      self.path,
      report.sentences.len(),
      report.rejected_by_length
    );
    Ok(report)
  }
}

/// Scan `directory` with the fixed minimum sentence length and the given maximum
pub fn scan_directory<P: Into<PathBuf>>(directory: P, max_length: usize) -> Result<ScanReport> {
  let corpus = Corpus {
    max_length,
    ..Corpus::new(directory)
  };
  corpus.scan()
}
