use std::fs;

use conllu_hangman::conllu::Corpus;
use conllu_hangman::filter::{filter_rare, is_common, load_playable};
use conllu_hangman::util::test::RESOURCE_DIR;
use conllu_hangman::{Error, GameConfig};

fn conllu_sentence(tokens: &[(&str, &str)]) -> String {
  let mut block = String::from("# text = generated\n");
  for (index, (form, pos)) in tokens.iter().enumerate() {
    block.push_str(&format!("{}\t{}\t_\t{}\t_\t_\t0\tdep\t_\t_\n", index + 1, form, pos));
  }
  block
}

#[test]
fn resource_corpus_keeps_only_common_sentences() {
  let playable = load_playable(&GameConfig::new(RESOURCE_DIR)).unwrap();
  assert_eq!(playable.len(), 10);
  for sentence in &playable {
    assert_eq!(sentence.norms(), vec!["the", "cat", "saw", "the", "dog", "."]);
  }
}

#[test]
fn playable_sentences_respect_both_filters() {
  let config = GameConfig::new(RESOURCE_DIR);
  let report = Corpus::from_config(&config).scan().unwrap();
  let playable = filter_rare(&report.sentences, &report.counts, config.rare_threshold);
  for sentence in &playable {
    assert!(config.min_length <= sentence.len() && sentence.len() <= config.max_length);
    assert!(is_common(sentence, &report.counts, config.rare_threshold));
    for word in sentence {
      assert!(report.counts.get(&word.norm) >= config.rare_threshold);
    }
  }
  assert_eq!(
    filter_rare(&playable, &report.counts, config.rare_threshold),
    playable
  );
}

#[test]
fn raising_the_threshold_empties_the_list() {
  let config = GameConfig {
    rare_threshold: 11,
    ..GameConfig::new(RESOURCE_DIR)
  };
  assert!(load_playable(&config).unwrap().is_empty());
}

#[test]
fn short_sentences_only_give_no_playable_sentence() {
  let playable = load_playable(&GameConfig::new("tests/resources/short")).unwrap();
  assert!(playable.is_empty());
}

#[test]
fn six_word_sentence_with_common_words_is_playable() {
  let dir = tempfile::tempdir().expect("tempdir");
  let target = [
    ("A", "DET"),
    ("quick", "ADJ"),
    ("fox", "NOUN"),
    ("jumps", "VERB"),
    ("high", "ADV"),
    ("!", "PUNCT"),
  ];
  let mut text = conllu_sentence(&target);
  // every token again in nine shuffled sentences
  for shift in 1..10 {
    let mut rotated = target.to_vec();
    rotated.rotate_left(shift % target.len());
    text.push('\n');
    text.push_str(&conllu_sentence(&rotated));
  }
  fs::write(dir.path().join("fox.conllu"), text).expect("write corpus");
  fs::write(dir.path().join("fox.txt"), conllu_sentence(&target)).expect("write decoy");

  let playable = load_playable(&GameConfig::new(dir.path())).unwrap();
  assert_eq!(playable.len(), 10);
  assert_eq!(playable[0].forms(), vec!["A", "quick", "fox", "jumps", "high", "!"]);
}

#[test]
fn max_length_below_minimum_gives_no_playable_sentence() {
  let config = GameConfig {
    max_length: 4,
    ..GameConfig::new(RESOURCE_DIR)
  };
  let playable = load_playable(&config).unwrap();
  assert!(playable.is_empty());
}

#[test]
fn invalid_configuration_is_rejected() {
  let config = GameConfig {
    min_length: 0,
    ..GameConfig::new(RESOURCE_DIR)
  };
  assert!(matches!(load_playable(&config), Err(Error::InvalidConfig(_))));
}
