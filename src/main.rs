use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;

use conllu_hangman::config::{GameConfig, DEFAULT_MAX_LENGTH, DEFAULT_RARE_THRESHOLD};
use conllu_hangman::filter::load_playable;
use conllu_hangman::game::{RandomPicker, Session};
use conllu_hangman::util::corpus_stats;

#[derive(Parser, Debug)]
#[command(version, about = "Guess the words of a sentence drawn from a CoNLL-U corpus")]
struct Cli {
  /// Directory of .conllu files [default: `gamedata` in the parent of the executable's directory,
  /// i.e. target/gamedata for a cargo build]
  #[arg(short, long)]
  corpus: Option<PathBuf>,

  /// Longest sentence accepted, in words
  #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
  max_length: usize,

  /// Words seen fewer times than this make a sentence unplayable
  #[arg(long, default_value_t = DEFAULT_RARE_THRESHOLD)]
  rare_threshold: usize,

  /// Seed for the sentence choice
  #[arg(long)]
  seed: Option<u64>,

  /// Print corpus statistics instead of playing
  #[arg(long)]
  stats: bool,

  /// Increase verbosity (-v, -vv)
  #[arg(short = 'v', long, action = ArgAction::Count)]
  verbose: u8,

  /// Decrease verbosity (-q, -qq)
  #[arg(short = 'q', long, action = ArgAction::Count)]
  quiet: u8,
}

fn init_logging(verbose: u8, quiet: u8) {
  let level = match (quiet, verbose) {
    (0, 0) => LevelFilter::Warn,
    (0, 1) => LevelFilter::Info,
    (0, 2) => LevelFilter::Debug,
    (0, _) => LevelFilter::Trace,
    (1, _) => LevelFilter::Error,
    _ => LevelFilter::Off,
  };
  let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
  builder.filter_level(level);
  let _ = builder.try_init();
}

/// Load the corpus found next to the program (or given with `--corpus`) and play one sentence
pub fn main() -> Result<(), Box<dyn Error>> {
  let cli = Cli::parse();
  init_logging(cli.verbose, cli.quiet);

  let mut config = GameConfig {
    max_length: cli.max_length,
    rare_threshold: cli.rare_threshold,
    seed: cli.seed,
    ..GameConfig::default()
  };
  if let Some(corpus) = cli.corpus {
    config.corpus_dir = corpus;
  }

  if cli.stats {
    print!("{}", corpus_stats::collect(&config, 10)?);
    return Ok(());
  }

  let sentences = load_playable(&config)?;
  let mut session = Session::new(&sentences, RandomPicker::from_seed(config.seed));
  let stdin = io::stdin();
  let stdout = io::stdout();
  session.play(stdin.lock(), stdout.lock())?;
  Ok(())
}
