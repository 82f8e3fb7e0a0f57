use {
  alignment::Alignment,
  anyhow::anyhow,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  corpus::Corpus,
  difficulty::Difficulty,
  error::Error,
  rand::{SeedableRng, rngs::StdRng, seq::SliceRandom},
  rating::Rating,
  session::Session,
  statistics::Statistics,
  std::{
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stdin, stdout},
    process,
    str::FromStr,
    time::{Duration, Instant},
  },
  tracing::{Level, debug, info},
};

mod alignment;
mod arguments;
mod corpus;
mod difficulty;
mod error;
mod interrupt;
mod rating;
mod session;
mod statistics;
mod style;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = interrupt::install().and_then(|()| Arguments::parse().run()) {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
