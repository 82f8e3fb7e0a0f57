use super::*;

#[derive(Debug, Parser)]
#[clap(version, about = "Measure your typing speed and accuracy")]
pub(crate) struct Arguments {
  /// Strategy used to match typed characters against the sample
  #[clap(long, value_enum, default_value_t = Alignment::Positional)]
  alignment: Alignment,
  /// Difficulty to use instead of asking interactively
  #[clap(long, short)]
  difficulty: Option<Difficulty>,
  /// Seed for sample selection
  #[clap(long)]
  seed: Option<u64>,
  /// Log diagnostics to standard error
  #[clap(long, short)]
  verbose: bool,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    if self.verbose {
      tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .init();
    }

    debug!(arguments = ?self, "starting session");

    Session::new(stdin().lock(), stdout(), Corpus::new(self.seed))
      .alignment(self.alignment)
      .difficulty(self.difficulty)
      .run()?;

    Ok(())
  }
}
