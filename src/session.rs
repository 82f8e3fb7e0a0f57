use {super::*, style::Style};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Report {
  pub(crate) difficulty: Difficulty,
  pub(crate) sample: &'static str,
  pub(crate) statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
  SelectDifficulty,
  ShowPrompt(Difficulty),
  AwaitStart {
    difficulty: Difficulty,
    sample: &'static str,
  },
  Capture {
    difficulty: Difficulty,
    sample: &'static str,
  },
  Compute {
    difficulty: Difficulty,
    sample: &'static str,
    start_time: Instant,
    typed: String,
  },
  Render(Report),
  Done(Report),
}

#[derive(Debug)]
pub(crate) struct Session<R, W> {
  alignment: Alignment,
  corpus: Corpus,
  difficulty: Option<Difficulty>,
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
  pub(crate) fn new(input: R, output: W, corpus: Corpus) -> Self {
    Self {
      alignment: Alignment::default(),
      corpus,
      difficulty: None,
      input,
      output,
    }
  }

  pub(crate) fn alignment(mut self, alignment: Alignment) -> Self {
    self.alignment = alignment;
    self
  }

  /// Skips the interactive difficulty prompt.
  pub(crate) fn difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
    self.difficulty = difficulty;
    self
  }

  fn read_line(&mut self) -> Result<String> {
    self.output.flush()?;

    let mut line = String::new();

    if self.input.read_line(&mut line)? == 0 {
      return Err(Error::UnexpectedEndOfInput.into());
    }

    if line.ends_with('\n') {
      line.pop();

      if line.ends_with('\r') {
        line.pop();
      }
    }

    Ok(line)
  }

  pub(crate) fn run(mut self) -> Result<Report> {
    writeln!(self.output, "{}", Style::Bold.paint("Keypace typing trainer"))?;
    writeln!(self.output, "Measure how fast and how accurately you type\n")?;

    let mut state = match self.difficulty {
      Some(difficulty) => State::ShowPrompt(difficulty),
      None => State::SelectDifficulty,
    };

    loop {
      state = match self.step(state)? {
        State::Done(report) => return Ok(report),
        next => next,
      };
    }
  }

  fn step(&mut self, state: State) -> Result<State> {
    Ok(match state {
      State::SelectDifficulty => {
        write!(self.output, "Choose difficulty (easy/medium/hard): ")?;

        match self.read_line()?.parse::<Difficulty>() {
          Ok(difficulty) => {
            debug!(%difficulty, "difficulty selected");
            State::ShowPrompt(difficulty)
          }
          Err(error) => {
            debug!(%error, "rejected difficulty");
            writeln!(self.output, "{}", Style::Red.paint("Invalid difficulty"))?;
            State::SelectDifficulty
          }
        }
      }
      State::ShowPrompt(difficulty) => {
        let sample = self.corpus.choose()?;

        debug!(sample, "sample chosen");

        writeln!(
          self.output,
          "\n{}\n{sample}\n",
          Style::Blue.paint(format!("Type this ({difficulty}):"))
        )?;

        State::AwaitStart { difficulty, sample }
      }
      State::AwaitStart { difficulty, sample } => {
        write!(self.output, "Press Enter to start...")?;
        self.read_line()?;
        State::Capture { difficulty, sample }
      }
      State::Capture { difficulty, sample } => {
        let start_time = Instant::now();

        writeln!(self.output, "{}", Style::Bold.paint("GO!"))?;

        let typed = self.read_line()?;

        State::Compute {
          difficulty,
          sample,
          start_time,
          typed,
        }
      }
      State::Compute {
        difficulty,
        sample,
        start_time,
        typed,
      } => {
        let statistics = Statistics::since(start_time, &typed, sample, self.alignment);

        info!(
          wpm = statistics.wpm,
          accuracy = statistics.accuracy,
          elapsed_time = statistics.elapsed_time,
          "round complete"
        );

        State::Render(Report {
          difficulty,
          sample,
          statistics,
        })
      }
      State::Render(report) => {
        self.render(&report)?;
        State::Done(report)
      }
      State::Done(report) => State::Done(report),
    })
  }

  fn render(&mut self, report: &Report) -> Result {
    let Report {
      difficulty,
      statistics,
      ..
    } = report;

    writeln!(self.output, "\n{}", Style::Bold.paint("Results"))?;
    writeln!(self.output, "{}", Style::Green.paint(format!("WPM: {}", statistics.wpm)))?;
    writeln!(
      self.output,
      "{}",
      Style::Green.paint(format!("Accuracy: {}%", statistics.accuracy))
    )?;
    writeln!(self.output, "Time: {:.2}s", statistics.elapsed_time)?;
    writeln!(
      self.output,
      "Target ({difficulty}): {} WPM",
      difficulty.target_wpm()
    )?;
    writeln!(self.output, "{}", statistics.rating())?;

    self.output.flush()?;

    Ok(())
  }
}
